// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Fixed-shape numeric state vectors
//!
//! Simulation state is a fixed-size vector of double-precision scalars whose
//! shape is chosen by the physics model at compile time. Each model exports
//! `usize` index constants naming its slots (e.g. `pendulum::THETA`), so the
//! field set is stable by construction: integrators can neither drop nor add
//! fields, and there are no runtime field-presence checks.
//!
//! `State` is `Copy`, so "previous" and "current" buffers held by a scene are
//! always distinct values. Rates (time derivatives) share the same shape and
//! the same type.

use std::ops::{Index, IndexMut};

/// A fixed-size vector of `f64` scalars holding simulation state or rates.
///
/// The const parameter `N` is the number of scalar fields. Models advancing
/// a second-order system by the symplectic integrator lay their fields out
/// as `[positions.., velocities..]`; see
/// [`SemiImplicitEuler`](crate::integration::SemiImplicitEuler).
///
/// # Examples
///
/// ```
/// use simcore::State;
///
/// let state = State::new([1.0, 0.5]);
/// assert_eq!(state[0], 1.0);
/// assert!(state.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<const N: usize> {
    values: [f64; N],
}

impl<const N: usize> State<N> {
    /// Create a state from an array of field values
    pub fn new(values: [f64; N]) -> Self {
        State { values }
    }

    /// Create a state with every field set to zero
    pub fn zero() -> Self {
        State { values: [0.0; N] }
    }

    /// Number of scalar fields
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the state has no fields
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Check that every field is finite (not NaN or infinite)
    ///
    /// Non-finite values are never sanitized by the core; this check exists
    /// so hosts can surface them (a frozen or vanished object on screen).
    pub fn is_valid(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Get the state as an array
    pub fn as_array(&self) -> [f64; N] {
        self.values
    }

    /// `self + rates * dt`, field by field
    ///
    /// The basic building block of every explicit integration scheme.
    pub fn add_scaled(&self, rates: &State<N>, dt: f64) -> State<N> {
        let mut values = self.values;
        for (value, rate) in values.iter_mut().zip(rates.values.iter()) {
            *value += rate * dt;
        }
        State { values }
    }

    /// Every field multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> State<N> {
        let mut values = self.values;
        for value in values.iter_mut() {
            *value *= factor;
        }
        State { values }
    }

    /// Linear blend between `self` (at `alpha = 0`) and `other` (at `alpha = 1`)
    ///
    /// Used by renderers to interpolate between the previous and current
    /// fixed-step states using the clock's leftover-time fraction.
    pub fn lerp(&self, other: &State<N>, alpha: f64) -> State<N> {
        let mut values = self.values;
        for (value, target) in values.iter_mut().zip(other.values.iter()) {
            *value += (target - *value) * alpha;
        }
        State { values }
    }
}

impl<const N: usize> Index<usize> for State<N> {
    type Output = f64;

    fn index(&self, field: usize) -> &f64 {
        &self.values[field]
    }
}

impl<const N: usize> IndexMut<usize> for State<N> {
    fn index_mut(&mut self, field: usize) -> &mut f64 {
        &mut self.values[field]
    }
}

impl<const N: usize> Default for State<N> {
    fn default() -> Self {
        State::zero()
    }
}
