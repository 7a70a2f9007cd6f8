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
//! Explicit (forward) Euler integrator implementation
//!
//! The simplest explicit scheme: one derivative evaluation per step.
//!
//! # Algorithm
//!
//! ```text
//! y(t + dt) = y(t) + f(t, y)*dt
//! ```
//!
//! # Properties
//!
//! - **First-order accurate**: Local error O(dt²), global error O(dt)
//! - **Not symplectic**: Energy grows monotonically on conservative systems
//! - **One evaluation per step**: Cheapest scheme available
//!
//! Suitable only for non-conservative demonstrations where dissipation masks
//! the drift, and as the baseline in accuracy comparisons.

use super::Integrator;
use crate::models::DynamicalSystem;
use crate::state::State;

/// Explicit Euler integrator
///
/// # Example
///
/// ```
/// use simcore::integration::{ExplicitEuler, Integrator};
/// use simcore::State;
///
/// // Constant unit velocity, zero acceleration.
/// let free = |state: &State<2>, _t: f64| State::new([state[1], 0.0]);
/// let next = ExplicitEuler.step(&free, &State::new([0.0, 1.0]), 0.0, 0.5);
/// assert_eq!(next.as_array(), [0.5, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl<const N: usize> Integrator<N> for ExplicitEuler {
    fn name(&self) -> &str {
        "Explicit Euler"
    }

    fn step(
        &self,
        system: &dyn DynamicalSystem<N>,
        state: &State<N>,
        t: f64,
        dt: f64,
    ) -> State<N> {
        if dt == 0.0 {
            return *state;
        }
        let rates = system.derivatives(state, t);
        state.add_scaled(&rates, dt)
    }
}
