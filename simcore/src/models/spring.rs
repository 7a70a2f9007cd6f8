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
//! Spring-mass-damper model
//!
//! A mass on a linear spring with viscous damping:
//!
//! ```text
//! F = -k*x - c*v
//! ```
//!
//! The spring and damping force terms are exposed separately so hosts can
//! visualize them individually; the derivative sums them before integration.
//!
//! State layout is `[x, v]` (displacement from equilibrium in meters,
//! velocity in m/s), satisfying the symplectic integrator's
//! `[positions.., velocities..]` convention.

use super::{AccelerationFunction, DynamicalSystem};
use crate::state::State;

/// Index of the displacement field (m from equilibrium)
pub const POSITION: usize = 0;
/// Index of the velocity field (m/s)
pub const VELOCITY: usize = 1;

/// Spring-mass-damper parameters
///
/// # Example
///
/// ```
/// use simcore::models::SpringMassDamper;
///
/// let model = SpringMassDamper::new(100.0, 0.5, 1.0);
/// assert_eq!(model.spring_force(0.1), -10.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpringMassDamper {
    stiffness: f64,
    damping: f64,
    mass: f64,
}

impl SpringMassDamper {
    /// Create a spring-mass-damper model
    ///
    /// # Arguments
    ///
    /// * `stiffness` - spring constant k (N/m)
    /// * `damping` - viscous damping coefficient c (N·s/m)
    /// * `mass` - attached mass (kg)
    ///
    /// # Panics
    ///
    /// Panics if `stiffness` or `mass` is non-positive, `damping` is
    /// negative, or any parameter is not finite.
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        assert!(
            stiffness > 0.0 && stiffness.is_finite(),
            "Stiffness must be positive and finite"
        );
        assert!(
            damping >= 0.0 && damping.is_finite(),
            "Damping must be non-negative and finite"
        );
        assert!(mass > 0.0 && mass.is_finite(), "Mass must be positive and finite");
        SpringMassDamper { stiffness, damping, mass }
    }

    /// Create an undamped spring (`c = 0`)
    pub fn undamped(stiffness: f64, mass: f64) -> Self {
        SpringMassDamper::new(stiffness, 0.0, mass)
    }

    /// Restoring force `-k*x` at displacement `x`
    pub fn spring_force(&self, x: f64) -> f64 {
        -self.stiffness * x
    }

    /// Damping force `-c*v` at velocity `v`
    pub fn damping_force(&self, v: f64) -> f64 {
        -self.damping * v
    }

    /// Natural angular frequency `sqrt(k/m)` of the undamped system
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Total mechanical energy `0.5*m*v² + 0.5*k*x²`
    pub fn mechanical_energy(&self, state: &State<2>) -> f64 {
        let x = state[POSITION];
        let v = state[VELOCITY];
        0.5 * self.mass * v * v + 0.5 * self.stiffness * x * x
    }
}

impl DynamicalSystem<2> for SpringMassDamper {
    fn derivatives(&self, state: &State<2>, _t: f64) -> State<2> {
        let force = self.spring_force(state[POSITION]) + self.damping_force(state[VELOCITY]);
        State::new([state[VELOCITY], force / self.mass])
    }
}

impl AccelerationFunction for SpringMassDamper {
    fn acceleration(&self, position: f64, velocity: f64, _t: f64) -> f64 {
        (self.spring_force(position) + self.damping_force(velocity)) / self.mass
    }
}
