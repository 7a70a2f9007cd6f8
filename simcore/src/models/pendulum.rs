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
//! Damped pendulum model
//!
//! A rigid pendulum of length L with a point mass m, under gravity g and
//! viscous damping c:
//!
//! ```text
//! alpha = -(g/L)*sin(theta) - (c/m)*omega
//! ```
//!
//! State layout is `[theta, omega]` (angle from the vertical in radians,
//! angular velocity in rad/s), which also satisfies the
//! `[positions.., velocities..]` convention of the symplectic integrator.

use super::{AccelerationFunction, DynamicalSystem};
use crate::state::State;

/// Index of the angle field (radians from the vertical)
pub const THETA: usize = 0;
/// Index of the angular velocity field (rad/s)
pub const OMEGA: usize = 1;

/// Damped pendulum parameters
///
/// # Example
///
/// ```
/// use simcore::models::{pendulum, DampedPendulum, DynamicalSystem};
/// use simcore::State;
///
/// let model = DampedPendulum::new(9.81, 1.0, 1.0, 0.1);
/// let rates = model.derivatives(&State::new([0.5, 0.0]), 0.0);
/// assert!(rates[pendulum::OMEGA] < 0.0); // restoring torque
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DampedPendulum {
    gravity: f64,
    length: f64,
    mass: f64,
    damping: f64,
}

impl DampedPendulum {
    /// Create a damped pendulum model
    ///
    /// # Arguments
    ///
    /// * `gravity` - gravitational acceleration (m/s²)
    /// * `length` - rod length (m)
    /// * `mass` - bob mass (kg)
    /// * `damping` - viscous damping coefficient (N·m·s)
    ///
    /// # Panics
    ///
    /// Panics if `length` or `mass` is non-positive, or if any parameter is
    /// negative or not finite.
    pub fn new(gravity: f64, length: f64, mass: f64, damping: f64) -> Self {
        assert!(
            gravity >= 0.0 && gravity.is_finite(),
            "Gravity must be non-negative and finite"
        );
        assert!(length > 0.0 && length.is_finite(), "Length must be positive and finite");
        assert!(mass > 0.0 && mass.is_finite(), "Mass must be positive and finite");
        assert!(
            damping >= 0.0 && damping.is_finite(),
            "Damping must be non-negative and finite"
        );
        DampedPendulum { gravity, length, mass, damping }
    }

    /// Create an undamped pendulum (`c = 0`)
    pub fn undamped(gravity: f64, length: f64, mass: f64) -> Self {
        DampedPendulum::new(gravity, length, mass, 0.0)
    }

    /// Angular acceleration at the given angle and angular velocity
    pub fn angular_acceleration(&self, theta: f64, omega: f64) -> f64 {
        -(self.gravity / self.length) * theta.sin() - (self.damping / self.mass) * omega
    }

    /// Total mechanical energy, with the pivot as potential-energy reference
    ///
    /// `E = 0.5*m*(L*omega)² + m*g*L*(1 - cos(theta))`
    pub fn mechanical_energy(&self, state: &State<2>) -> f64 {
        let speed = self.length * state[OMEGA];
        let kinetic = 0.5 * self.mass * speed * speed;
        let potential = self.mass * self.gravity * self.length * (1.0 - state[THETA].cos());
        kinetic + potential
    }
}

impl DynamicalSystem<2> for DampedPendulum {
    fn derivatives(&self, state: &State<2>, _t: f64) -> State<2> {
        State::new([state[OMEGA], self.angular_acceleration(state[THETA], state[OMEGA])])
    }
}

impl AccelerationFunction for DampedPendulum {
    fn acceleration(&self, position: f64, velocity: f64, _t: f64) -> f64 {
        self.angular_acceleration(position, velocity)
    }
}
