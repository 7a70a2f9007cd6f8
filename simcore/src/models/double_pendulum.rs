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
//! Double pendulum model (coupled chaotic two-rod dynamics)
//!
//! Two rigid rods in series, each with a point mass at its end. The coupled
//! angular accelerations are the closed-form Lagrangian solution; both share
//! the denominator
//!
//! ```text
//! 2*m1 + m2 - m2*cos(2*theta1 - 2*theta2)
//! ```
//!
//! which can approach zero for certain mass ratios and configurations. The
//! resulting large accelerations are the system's chaotic sensitivity at
//! work and are deliberately not guarded: clamping them would silently
//! change the dynamics.
//!
//! State layout is `[theta1, theta2, omega1, omega2]` (angles from the
//! vertical in radians, angular velocities in rad/s).
//!
//! # References
//!
//! - Goldstein, H., Poole, C., & Safko, J. (2002). "Classical Mechanics"
//!   (3rd ed.). Section 1.6 (Lagrangian formulation).

use super::DynamicalSystem;
use crate::state::State;

/// Index of the inner rod angle (radians from the vertical)
pub const THETA1: usize = 0;
/// Index of the outer rod angle (radians from the vertical)
pub const THETA2: usize = 1;
/// Index of the inner rod angular velocity (rad/s)
pub const OMEGA1: usize = 2;
/// Index of the outer rod angular velocity (rad/s)
pub const OMEGA2: usize = 3;

/// Double pendulum parameters
///
/// Integrate with RK4 and
/// [`RECOMMENDED_SUBSTEPS`](DoublePendulum::RECOMMENDED_SUBSTEPS) sub-steps
/// per fixed step for a stability margin:
///
/// ```
/// use simcore::integration::Rk4;
/// use simcore::models::DoublePendulum;
///
/// let integrator = Rk4::with_substeps(DoublePendulum::RECOMMENDED_SUBSTEPS);
/// let model = DoublePendulum::new(1.0, 1.0, 1.0, 1.0, 9.8);
/// # let _ = (integrator, model);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DoublePendulum {
    m1: f64,
    m2: f64,
    l1: f64,
    l2: f64,
    gravity: f64,
}

impl DoublePendulum {
    /// Sub-step subdivision count used with RK4 for this system
    ///
    /// Empirically sufficient at a 1/60 s fixed step; there is no adaptive
    /// step-size controller.
    pub const RECOMMENDED_SUBSTEPS: u32 = 4;

    /// Create a double pendulum model
    ///
    /// # Arguments
    ///
    /// * `m1`, `m2` - bob masses (kg)
    /// * `l1`, `l2` - rod lengths (m)
    /// * `gravity` - gravitational acceleration (m/s²)
    ///
    /// # Panics
    ///
    /// Panics if any mass or length is non-positive, or if any parameter is
    /// not finite.
    pub fn new(m1: f64, m2: f64, l1: f64, l2: f64, gravity: f64) -> Self {
        assert!(m1 > 0.0 && m1.is_finite(), "Mass must be positive and finite");
        assert!(m2 > 0.0 && m2.is_finite(), "Mass must be positive and finite");
        assert!(l1 > 0.0 && l1.is_finite(), "Length must be positive and finite");
        assert!(l2 > 0.0 && l2.is_finite(), "Length must be positive and finite");
        assert!(
            gravity >= 0.0 && gravity.is_finite(),
            "Gravity must be non-negative and finite"
        );
        DoublePendulum { m1, m2, l1, l2, gravity }
    }

    /// Total mechanical energy, with the pivot as potential-energy reference
    ///
    /// Conserved by the true dynamics; useful as a drift diagnostic for
    /// integrator comparisons.
    pub fn mechanical_energy(&self, state: &State<4>) -> f64 {
        let (t1, t2) = (state[THETA1], state[THETA2]);
        let (w1, w2) = (state[OMEGA1], state[OMEGA2]);

        let v1_sq = self.l1 * self.l1 * w1 * w1;
        let v2_sq = v1_sq
            + self.l2 * self.l2 * w2 * w2
            + 2.0 * self.l1 * self.l2 * w1 * w2 * (t1 - t2).cos();
        let kinetic = 0.5 * self.m1 * v1_sq + 0.5 * self.m2 * v2_sq;

        let potential = -(self.m1 + self.m2) * self.gravity * self.l1 * t1.cos()
            - self.m2 * self.gravity * self.l2 * t2.cos();
        kinetic + potential
    }
}

impl DynamicalSystem<4> for DoublePendulum {
    fn derivatives(&self, state: &State<4>, _t: f64) -> State<4> {
        let (m1, m2, l1, l2, g) = (self.m1, self.m2, self.l1, self.l2, self.gravity);
        let (t1, t2) = (state[THETA1], state[THETA2]);
        let (w1, w2) = (state[OMEGA1], state[OMEGA2]);

        let delta = t1 - t2;
        let sin_delta = delta.sin();
        let cos_delta = delta.cos();
        // Shared denominator; approaches zero for certain configurations,
        // which shows up as the expected large chaotic accelerations.
        let den = 2.0 * m1 + m2 - m2 * (2.0 * delta).cos();

        let alpha1 = (-g * (2.0 * m1 + m2) * t1.sin()
            - m2 * g * (t1 - 2.0 * t2).sin()
            - 2.0 * sin_delta * m2 * (w2 * w2 * l2 + w1 * w1 * l1 * cos_delta))
            / (l1 * den);

        let alpha2 = (2.0
            * sin_delta
            * (w1 * w1 * l1 * (m1 + m2)
                + g * (m1 + m2) * t1.cos()
                + w2 * w2 * l2 * m2 * cos_delta))
            / (l2 * den);

        State::new([w1, w2, alpha1, alpha2])
    }
}
