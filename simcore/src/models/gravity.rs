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
//! Planar two-body gravitation model
//!
//! Newton's law of universal gravitation between two point masses:
//!
//! ```text
//! F = G * (m1 * m2) / r²
//! ```
//!
//! The `r = 0` singularity is explicitly guarded: coincident bodies feel
//! zero force rather than producing infinities. No softening is applied at
//! small nonzero separations; close encounters legitimately produce large
//! accelerations.
//!
//! State layout is `[x1, y1, x2, y2, vx1, vy1, vx2, vy2]` (positions first,
//! velocities second, per the symplectic convention).
//!
//! # References
//!
//! - Newton, I. (1687). "Philosophiæ Naturalis Principia Mathematica"
//! - [CODATA 2018 value for G](https://physics.nist.gov/cgi-bin/cuu/Value?bg)

use super::DynamicalSystem;
use crate::state::State;

/// Standard gravitational constant in SI units (m³/(kg⋅s²))
///
/// CODATA 2018 recommended value: 6.67430(15) × 10⁻¹¹ m³/(kg⋅s²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Index of body 1's x position
pub const X1: usize = 0;
/// Index of body 1's y position
pub const Y1: usize = 1;
/// Index of body 2's x position
pub const X2: usize = 2;
/// Index of body 2's y position
pub const Y2: usize = 3;
/// Index of body 1's x velocity
pub const VX1: usize = 4;
/// Index of body 1's y velocity
pub const VY1: usize = 5;
/// Index of body 2's x velocity
pub const VX2: usize = 6;
/// Index of body 2's y velocity
pub const VY2: usize = 7;

/// Two-body gravitation parameters
///
/// # Example
///
/// ```
/// use simcore::models::TwoBodyGravity;
///
/// // Demonstration scale: G = 1 instead of 6.674e-11.
/// let model = TwoBodyGravity::new(1.0, 1000.0, 1.0);
/// assert_eq!(model.g_constant(), 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TwoBodyGravity {
    g_constant: f64,
    m1: f64,
    m2: f64,
}

impl TwoBodyGravity {
    /// Create a two-body gravitation model
    ///
    /// # Arguments
    ///
    /// * `g_constant` - gravitational constant; use [`GRAVITATIONAL_CONSTANT`]
    ///   for realistic units or a scaled value for demonstrations
    /// * `m1`, `m2` - body masses (kg)
    ///
    /// # Panics
    ///
    /// Panics if `g_constant` is negative, a mass is non-positive, or any
    /// parameter is not finite.
    pub fn new(g_constant: f64, m1: f64, m2: f64) -> Self {
        assert!(
            g_constant >= 0.0 && g_constant.is_finite(),
            "Gravitational constant must be non-negative and finite"
        );
        assert!(m1 > 0.0 && m1.is_finite(), "Mass must be positive and finite");
        assert!(m2 > 0.0 && m2.is_finite(), "Mass must be positive and finite");
        TwoBodyGravity { g_constant, m1, m2 }
    }

    /// Create a model with the standard constant scaled by `scale_factor`
    ///
    /// Useful for demonstrations where realistic G is too small to animate.
    pub fn with_scaled_g(scale_factor: f64, m1: f64, m2: f64) -> Self {
        TwoBodyGravity::new(GRAVITATIONAL_CONSTANT * scale_factor, m1, m2)
    }

    /// Get the gravitational constant in use
    pub fn g_constant(&self) -> f64 {
        self.g_constant
    }

    /// Total linear momentum `(px, py)` of the pair
    ///
    /// Conserved by the true dynamics; a useful drift diagnostic.
    pub fn total_momentum(&self, state: &State<8>) -> (f64, f64) {
        (
            self.m1 * state[VX1] + self.m2 * state[VX2],
            self.m1 * state[VY1] + self.m2 * state[VY2],
        )
    }

    /// Total mechanical energy (kinetic plus gravitational potential)
    ///
    /// The potential term is zero for coincident bodies, matching the
    /// force guard.
    pub fn total_energy(&self, state: &State<8>) -> f64 {
        let kinetic = 0.5 * self.m1 * (state[VX1] * state[VX1] + state[VY1] * state[VY1])
            + 0.5 * self.m2 * (state[VX2] * state[VX2] + state[VY2] * state[VY2]);
        let dx = state[X2] - state[X1];
        let dy = state[Y2] - state[Y1];
        let r = (dx * dx + dy * dy).sqrt();
        let potential = if r == 0.0 {
            0.0
        } else {
            -self.g_constant * self.m1 * self.m2 / r
        };
        kinetic + potential
    }
}

impl DynamicalSystem<8> for TwoBodyGravity {
    fn derivatives(&self, state: &State<8>, _t: f64) -> State<8> {
        let dx = state[X2] - state[X1];
        let dy = state[Y2] - state[Y1];
        let r_squared = dx * dx + dy * dy;

        // Coincident bodies: zero force instead of a division by zero.
        let (ax1, ay1, ax2, ay2) = if r_squared == 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let r = r_squared.sqrt();
            // Acceleration magnitude on body 1 is G*m2/r²; direction from
            // body 1 toward body 2, and opposite for body 2.
            let inv_r3 = 1.0 / (r_squared * r);
            let a1 = self.g_constant * self.m2 * inv_r3;
            let a2 = self.g_constant * self.m1 * inv_r3;
            (a1 * dx, a1 * dy, -a2 * dx, -a2 * dy)
        };

        State::new([
            state[VX1],
            state[VY1],
            state[VX2],
            state[VY2],
            ax1,
            ay1,
            ax2,
            ay2,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::{Integrator, Rk4};

    #[test]
    fn test_coincident_bodies_feel_zero_force() {
        let model = TwoBodyGravity::new(1.0, 5.0, 3.0);
        let rates = model.derivatives(&State::zero(), 0.0);
        assert!(rates.is_valid(), "r = 0 must not produce NaN or infinity");
        assert_eq!(&rates.as_array()[4..], &[0.0; 4]);
    }

    #[test]
    fn test_attraction_is_mutual_and_opposite() {
        let model = TwoBodyGravity::new(1.0, 2.0, 1.0);
        let state = State::new([0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let rates = model.derivatives(&state, 0.0);

        assert!(rates[VX1] > 0.0, "body 1 pulled toward body 2");
        assert!(rates[VX2] < 0.0, "body 2 pulled toward body 1");
        // Force balance: m1*a1 = m2*a2.
        assert!((2.0 * rates[VX1] + 1.0 * rates[VX2]).abs() < 1e-15);
        // Inverse-square magnitude: a1 = G*m2/r² = 1*1/100.
        assert!((rates[VX1] - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_circular_orbit_stays_circular() {
        // Light satellite around a heavy primary: v = sqrt(G*M/r).
        let g = 1.0;
        let primary = 1000.0;
        let model = TwoBodyGravity::new(g, primary, 1.0);
        let r = 10.0;
        let v = (g * primary / r).sqrt();
        let mut state = State::new([0.0, 0.0, r, 0.0, 0.0, 0.0, 0.0, v]);

        let integrator = Rk4::new();
        let dt = 1.0 / 60.0;
        let mut t = 0.0;
        for _ in 0..600 {
            state = integrator.step(&model, &state, t, dt);
            t += dt;
        }

        let dx = state[X2] - state[X1];
        let dy = state[Y2] - state[Y1];
        let radius = (dx * dx + dy * dy).sqrt();
        assert!(
            (radius - r).abs() < 0.05 * r,
            "Orbit radius should stay near {}, got {}",
            r,
            radius
        );
    }

    #[test]
    fn test_with_scaled_g() {
        let model = TwoBodyGravity::with_scaled_g(1e9, 1.0, 1.0);
        assert!((model.g_constant() - GRAVITATIONAL_CONSTANT * 1e9).abs() < 1e-15);
    }

    #[test]
    #[should_panic(expected = "Gravitational constant must be non-negative and finite")]
    fn test_negative_g_panics() {
        TwoBodyGravity::new(-1.0, 1.0, 1.0);
    }
}
