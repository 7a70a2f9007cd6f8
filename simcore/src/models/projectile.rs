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
//! Drag projectile model with ground contact
//!
//! A projectile under gravity and linear drag, per axis:
//!
//! ```text
//! a = (-k*v - m*g*ĵ) / m
//! ```
//!
//! The continuous dynamics live in [`DragProjectile`]; ground contact is a
//! discrete event and lives in [`GroundContact`], a stateful resolver the
//! host applies after each fixed step. A latched `landed` flag provides
//! hysteresis so the contact response fires once per landing instead of
//! every step the projectile sits on the ground.
//!
//! State layout is `[x, y, vx, vy]`.

use super::DynamicalSystem;
use crate::state::State;

/// Index of the horizontal position (m)
pub const X: usize = 0;
/// Index of the vertical position (m, up positive)
pub const Y: usize = 1;
/// Index of the horizontal velocity (m/s)
pub const VX: usize = 2;
/// Index of the vertical velocity (m/s)
pub const VY: usize = 3;

/// Drag projectile parameters
///
/// # Example
///
/// ```
/// use simcore::models::{projectile, DragProjectile, DynamicalSystem};
/// use simcore::State;
///
/// let model = DragProjectile::new(1.0, 0.1, 9.81);
/// let rates = model.derivatives(&State::new([0.0, 10.0, 5.0, 0.0]), 0.0);
/// assert!(rates[projectile::VX] < 0.0); // drag opposes motion
/// assert!(rates[projectile::VY] < 0.0); // gravity pulls down
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DragProjectile {
    mass: f64,
    drag: f64,
    gravity: f64,
}

impl DragProjectile {
    /// Create a drag projectile model
    ///
    /// # Arguments
    ///
    /// * `mass` - projectile mass (kg)
    /// * `drag` - linear drag coefficient k (N·s/m)
    /// * `gravity` - gravitational acceleration (m/s²)
    ///
    /// # Panics
    ///
    /// Panics if `mass` is non-positive, `drag` or `gravity` is negative, or
    /// any parameter is not finite.
    pub fn new(mass: f64, drag: f64, gravity: f64) -> Self {
        assert!(mass > 0.0 && mass.is_finite(), "Mass must be positive and finite");
        assert!(drag >= 0.0 && drag.is_finite(), "Drag must be non-negative and finite");
        assert!(
            gravity >= 0.0 && gravity.is_finite(),
            "Gravity must be non-negative and finite"
        );
        DragProjectile { mass, drag, gravity }
    }
}

impl DynamicalSystem<4> for DragProjectile {
    fn derivatives(&self, state: &State<4>, _t: f64) -> State<4> {
        let k_over_m = self.drag / self.mass;
        State::new([
            state[VX],
            state[VY],
            -k_over_m * state[VX],
            -k_over_m * state[VY] - self.gravity,
        ])
    }
}

/// Stateful ground-contact resolver with landing hysteresis
///
/// Apply [`resolve`](GroundContact::resolve) to the projectile state after
/// each fixed step. When the projectile crosses the ground moving downward,
/// the vertical motion is brought to rest and the `landed` latch is set; the
/// latch keeps the response from re-firing every step and only releases once
/// the projectile has been lifted clearly above the ground again.
#[derive(Debug, Clone)]
pub struct GroundContact {
    ground_level: f64,
    landed: bool,
}

impl GroundContact {
    /// Height above the ground at which the landed latch releases
    ///
    /// Keeps float jitter at the surface from toggling the latch.
    pub const RELEASE_MARGIN: f64 = 1e-6;

    /// Create a resolver for the given ground height
    ///
    /// # Panics
    ///
    /// Panics if `ground_level` is not finite.
    pub fn new(ground_level: f64) -> Self {
        assert!(ground_level.is_finite(), "Ground level must be finite");
        GroundContact { ground_level, landed: false }
    }

    /// Whether the projectile is currently latched on the ground
    pub fn landed(&self) -> bool {
        self.landed
    }

    /// Clear the latch (scene reset, relaunch)
    pub fn reset(&mut self) {
        self.landed = false;
    }

    /// Apply ground contact to `state`, returning `true` on the landing
    /// transition itself
    ///
    /// While latched, the vertical fields stay pinned at rest on the ground;
    /// the latch releases when the host moves the projectile above
    /// `ground_level + RELEASE_MARGIN`.
    pub fn resolve(&mut self, state: &mut State<4>) -> bool {
        if self.landed {
            if state[Y] > self.ground_level + Self::RELEASE_MARGIN {
                self.landed = false;
            } else {
                state[Y] = self.ground_level;
                state[VY] = 0.0;
            }
            return false;
        }

        if state[Y] <= self.ground_level && state[VY] <= 0.0 {
            state[Y] = self.ground_level;
            state[VY] = 0.0;
            self.landed = true;
            return true;
        }
        false
    }
}
