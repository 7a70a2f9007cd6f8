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
//! Two-body collision resolution
//!
//! Impulse-based response for two circular bodies: the relative velocity is
//! decomposed into components normal and tangential to the contact, 1-D
//! restitution is applied along the normal only, and the components are
//! recombined (the tangential part is untouched, so there is no friction).
//! The impulse applies only while the bodies are approaching; separating
//! bodies are left alone so a contact is not resolved twice. Resolution
//! finishes with a minimal inverse-mass-weighted positional de-overlap.
//!
//! This is an event response, not an ODE: it runs between fixed steps, on
//! whatever pair the (out-of-scope) scene decides has collided.

/// A circular body participating in a collision
///
/// # Example
///
/// ```
/// use simcore::models::Body;
///
/// let body = Body::new(0.0, 0.0, 3.0, 0.0, 2.0, 0.5);
/// assert_eq!(body.kinetic_energy(), 9.0);
/// assert_eq!(body.momentum(), (6.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// x position (m)
    pub x: f64,
    /// y position (m)
    pub y: f64,
    /// x velocity (m/s)
    pub vx: f64,
    /// y velocity (m/s)
    pub vy: f64,
    /// mass (kg)
    pub mass: f64,
    /// radius (m)
    pub radius: f64,
}

impl Body {
    /// Create a body
    ///
    /// # Panics
    ///
    /// Panics if `mass` or `radius` is non-positive or not finite.
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, mass: f64, radius: f64) -> Self {
        assert!(mass > 0.0 && mass.is_finite(), "Mass must be positive and finite");
        assert!(radius > 0.0 && radius.is_finite(), "Radius must be positive and finite");
        Body { x, y, vx, vy, mass, radius }
    }

    /// Kinetic energy `0.5*m*|v|²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * (self.vx * self.vx + self.vy * self.vy)
    }

    /// Linear momentum `(m*vx, m*vy)`
    pub fn momentum(&self) -> (f64, f64) {
        (self.mass * self.vx, self.mass * self.vy)
    }
}

/// Resolve a collision between two bodies, returning `true` if an impulse
/// was applied
///
/// `restitution` is the fraction of relative normal velocity preserved:
/// 1 is perfectly elastic, 0 perfectly inelastic. The impulse is skipped
/// when the bodies do not overlap, when they are exactly coincident (no
/// defined normal), or when they are already separating; positional
/// de-overlap still runs for any overlapping pair.
///
/// # Panics
///
/// Panics if `restitution` is outside `[0, 1]`.
pub fn resolve_collision(a: &mut Body, b: &mut Body, restitution: f64) -> bool {
    assert!(
        (0.0..=1.0).contains(&restitution),
        "Restitution must be within [0, 1]"
    );

    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dist_squared = dx * dx + dy * dy;
    if dist_squared == 0.0 {
        // Coincident centers: no contact normal to resolve along.
        return false;
    }

    let dist = dist_squared.sqrt();
    let overlap = (a.radius + b.radius) - dist;
    if overlap <= 0.0 {
        return false;
    }

    // Contact normal from a toward b.
    let nx = dx / dist;
    let ny = dy / dist;

    // Relative normal velocity; positive means approaching.
    let approach = (a.vx - b.vx) * nx + (a.vy - b.vy) * ny;

    let inv_mass_a = 1.0 / a.mass;
    let inv_mass_b = 1.0 / b.mass;

    let applied = approach > 0.0;
    if applied {
        // 1-D restitution along the normal; tangential components are
        // carried through untouched.
        let impulse = (1.0 + restitution) * approach / (inv_mass_a + inv_mass_b);
        a.vx -= impulse * inv_mass_a * nx;
        a.vy -= impulse * inv_mass_a * ny;
        b.vx += impulse * inv_mass_b * nx;
        b.vy += impulse * inv_mass_b * ny;
    }

    // Minimal positional de-overlap, split by inverse mass so the heavier
    // body moves less.
    let correction = overlap / (inv_mass_a + inv_mass_b);
    a.x -= correction * inv_mass_a * nx;
    a.y -= correction * inv_mass_a * ny;
    b.x += correction * inv_mass_b * nx;
    b.y += correction * inv_mass_b * ny;

    applied
}
