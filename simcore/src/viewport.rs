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
//! Affine mapping between physical coordinates and render-surface pixels
//!
//! A [`Viewport`] maps world coordinates (meters, +y up) onto surface pixels
//! (+y down) through a uniform `scale` and a world-space `center` pinned to
//! the middle of the surface. The two transforms are exact inverses up to
//! floating-point rounding.
//!
//! Resizing the surface only refreshes the cached screen center; `scale`
//! and `center` are untouched, so the user's framing survives window
//! resizes.

/// World-to-screen transform for a render surface
///
/// # Example
///
/// ```
/// use simcore::Viewport;
///
/// let viewport = Viewport::new(100.0, (0.0, 0.0), 800.0, 600.0);
/// let (sx, sy) = viewport.world_to_screen(1.0, 1.0);
/// assert_eq!((sx, sy), (500.0, 200.0)); // +y up in world, down on screen
/// let (wx, wy) = viewport.screen_to_world(sx, sy);
/// assert!((wx - 1.0).abs() < 1e-12 && (wy - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    center: (f64, f64),
    surface_width: f64,
    surface_height: f64,
    // Screen-space point the world center maps to; refreshed only on resize.
    screen_center: (f64, f64),
}

impl Viewport {
    /// Create a viewport
    ///
    /// # Arguments
    ///
    /// * `scale` - pixels per world unit
    /// * `center` - world point mapped to the middle of the surface
    /// * `surface_width`, `surface_height` - surface size in pixels
    ///
    /// # Panics
    ///
    /// Panics if `scale` is non-positive, a surface dimension is negative,
    /// or any argument is not finite.
    pub fn new(scale: f64, center: (f64, f64), surface_width: f64, surface_height: f64) -> Self {
        assert!(scale > 0.0 && scale.is_finite(), "Scale must be positive and finite");
        assert!(
            center.0.is_finite() && center.1.is_finite(),
            "Center must be finite"
        );
        assert!(
            surface_width >= 0.0 && surface_width.is_finite(),
            "Surface width must be non-negative and finite"
        );
        assert!(
            surface_height >= 0.0 && surface_height.is_finite(),
            "Surface height must be non-negative and finite"
        );
        Viewport {
            scale,
            center,
            surface_width,
            surface_height,
            screen_center: (surface_width * 0.5, surface_height * 0.5),
        }
    }

    /// Pixels per world unit
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// World point mapped to the middle of the surface
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Surface size in pixels
    pub fn surface_size(&self) -> (f64, f64) {
        (self.surface_width, self.surface_height)
    }

    /// Set the zoom level in pixels per world unit
    ///
    /// # Panics
    ///
    /// Panics if `scale` is non-positive or not finite.
    pub fn set_scale(&mut self, scale: f64) {
        assert!(scale > 0.0 && scale.is_finite(), "Scale must be positive and finite");
        self.scale = scale;
    }

    /// Re-center the view on a world point (host pan)
    pub fn set_center(&mut self, x: f64, y: f64) {
        self.center = (x, y);
    }

    /// Adopt a new surface size, preserving the user's framing
    ///
    /// Only the cached screen center is refreshed; `scale` and `center`
    /// never change here.
    pub fn resize(&mut self, surface_width: f64, surface_height: f64) {
        assert!(
            surface_width >= 0.0 && surface_width.is_finite(),
            "Surface width must be non-negative and finite"
        );
        assert!(
            surface_height >= 0.0 && surface_height.is_finite(),
            "Surface height must be non-negative and finite"
        );
        self.surface_width = surface_width;
        self.surface_height = surface_height;
        self.screen_center = (surface_width * 0.5, surface_height * 0.5);
    }

    /// Map a world point (meters, +y up) to surface pixels (+y down)
    pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.screen_center.0 + (x - self.center.0) * self.scale,
            self.screen_center.1 - (y - self.center.1) * self.scale,
        )
    }

    /// Map a surface pixel back to world coordinates
    pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        (
            (sx - self.screen_center.0) / self.scale + self.center.0,
            (self.screen_center.1 - sy) / self.scale + self.center.1,
        )
    }

    /// Convert a scalar world length to pixels
    ///
    /// For drawing vector magnitudes without inventing a second point.
    pub fn to_pixels(&self, meters: f64) -> f64 {
        meters * self.scale
    }

    /// Convert a scalar pixel length to world units
    pub fn to_meters(&self, pixels: f64) -> f64 {
        pixels / self.scale
    }
}
