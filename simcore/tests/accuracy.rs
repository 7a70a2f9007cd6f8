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
//! Tests verifying integrator accuracy against analytic solutions

use simcore::integration::{ExplicitEuler, Integrator, Rk4};
use simcore::models::{spring, SpringMassDamper};
use simcore::State;

/// Undamped harmonic oscillator with a known analytic solution
///
/// x(t) = x0*cos(omega*t), omega = sqrt(k/m)
struct AnalyticOscillator {
    model: SpringMassDamper,
    x0: f64,
}

impl AnalyticOscillator {
    fn new(stiffness: f64, mass: f64, x0: f64) -> Self {
        AnalyticOscillator { model: SpringMassDamper::undamped(stiffness, mass), x0 }
    }

    fn position_at(&self, t: f64) -> f64 {
        self.x0 * (self.model.natural_frequency() * t).cos()
    }

    /// Integrate for `steps` steps of `dt` and return the absolute position
    /// error against the analytic solution.
    fn error_after(&self, integrator: &dyn Integrator<2>, dt: f64, steps: usize) -> f64 {
        let mut state = State::new([self.x0, 0.0]);
        let mut t = 0.0;
        for _ in 0..steps {
            state = integrator.step(&self.model, &state, t, dt);
            t += dt;
        }
        (state[spring::POSITION] - self.position_at(t)).abs()
    }
}

#[test]
fn test_rk4_matches_analytic_oscillator() {
    let oscillator = AnalyticOscillator::new(100.0, 1.0, 1.0);

    // Two seconds at 60 Hz.
    let error = oscillator.error_after(&Rk4::new(), 1.0 / 60.0, 120);
    assert!(
        error < 1e-3,
        "RK4 should track the analytic solution closely, error = {:.3e}",
        error
    );
}

#[test]
fn test_euler_error_strictly_larger_than_rk4() {
    let oscillator = AnalyticOscillator::new(100.0, 1.0, 1.0);
    let dt = 1.0 / 60.0;
    let steps = 120;

    let rk4_error = oscillator.error_after(&Rk4::new(), dt, steps);
    let euler_error = oscillator.error_after(&ExplicitEuler, dt, steps);

    assert!(
        euler_error > rk4_error * 100.0,
        "For equal dt, Euler ({:.3e}) should be far less accurate than RK4 ({:.3e})",
        euler_error,
        rk4_error
    );
}

#[test]
fn test_rk4_error_scales_as_fourth_order() {
    // Halving dt should shrink the global error by roughly 2⁴ = 16.
    // A coarse dt keeps both errors well above float noise.
    let oscillator = AnalyticOscillator::new(100.0, 1.0, 1.0);
    let dt = 1.0 / 30.0;

    let coarse = oscillator.error_after(&Rk4::new(), dt, 30);
    let fine = oscillator.error_after(&Rk4::new(), dt / 2.0, 60);

    let ratio = coarse / fine;
    assert!(
        ratio > 8.0,
        "RK4 error should drop at least 8x when dt halves (O(dt⁴)), got {:.1}x \
         (coarse {:.3e}, fine {:.3e})",
        ratio,
        coarse,
        fine
    );
}

#[test]
fn test_substeps_match_plain_rk4_at_equal_effective_dt() {
    let oscillator = AnalyticOscillator::new(100.0, 1.0, 1.0);

    let subdivided = oscillator.error_after(&Rk4::with_substeps(4), 1.0 / 60.0, 60);
    let plain = oscillator.error_after(&Rk4::new(), 1.0 / 240.0, 240);

    assert!(
        (subdivided - plain).abs() < 1e-12,
        "Four sub-steps per 1/60 s must equal plain RK4 at 1/240 s: {:.3e} vs {:.3e}",
        subdivided,
        plain
    );
}
