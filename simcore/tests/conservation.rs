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
//! Integration tests verifying conservation properties

use simcore::integration::{ExplicitEuler, Integrator, Rk4, SemiImplicitEuler};
use simcore::models::{resolve_collision, Body, SpringMassDamper, TwoBodyGravity};
use simcore::State;

#[test]
fn test_symplectic_keeps_spring_energy_in_bounded_band() {
    let model = SpringMassDamper::undamped(100.0, 1.0);
    let mut state = State::new([1.0, 0.0]);
    let initial = model.mechanical_energy(&state);

    let dt = 1.0 / 60.0;
    let mut t = 0.0;
    let mut max_deviation: f64 = 0.0;
    for _ in 0..1000 {
        state = SemiImplicitEuler.step(&model, &state, t, dt);
        t += dt;
        let deviation = (model.mechanical_energy(&state) - initial).abs() / initial;
        max_deviation = max_deviation.max(deviation);
    }

    assert!(
        max_deviation < 0.2,
        "Symplectic Euler energy should stay in a bounded band, worst drift = {:.1}%",
        max_deviation * 100.0
    );
}

#[test]
fn test_explicit_euler_spring_energy_grows_monotonically() {
    let model = SpringMassDamper::undamped(100.0, 1.0);
    let mut state = State::new([1.0, 0.0]);
    let mut energy = model.mechanical_energy(&state);

    let dt = 1.0 / 60.0;
    let mut t = 0.0;
    for step in 0..1000 {
        state = ExplicitEuler.step(&model, &state, t, dt);
        t += dt;
        let next = model.mechanical_energy(&state);
        assert!(
            next >= energy,
            "Explicit Euler energy decreased at step {}: {} -> {}",
            step,
            energy,
            next
        );
        energy = next;
    }

    assert!(
        energy > model.mechanical_energy(&State::new([1.0, 0.0])) * 2.0,
        "Explicit Euler should visibly pump energy into the spring over 1000 steps"
    );
}

#[test]
fn test_elastic_collision_conserves_momentum_and_kinetic_energy() {
    // Oblique impact between unequal masses.
    let mut a = Body::new(0.0, 0.0, 2.0, 1.0, 3.0, 0.6);
    let mut b = Body::new(1.0, 0.1, -1.5, 0.5, 1.0, 0.6);

    let momentum_before = (
        a.momentum().0 + b.momentum().0,
        a.momentum().1 + b.momentum().1,
    );
    let ke_before = a.kinetic_energy() + b.kinetic_energy();

    assert!(resolve_collision(&mut a, &mut b, 1.0));

    let momentum_after = (
        a.momentum().0 + b.momentum().0,
        a.momentum().1 + b.momentum().1,
    );
    let ke_after = a.kinetic_energy() + b.kinetic_energy();

    assert!((momentum_after.0 - momentum_before.0).abs() < 1e-12);
    assert!((momentum_after.1 - momentum_before.1).abs() < 1e-12);
    assert!(
        (ke_after - ke_before).abs() < 1e-9 * ke_before,
        "Elastic collision should conserve kinetic energy: {} -> {}",
        ke_before,
        ke_after
    );
}

#[test]
fn test_inelastic_collision_conserves_momentum_but_loses_kinetic_energy() {
    let mut a = Body::new(0.0, 0.0, 2.0, 1.0, 3.0, 0.6);
    let mut b = Body::new(1.0, 0.1, -1.5, 0.5, 1.0, 0.6);

    let momentum_before = (
        a.momentum().0 + b.momentum().0,
        a.momentum().1 + b.momentum().1,
    );
    let ke_before = a.kinetic_energy() + b.kinetic_energy();

    assert!(resolve_collision(&mut a, &mut b, 0.0));

    let momentum_after = (
        a.momentum().0 + b.momentum().0,
        a.momentum().1 + b.momentum().1,
    );
    let ke_after = a.kinetic_energy() + b.kinetic_energy();

    assert!((momentum_after.0 - momentum_before.0).abs() < 1e-12);
    assert!((momentum_after.1 - momentum_before.1).abs() < 1e-12);
    assert!(
        ke_after < ke_before,
        "Perfectly inelastic collision must dissipate kinetic energy"
    );
}

#[test]
fn test_two_body_orbit_conserves_momentum_and_energy() {
    let model = TwoBodyGravity::new(1.0, 100.0, 1.0);
    // Satellite on a roughly circular orbit around a heavy primary.
    let r: f64 = 10.0;
    let v = (100.0 / r).sqrt();
    let mut state = State::new([0.0, 0.0, r, 0.0, 0.0, 0.0, 0.0, v]);

    let momentum_before = model.total_momentum(&state);
    let energy_before = model.total_energy(&state);

    let integrator = Rk4::new();
    let dt = 1.0 / 60.0;
    let mut t = 0.0;
    for _ in 0..1200 {
        state = integrator.step(&model, &state, t, dt);
        t += dt;
    }

    let momentum_after = model.total_momentum(&state);
    assert!((momentum_after.0 - momentum_before.0).abs() < 1e-9);
    assert!((momentum_after.1 - momentum_before.1).abs() < 1e-9);

    let energy_after = model.total_energy(&state);
    assert!(
        (energy_after - energy_before).abs() < 1e-3 * energy_before.abs(),
        "RK4 should hold orbital energy over 20 s: {} -> {}",
        energy_before,
        energy_after
    );
}
