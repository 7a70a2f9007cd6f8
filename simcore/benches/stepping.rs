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
//! Benchmarks comparing per-step cost across integrators and models
//!
//! These benchmarks measure:
//! - Single-step cost of each integration scheme on the spring oscillator
//! - The cost ratio of the chaotic double pendulum with RK4 sub-stepping
//! - Full frame cost: clock tick draining several fixed steps of a scene

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use simcore::integration::{ExplicitEuler, Integrator, Rk4, SemiImplicitEuler};
use simcore::models::{DoublePendulum, SpringMassDamper};
use simcore::{Simulation, SimulationClock, State};

const DT: f64 = 1.0 / 60.0;

fn bench_spring_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_step");
    let model = SpringMassDamper::new(100.0, 0.5, 1.0);
    let start = State::new([1.0, 0.0]);

    let rk4 = Rk4::new();
    let rk4_substeps = Rk4::with_substeps(4);
    let integrators: [(&str, &dyn Integrator<2>); 4] = [
        ("euler", &ExplicitEuler),
        ("semi_implicit", &SemiImplicitEuler),
        ("rk4", &rk4),
        ("rk4_substeps_4", &rk4_substeps),
    ];

    for (name, integrator) in integrators {
        group.bench_function(name, |b| {
            let mut state = start;
            let mut t = 0.0;
            b.iter(|| {
                state = integrator.step(black_box(&model), black_box(&state), t, DT);
                t += DT;
                black_box(state)
            });
        });
    }

    group.finish();
}

fn bench_double_pendulum_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("double_pendulum_step");
    let model = DoublePendulum::new(1.0, 1.0, 1.0, 1.0, 9.8);
    let start = State::new([std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2, 0.0, 0.0]);

    for substeps in [1_u32, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("rk4", substeps),
            &substeps,
            |b, &substeps| {
                let integrator = Rk4::with_substeps(substeps);
                let mut state = start;
                let mut t = 0.0;
                b.iter(|| {
                    state = integrator.step(black_box(&model), black_box(&state), t, DT);
                    t += DT;
                    black_box(state)
                });
            },
        );
    }

    group.finish();
}

fn bench_frame_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_tick");

    // A 30 Hz render loop draining two fixed steps per frame.
    group.bench_function("spring_two_steps_per_frame", |b| {
        let mut scene = Simulation::new(
            SpringMassDamper::new(100.0, 0.5, 1.0),
            Rk4::new(),
            State::new([1.0, 0.0]),
        );
        let mut clock = SimulationClock::new(DT);
        clock.start();
        let mut now = 0.0;
        clock.tick(now, &mut scene);

        b.iter(|| {
            now += 1.0 / 30.0;
            black_box(clock.tick(black_box(now), &mut scene))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_spring_step, bench_double_pendulum_step, bench_frame_tick);
criterion_main!(benches);
