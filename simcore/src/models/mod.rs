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
//! Differential-equation models for the simulated phenomena
//!
//! Each model is a small value type closing over its physical parameters and
//! implementing [`DynamicalSystem`] against a fixed state shape. Models never
//! hand-integrate: advancing state is always the integrator's job.
//!
//! Parameters are validated at construction (programmer errors panic, in the
//! same spirit as negative mass); the derivative functions themselves are
//! pure, deterministic, and never guard against non-finite output except
//! where a true singularity would otherwise divide by exactly zero
//! (two-body gravitation at `r = 0`).
//!
//! State field names are `usize` index constants exported per module, e.g.
//! [`pendulum::THETA`] or [`gravity::X1`].

use crate::state::State;

pub mod collision;
pub mod double_pendulum;
pub mod gravity;
pub mod pendulum;
pub mod projectile;
pub mod spring;

pub use collision::{resolve_collision, Body};
pub use double_pendulum::DoublePendulum;
pub use gravity::TwoBodyGravity;
pub use pendulum::DampedPendulum;
pub use projectile::{DragProjectile, GroundContact};
pub use spring::SpringMassDamper;

/// A first-order system of ordinary differential equations
///
/// `derivatives` maps a state to its rates: the same shape, each field the
/// time derivative of the corresponding input field. Implementations must be
/// deterministic and side-effect-free; an integrator calls this once (Euler,
/// semi-implicit) or four times (RK4) per step.
pub trait DynamicalSystem<const N: usize>: Send + Sync {
    /// Compute the time derivative of every state field at time `t`
    fn derivatives(&self, state: &State<N>, t: f64) -> State<N>;
}

impl<F, const N: usize> DynamicalSystem<N> for F
where
    F: Fn(&State<N>, f64) -> State<N> + Send + Sync,
{
    fn derivatives(&self, state: &State<N>, t: f64) -> State<N> {
        self(state, t)
    }
}

/// A scalar second-order system expressed through its acceleration
///
/// The specialization consumed by
/// [`SemiImplicitEuler::step_scalar`](crate::integration::SemiImplicitEuler::step_scalar)
/// for single-degree-of-freedom hosts.
pub trait AccelerationFunction: Send + Sync {
    /// Acceleration at the given position and velocity at time `t`
    fn acceleration(&self, position: f64, velocity: f64, t: f64) -> f64;
}

impl<F> AccelerationFunction for F
where
    F: Fn(f64, f64, f64) -> f64 + Send + Sync,
{
    fn acceleration(&self, position: f64, velocity: f64, t: f64) -> f64 {
        self(position, velocity, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_systems() {
        let decay = |state: &State<1>, _t: f64| State::new([-state[0]]);
        let system: &dyn DynamicalSystem<1> = &decay;
        let rates = system.derivatives(&State::new([2.0]), 0.0);
        assert_eq!(rates[0], -2.0);
    }

    #[test]
    fn test_closures_are_acceleration_functions() {
        let gravity = |_x: f64, _v: f64, _t: f64| -9.81;
        let model: &dyn AccelerationFunction = &gravity;
        assert_eq!(model.acceleration(0.0, 0.0, 0.0), -9.81);
    }
}
