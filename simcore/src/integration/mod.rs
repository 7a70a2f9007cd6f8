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
//! Numerical integration methods for advancing simulation state
//!
//! This module provides time-stepping schemes that advance a
//! [`DynamicalSystem`](crate::models::DynamicalSystem) by one fixed step.
//! Each integrator has different accuracy, stability, and performance
//! characteristics.
//!
//! # Integrators
//!
//! - **Explicit Euler**: First-order, cheapest, energy-drifting. Only for
//!   non-conservative demonstrations.
//! - **RK4 (Runge-Kutta 4th order)**: Fourth-order accuracy for smooth
//!   dynamics; supports sub-step subdivision for stiff or chaotic systems.
//! - **Semi-implicit (symplectic) Euler**: First-order but with bounded
//!   long-run energy drift for restoring forces (springs, pendula).
//!
//! # Choosing an Integrator
//!
//! - **Explicit Euler**: Damped or driven systems where energy drift is
//!   masked by dissipation, or as the baseline in accuracy comparisons.
//! - **RK4**: The chaotic double pendulum and anything needing high accuracy
//!   with smooth derivatives. Four derivative evaluations per step.
//! - **Semi-implicit Euler**: Long-running oscillatory motion where a bounded
//!   energy band matters more than per-step accuracy.
//!
//! # Contract
//!
//! Every integrator treats `dt = 0` as the identity and never inspects or
//! masks non-finite values: NaN produced by a model propagates into the next
//! state, which is an expected signal for chaotic or singular configurations,
//! not a defect to suppress.

use crate::models::DynamicalSystem;
use crate::state::State;

mod euler;
mod rk4;
mod symplectic;

pub use euler::ExplicitEuler;
pub use rk4::Rk4;
pub use symplectic::SemiImplicitEuler;

/// Trait for numerical integration methods
///
/// An integrator advances a state vector by one fixed step, given the model's
/// derivative function. Implementations are stateless with respect to the
/// simulation: the same `(state, t, dt)` always produces the same output.
pub trait Integrator<const N: usize>: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Advance `state` from `t` to `t + dt`
    ///
    /// Returns the new state; the input is never mutated. `dt = 0` returns
    /// the input unchanged. Non-finite derivative values flow through into
    /// the result.
    fn step(&self, system: &dyn DynamicalSystem<N>, state: &State<N>, t: f64, dt: f64)
        -> State<N>;

    /// Validate a timestep for stability
    ///
    /// Returns warnings if the timestep might cause numerical issues.
    /// Extremely small timesteps may lead to precision loss, while large
    /// timesteps may cause instability.
    fn validate_timestep(&self, dt: f64) -> Result<(), String> {
        if dt <= 0.0 || !dt.is_finite() {
            return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
        }

        if dt < 1e-9 {
            return Err(format!(
                "Warning: Timestep {} is extremely small and may cause precision loss with f64. \
                Consider using a larger timestep.",
                dt
            ));
        }

        if dt > 1.0 {
            return Err(format!(
                "Warning: Timestep {} is large and may cause instability. \
                Consider using smaller timesteps for better accuracy.",
                dt
            ));
        }

        Ok(())
    }
}
