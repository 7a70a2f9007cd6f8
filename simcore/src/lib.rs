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
//! # Simcore
//!
//! The simulation core of an interactive physics demonstration platform:
//! a fixed-timestep clock decoupled from the host's variable-rate render
//! callbacks, pluggable integration schemes over fixed-shape numeric state,
//! per-phenomenon differential-equation models, and an affine viewport
//! mapping physical coordinates onto a render surface.
//!
//! ## Components
//!
//! - **[`clock`]**: the accumulator-pattern [`SimulationClock`] driving a
//!   [`Scene`] a whole number of fixed steps per rendered frame
//! - **[`integration`]**: explicit Euler, RK4 (with sub-stepping), and
//!   semi-implicit (symplectic) Euler
//! - **[`models`]**: damped and double pendula, spring-mass-damper,
//!   two-body gravitation, drag projectile, two-body collision
//! - **[`simulation`]**: [`Simulation`], the double-buffered scene driver
//! - **[`viewport`]**: [`Viewport`], world/screen transforms independent of
//!   window size
//!
//! ## Example
//!
//! ```rust
//! use simcore::integration::SemiImplicitEuler;
//! use simcore::models::SpringMassDamper;
//! use simcore::{Simulation, SimulationClock, State};
//!
//! let spring = SpringMassDamper::new(100.0, 0.5, 1.0);
//! let mut scene = Simulation::new(spring, SemiImplicitEuler, State::new([1.0, 0.0]));
//! let mut clock = SimulationClock::new(1.0 / 60.0);
//!
//! clock.start();
//! clock.tick(0.0, &mut scene);
//! let timing = clock.tick(0.1, &mut scene);
//! let for_rendering = scene.interpolated(timing.alpha);
//! assert!(for_rendering.is_valid());
//! ```
//!
//! Everything is single-threaded and synchronous: the only suspension point
//! is the implicit yield between host callbacks, and ceasing to tick is the
//! whole cancellation story.

#![warn(missing_docs)]

/// Fixed-timestep simulation clock and the scene contract
pub mod clock;

/// Numerical integration methods
pub mod integration;

/// Differential-equation models for the simulated phenomena
pub mod models;

/// Generic double-buffered scene driver
pub mod simulation;

/// Fixed-shape numeric state vectors
pub mod state;

/// World/screen coordinate transforms
pub mod viewport;

pub use clock::{FrameTiming, Scene, SimulationClock, MAX_FRAME_DELTA};
pub use simulation::Simulation;
pub use state::State;
pub use viewport::Viewport;
