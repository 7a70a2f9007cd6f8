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
//! Generic scene driver binding a model to an integrator
//!
//! [`Simulation`] is the ready-made [`Scene`](crate::clock::Scene)
//! implementation: it owns double-buffered previous/current state, replaces
//! the current buffer wholesale each fixed step through its integrator, and
//! exposes the blend of both buffers for rendering. Because `State` is a
//! `Copy` value, the two buffers are always distinct — the renderer never
//! observes aliasing between its interpolation sources.
//!
//! Monitoring is host-injected: an optional `on_step` callback observes
//! every committed state, so nothing inside the core pushes data at a UI
//! sink.

use crate::clock::Scene;
use crate::integration::Integrator;
use crate::models::DynamicalSystem;
use crate::state::State;

/// Host-injected per-step observer: `(state, t)` after each committed step
pub type StepObserver<const N: usize> = Box<dyn FnMut(&State<N>, f64) + Send>;

/// A scene advancing one dynamical system with one integrator
///
/// # Example
///
/// ```
/// use simcore::integration::SemiImplicitEuler;
/// use simcore::models::SpringMassDamper;
/// use simcore::{Scene, Simulation, State};
///
/// let model = SpringMassDamper::undamped(100.0, 1.0);
/// let mut sim = Simulation::new(model, SemiImplicitEuler, State::new([1.0, 0.0]));
/// sim.update(1.0 / 60.0, 0.0);
/// assert_ne!(sim.current(), sim.previous());
/// ```
pub struct Simulation<const N: usize, M, I>
where
    M: DynamicalSystem<N>,
    I: Integrator<N>,
{
    model: M,
    integrator: I,
    initial: State<N>,
    previous: State<N>,
    current: State<N>,
    observer: Option<StepObserver<N>>,
}

impl<const N: usize, M, I> Simulation<N, M, I>
where
    M: DynamicalSystem<N>,
    I: Integrator<N>,
{
    /// Create a simulation at the given initial state
    pub fn new(model: M, integrator: I, initial: State<N>) -> Self {
        Simulation {
            model,
            integrator,
            initial,
            previous: initial,
            current: initial,
            observer: None,
        }
    }

    /// Attach a host-owned observer called with `(state, t)` after every
    /// committed fixed step
    pub fn with_observer(mut self, observer: impl FnMut(&State<N>, f64) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The state after the most recent fixed step
    pub fn current(&self) -> &State<N> {
        &self.current
    }

    /// The state one fixed step behind [`current`](Simulation::current)
    pub fn previous(&self) -> &State<N> {
        &self.previous
    }

    /// The model being advanced
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Replace both state buffers (parameter-widget mutation, scene load)
    ///
    /// Also becomes the state [`reset`](Scene::reset) restores.
    pub fn set_state(&mut self, state: State<N>) {
        self.initial = state;
        self.previous = state;
        self.current = state;
    }

    /// Blend of previous and current state at `alpha ∈ [0, 1)`
    ///
    /// Feed the [`FrameTiming::alpha`](crate::clock::FrameTiming) from the
    /// clock here when rendering.
    pub fn interpolated(&self, alpha: f64) -> State<N> {
        self.previous.lerp(&self.current, alpha)
    }
}

impl<const N: usize, M, I> Scene for Simulation<N, M, I>
where
    M: DynamicalSystem<N>,
    I: Integrator<N>,
{
    fn update(&mut self, dt: f64, t: f64) {
        self.previous = self.current;
        self.current = self.integrator.step(&self.model, &self.current, t, dt);
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.current, t + dt);
        }
    }

    fn reset(&mut self) {
        self.previous = self.initial;
        self.current = self.initial;
    }
}
