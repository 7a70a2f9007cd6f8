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
//! Fixed-timestep simulation clock
//!
//! [`SimulationClock`] decouples the host's variable-rate render callbacks
//! from a fixed-rate physics update using the accumulator pattern: each tick
//! banks the elapsed wall time, drains it in whole fixed-size steps (each
//! invoking the scene's update), and hands the leftover fraction back to the
//! renderer as the interpolation alpha.
//!
//! Simulated time (`physics_time`) advances only in exact multiples of the
//! fixed timestep, so a given wall duration always produces the same step
//! sequence regardless of how it is sliced across callbacks. Per-tick wall
//! deltas are clamped to [`MAX_FRAME_DELTA`] so a backgrounded or suspended
//! host cannot trigger runaway catch-up.
//!
//! Everything runs synchronously on the host's callback thread; a scene
//! update is infallible pure numeric code, and a panic inside one halts time
//! advance and propagates to the host.

/// Largest wall-clock delta accepted in a single tick, in seconds
///
/// Spikes beyond this (a backgrounded tab, a debugger pause) are clamped
/// rather than drained, preventing the catch-up spiral where each slow frame
/// schedules even more physics work for the next.
pub const MAX_FRAME_DELTA: f64 = 0.25;

/// The scene contract driven by the clock
///
/// A scene advances its own state in `update` and restores its initial state
/// in `reset`. Updates must be pure synchronous numeric code: no blocking,
/// no awaiting, no fallibility. Rendering is the host's business and happens
/// outside this trait, using the alpha from [`SimulationClock::tick`].
pub trait Scene {
    /// Advance the scene by one fixed step starting at simulated time `t`
    fn update(&mut self, dt: f64, t: f64);

    /// Restore the scene's initial state (scene load, explicit reset)
    fn reset(&mut self);
}

/// What a single tick did, for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Number of fixed steps drained during this tick
    pub steps: u32,
    /// Leftover-time fraction in `[0, 1)`, the blend weight between the
    /// scene's previous and current states
    pub alpha: f64,
}

/// Fixed-timestep accumulator clock
///
/// # Example
///
/// ```
/// use simcore::{Scene, SimulationClock};
///
/// struct Counter(u32);
/// impl Scene for Counter {
///     fn update(&mut self, _dt: f64, _t: f64) { self.0 += 1; }
///     fn reset(&mut self) { self.0 = 0; }
/// }
///
/// let mut clock = SimulationClock::new(1.0 / 64.0);
/// let mut scene = Counter(0);
/// clock.start();
/// clock.tick(0.0, &mut scene); // anchors the wall clock
/// let timing = clock.tick(0.125, &mut scene);
/// assert_eq!(timing.steps, 8);
/// assert!(timing.alpha < 1.0);
/// ```
#[derive(Debug)]
pub struct SimulationClock {
    fixed_timestep: f64,
    accumulated: f64,
    physics_time: f64,
    last_tick: Option<f64>,
    running: bool,
    paused_duration: f64,
}

impl SimulationClock {
    /// Create a clock with the given fixed timestep in seconds
    ///
    /// The clock starts paused; call [`start`](SimulationClock::start).
    ///
    /// # Panics
    ///
    /// Panics if `fixed_timestep` is non-positive, NaN, or infinite.
    pub fn new(fixed_timestep: f64) -> Self {
        assert!(
            fixed_timestep > 0.0 && fixed_timestep.is_finite(),
            "Timestep must be positive and finite"
        );
        SimulationClock {
            fixed_timestep,
            accumulated: 0.0,
            physics_time: 0.0,
            last_tick: None,
            running: false,
            paused_duration: 0.0,
        }
    }

    /// Get the fixed timestep in seconds
    pub fn fixed_timestep(&self) -> f64 {
        self.fixed_timestep
    }

    /// Monotonic simulated time in seconds
    ///
    /// Always an exact multiple of the fixed timestep; resets to zero on
    /// [`reset_time`](SimulationClock::reset_time).
    pub fn physics_time(&self) -> f64 {
        self.physics_time
    }

    /// Current interpolation alpha in `[0, 1)`
    ///
    /// The same value the most recent [`tick`](SimulationClock::tick)
    /// returned; unconsumed residual over the fixed timestep.
    pub fn alpha(&self) -> f64 {
        self.accumulated / self.fixed_timestep
    }

    /// Whether the clock is advancing
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total wall time observed while paused, in seconds
    ///
    /// Only counts pauses the host kept ticking through.
    pub fn paused_duration(&self) -> f64 {
        self.paused_duration
    }

    /// Begin (or resume) advancing simulated time
    ///
    /// The wall-clock anchor is dropped, so the first tick after starting
    /// contributes no elapsed time: an arbitrary wall delay between `pause`
    /// and `start` never leaks into `physics_time`.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.last_tick = None;
        }
    }

    /// Stop advancing simulated time
    ///
    /// Ticks while paused keep `physics_time` and the accumulator frozen.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Reset simulated time to zero and restore the scene's initial state
    pub fn reset_time<S: Scene>(&mut self, scene: &mut S) {
        self.physics_time = 0.0;
        self.accumulated = 0.0;
        self.last_tick = None;
        scene.reset();
    }

    /// Advance the clock to wall time `now` (seconds), draining whole fixed
    /// steps into `scene`
    ///
    /// The elapsed wall time since the previous tick is clamped to
    /// `[0, MAX_FRAME_DELTA]` and banked; the accumulator is then drained in
    /// whole fixed steps, each calling `scene.update(fixed_timestep,
    /// physics_time)`. The returned [`FrameTiming`] carries the residual
    /// fraction for render interpolation.
    ///
    /// While paused, ticks only re-anchor the wall clock (and tally
    /// [`paused_duration`](SimulationClock::paused_duration)); no time is
    /// banked.
    pub fn tick<S: Scene>(&mut self, now: f64, scene: &mut S) -> FrameTiming {
        if !self.running {
            if let Some(last) = self.last_tick {
                self.paused_duration += (now - last).max(0.0);
            }
            self.last_tick = Some(now);
            return FrameTiming { steps: 0, alpha: self.alpha() };
        }

        let dt = match self.last_tick {
            Some(last) => (now - last).clamp(0.0, MAX_FRAME_DELTA),
            None => 0.0,
        };
        self.last_tick = Some(now);
        self.accumulated += dt;

        let mut steps = 0;
        while self.accumulated >= self.fixed_timestep {
            scene.update(self.fixed_timestep, self.physics_time);
            self.physics_time += self.fixed_timestep;
            self.accumulated -= self.fixed_timestep;
            steps += 1;
        }

        FrameTiming { steps, alpha: self.alpha() }
    }
}
