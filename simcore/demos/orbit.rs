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
//! Two-body orbit demo
//!
//! A light satellite around a heavy primary in scaled units (G = 1), with a
//! viewport mapping the orbit onto a text-mode 60x24 render surface. Shows
//! the world/screen transforms and the observer hook tracking perihelion.

use simcore::integration::Rk4;
use simcore::models::{gravity, TwoBodyGravity};
use simcore::{Simulation, SimulationClock, State, Viewport};

const COLS: usize = 60;
const ROWS: usize = 24;

fn main() {
    println!("Simcore - Two-Body Orbit Demo");
    println!("=============================\n");

    // Scaled units: G = 1, primary mass 100, satellite mass 1.
    let model = TwoBodyGravity::new(1.0, 100.0, 1.0);
    let r = 10.0_f64;
    // Slightly below circular speed gives a visible ellipse.
    let v = 0.9 * (100.0_f64 / r).sqrt();
    let start = State::new([0.0, 0.0, r, 0.0, 0.0, 0.0, 0.0, v]);

    let mut min_r = f64::INFINITY;
    let mut max_r = 0.0_f64;
    let mut scene = Simulation::new(model, Rk4::new(), start).with_observer(
        move |state: &State<8>, t: f64| {
            let dx = state[gravity::X2] - state[gravity::X1];
            let dy = state[gravity::Y2] - state[gravity::Y1];
            let sep = (dx * dx + dy * dy).sqrt();
            // Report only meaningful extensions of the apsis bounds.
            if sep < min_r - 0.1 || sep > max_r + 0.1 {
                min_r = min_r.min(sep);
                max_r = max_r.max(sep);
                println!("t = {:>6.2}  separation bounds now [{:.3}, {:.3}]", t, min_r, max_r);
            }
        },
    );

    let mut clock = SimulationClock::new(1.0 / 60.0);
    clock.start();
    clock.tick(0.0, &mut scene);

    // One world unit per character cell keeps the ellipse inside the canvas.
    let viewport = Viewport::new(1.0, (1.5, 0.0), COLS as f64, ROWS as f64);
    let mut canvas = [[b' '; COLS]; ROWS];

    let mut now = 0.0;
    while clock.physics_time() < 30.0 {
        now += 1.0 / 30.0;
        clock.tick(now, &mut scene);

        let state = scene.current();
        plot(&mut canvas, &viewport, state[gravity::X1], state[gravity::Y1], b'@');
        plot(&mut canvas, &viewport, state[gravity::X2], state[gravity::Y2], b'*');
    }

    println!("\nOrbit trace ('@' primary, '*' satellite path):\n");
    for row in &canvas {
        println!("{}", String::from_utf8_lossy(row));
    }

    let energy = scene.model().total_energy(scene.current());
    println!("\nFinal orbital energy: {:.6} (negative: bound orbit)", energy);
}

fn plot(canvas: &mut [[u8; COLS]; ROWS], viewport: &Viewport, x: f64, y: f64, glyph: u8) {
    let (sx, sy) = viewport.world_to_screen(x, y);
    let (col, row) = (sx.round() as isize, sy.round() as isize);
    if (0..COLS as isize).contains(&col) && (0..ROWS as isize).contains(&row) {
        canvas[row as usize][col as usize] = glyph;
    }
}
