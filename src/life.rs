//! Conway's Game of Life demo
//!
//! The application logic driving the demo: a cell grid the size of the
//! surface, stepped on a fixed interval while running, edited with the
//! mouse while paused. All state lives in this struct; the main loop owns
//! exactly one.

use crate::display::{Pixel, Surface};
use crate::util::Rng;

/// Seconds between generations while the simulation runs.
const STEP_INTERVAL: f32 = 0.1;

pub struct Life {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    scratch: Vec<bool>,
    timer: f32,
    running: bool,
    generation: u64,
}

impl Life {
    /// Create a cleared grid, paused.
    pub fn new(width: usize, height: usize) -> Self {
        let count = width * height;
        Self {
            width,
            height,
            cells: vec![false; count],
            scratch: vec![false; count],
            timer: 0.0,
            running: false,
            generation: 0,
        }
    }

    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Flip one cell (mouse editing).
    pub fn toggle(&mut self, x: usize, y: usize) {
        debug_assert!(x < self.width && y < self.height);
        let idx = y * self.width + x;
        self.cells[idx] = !self.cells[idx];
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Randomize the grid; `fill` is the probability a cell starts alive.
    pub fn randomize(&mut self, rng: &mut Rng, fill: f32) {
        for cell in &mut self.cells {
            *cell = rng.next_f32() < fill;
        }
        self.generation = 0;
    }

    /// Live neighbors of (x, y). Borders clamp; the world does not wrap.
    fn alive_neighbours(&self, x: usize, y: usize) -> usize {
        let min_x = x.saturating_sub(1);
        let max_x = (x + 1).min(self.width - 1);
        let min_y = y.saturating_sub(1);
        let max_y = (y + 1).min(self.height - 1);

        let mut alive = 0;
        for cy in min_y..=max_y {
            for cx in min_x..=max_x {
                if self.cells[cy * self.width + cx] {
                    alive += 1;
                }
            }
        }
        if self.cell(x, y) {
            alive -= 1;
        }
        alive
    }

    /// Advance one generation: birth on 3 neighbors, survival on 2 or 3.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.alive_neighbours(x, y);
                self.scratch[y * self.width + x] = alive == 3 || (alive == 2 && self.cell(x, y));
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }

    /// Accumulate frame time and step on the fixed interval while running.
    pub fn update(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        self.timer += dt;
        while self.timer >= STEP_INTERVAL {
            self.timer -= STEP_INTERVAL;
            self.step();
        }
    }

    /// Plot every live cell onto the surface.
    pub fn render(&self, screen: &mut Surface, color: Pixel) {
        debug_assert!(self.width <= screen.width() as usize);
        debug_assert!(self.height <= screen.height() as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x] {
                    screen.plot(x as i32, y as i32, color);
                }
            }
        }
    }
}
