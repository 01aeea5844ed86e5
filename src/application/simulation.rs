use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use super::{ClockState, Config, SimulationClock};
use crate::domain::{Algorithm, CellIndex, Grid, Surface};

/// Simulation is the explicit context of a run: the current generation,
/// the clock pacing it and the counters shown to the user.
///
/// Input handlers and the loop both go through `&mut Simulation`, so a
/// mutation always completes before the next generation is computed.
pub struct Simulation {
    grid: Grid,
    clock: SimulationClock,
    algorithm: Algorithm,
    generation: u64,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Dead grid sized for a `width` x `height` surface, clock running
    pub fn new(width: u32, height: u32, config: &Config, now: Instant) -> Self {
        let grid = Grid::create(width, height, config.cell_size);
        let (columns, rows) = grid.dimensions();
        info!(width, height, columns, rows, cell_size = config.cell_size, "created grid");

        Self {
            grid,
            clock: SimulationClock::new(config.fps, config.update_frequency, now),
            algorithm: config.algorithm,
            generation: 0,
            last_step_time_ms: 0.0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> ClockState {
        self.clock.state()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Generations computed since the grid was last seeded
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// One loop iteration: maybe advance a generation, then report how
    /// long the host should wait before calling again.
    pub fn tick<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) -> Duration {
        let beat = self.clock.poll(now);
        if beat.advance {
            self.advance(surface);
        }
        beat.wait
    }

    /// Advance one generation and repaint, whatever the clock state
    pub fn force_step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.advance(surface);
    }

    /// Paint every cell with its current state
    pub fn paint_all<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.grid
            .iter()
            .for_each(|cell| surface.paint_cell(cell, cell.paint()));
    }

    /// Toggle the cell under a surface pixel and repaint just that cell
    pub fn pointer_click<S: Surface + ?Sized>(
        &mut self,
        pixel_x: f32,
        pixel_y: f32,
        surface: &mut S,
    ) -> Option<CellIndex> {
        let index = self.grid.hit_test(pixel_x, pixel_y)?;
        let cell = self.grid.toggle(index.column, index.row)?;
        surface.paint_cell(cell, cell.paint());
        debug!(column = index.column, row = index.row, alive = cell.alive, "toggled cell");
        Some(index)
    }

    pub fn start(&mut self, now: Instant) {
        if self.clock.is_paused() {
            info!(generation = self.generation, "simulation resumed");
        }
        self.clock.resume(now);
    }

    pub fn stop(&mut self) {
        if !self.clock.is_paused() {
            info!(generation = self.generation, "simulation paused");
        }
        self.clock.pause();
    }

    /// Reseed the grid at random. While paused the result is stepped
    /// and painted right away; while running the next generation shows it.
    pub fn randomize_requested<R, S>(&mut self, rng: &mut R, surface: &mut S)
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        self.grid.randomize(rng);
        self.generation = 0;
        info!(alive = self.grid.alive_count(), "randomized grid");
        if self.clock.is_paused() {
            self.force_step(surface);
        }
    }

    /// Kill every cell, stepping and painting right away while paused
    pub fn clear_requested<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.grid.clear();
        self.generation = 0;
        info!("cleared grid");
        if self.clock.is_paused() {
            self.force_step(surface);
        }
    }

    fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let start = Instant::now();
        self.grid = self.algorithm.step(&self.grid);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;

        self.paint_all(surface);
        debug!(
            generation = self.generation,
            alive = self.grid.alive_count(),
            step_ms = self.last_step_time_ms,
            "advanced generation"
        );
    }
}
