use std::io;

use tracing::{debug, info};

use crate::{Error, Grid, Screen};

pub const DEFAULT_ROWS: usize = 15;
pub const DEFAULT_COLS: usize = 15;
pub const DEFAULT_STEPS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: usize, // Generations rendered so far.
    pub population: usize,  // Alive cells after the last generation.
}

/// Drives a `Grid` for a fixed number of generations.
pub struct Simulation {
    grid: Grid,
    steps: usize,
    generation: usize,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::with_grid(Grid::default(), DEFAULT_STEPS)
    }
}

impl Simulation {
    pub fn new(rows: usize, cols: usize, steps: usize) -> Result<Self, Error> {
        Ok(Self::with_grid(Grid::new(rows, cols)?, steps))
    }

    pub fn seeded(rows: usize, cols: usize, steps: usize, seed: u64) -> Result<Self, Error> {
        Ok(Self::with_grid(Grid::random(rows, cols, Some(seed))?, steps))
    }

    pub fn with_grid(grid: Grid, steps: usize) -> Self {
        Self {
            grid,
            steps,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of generations already computed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.generation >= self.steps
    }

    /// Run all remaining generations, passing each rendered one to `screen`.
    pub fn run<S: Screen + ?Sized>(&mut self, screen: &mut S) -> io::Result<RunSummary> {
        self.run_until(screen, || false)
    }

    /// Like `run`, but `stop` is polled before every generation and ends the
    /// run early once it returns `true`. A generation is never interrupted
    /// halfway.
    pub fn run_until<S, F>(&mut self, screen: &mut S, stop: F) -> io::Result<RunSummary>
    where
        S: Screen + ?Sized,
        F: Fn() -> bool,
    {
        info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            steps = self.steps,
            "starting simulation"
        );
        while !self.is_finished() {
            if stop() {
                info!(generation = self.generation, "simulation interrupted");
                break;
            }
            self.grid.update();
            self.generation += 1;
            debug!(
                generation = self.generation,
                population = self.grid.population(),
                "generation computed"
            );
            screen.display(&self.grid.render())?;
        }
        let summary = self.summary();
        info!(
            generations = summary.generations,
            population = summary.population,
            "simulation finished"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            generations: self.generation,
            population: self.grid.population(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::Recorder;

    const SEED: u64 = 42;

    #[test]
    fn test_default_dimensions() {
        let sim = Simulation::default();
        assert_eq!(sim.grid().rows(), DEFAULT_ROWS);
        assert_eq!(sim.grid().cols(), DEFAULT_COLS);
        assert_eq!(sim.steps(), DEFAULT_STEPS);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_invalid_dimensions_are_reported() {
        assert!(matches!(
            Simulation::new(0, 3, 1),
            Err(Error::InvalidDimensions { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn test_oversized_dimensions_are_reported() {
        assert!(matches!(
            Simulation::new(usize::MAX, 2, 1),
            Err(Error::TooLarge { .. })
        ));
    }

    #[test]
    fn test_frames_follow_updates() {
        let mut sim = Simulation::seeded(8, 8, 5, SEED).unwrap();
        let mut expected = sim.grid().clone();
        let mut recorder = Recorder::default();

        let summary = sim.run(&mut recorder).unwrap();

        assert_eq!(recorder.frames().len(), 5);
        for frame in recorder.frames() {
            expected.update();
            assert_eq!(frame, &expected.render());
        }
        assert_eq!(summary.generations, 5);
        assert_eq!(summary.population, expected.population());
        assert!(sim.is_finished());
    }

    #[test]
    fn test_zero_steps_displays_nothing() {
        let mut sim = Simulation::seeded(4, 4, 0, SEED).unwrap();
        let before = sim.grid().clone();
        let mut recorder = Recorder::default();
        sim.run(&mut recorder).unwrap();
        assert!(recorder.frames().is_empty());
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_finished_run_is_not_restarted() {
        let mut sim = Simulation::seeded(6, 6, 3, SEED).unwrap();
        let mut recorder = Recorder::default();
        let first = sim.run(&mut recorder).unwrap();
        let second = sim.run(&mut recorder).unwrap();
        assert_eq!(first, second);
        assert_eq!(recorder.frames().len(), 3);
    }

    #[test]
    fn test_stop_between_generations() {
        let mut sim = Simulation::seeded(6, 6, 10, SEED).unwrap();
        let mut recorder = Recorder::default();
        let polls = Cell::new(0);
        let summary = sim
            .run_until(&mut recorder, || {
                polls.set(polls.get() + 1);
                polls.get() > 4
            })
            .unwrap();
        assert_eq!(summary.generations, 4);
        assert_eq!(recorder.frames().len(), 4);
        assert!(!sim.is_finished());
    }

    #[test]
    fn test_single_cell_simulation_ends_dead() {
        let grid = Grid::from_rows(&["*"]).unwrap();
        let mut sim = Simulation::with_grid(grid, 4);
        let mut recorder = Recorder::default();
        let summary = sim.run(&mut recorder).unwrap();
        assert_eq!(summary.population, 0);
        assert!(recorder.frames().iter().all(|f| f == " "));
    }
}
