#![warn(clippy::all)]

mod display;
mod grid;
mod simulation;
mod utils;

pub use display::{Recorder, Screen, TerminalScreen};
pub use grid::{Grid, ALIVE, DEAD};
pub use simulation::{RunSummary, Simulation, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_STEPS};
pub use utils::{Config, Pacer};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("grid of {rows}x{cols} cells does not fit in memory")]
    TooLarge { rows: usize, cols: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected glyph {glyph:?} at row {row}, column {col}")]
    InvalidGlyph { row: usize, col: usize, glyph: char },
}
