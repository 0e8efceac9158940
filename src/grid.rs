use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Error, DEFAULT_COLS, DEFAULT_ROWS};

pub const ALIVE: char = '*';
pub const DEAD: char = ' ';

/// Relative positions of the Moore neighborhood.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cell {
    alive: bool,
    /// Scratch value, only meaningful during `Grid::update`.
    neighbors: u8,
}

impl Cell {
    fn glyph(self) -> char {
        if self.alive {
            ALIVE
        } else {
            DEAD
        }
    }

    fn next_state(self) -> bool {
        match (self.alive, self.neighbors) {
            (true, 2 | 3) => true,
            (true, _) => false,
            (false, 3) => true,
            (false, _) => false,
        }
    }
}

/// Bounded field of cells; positions outside `[0, rows) x [0, cols)` are
/// treated as dead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a field with every cell dead.
    pub fn blank(rows: usize, cols: usize) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        let size = rows
            .checked_mul(cols)
            .ok_or(Error::TooLarge { rows, cols })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| Error::TooLarge { rows, cols })?;
        cells.resize(size, Cell::default());
        Ok(Self { cells, rows, cols })
    }

    /// Create a field where each cell is alive with probability 1/2.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        Self::random(rows, cols, None)
    }

    /// Create a field with random cells
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self, Error> {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::from_rng(rows, cols, &mut rng)
    }

    pub fn from_rng<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, Error> {
        let mut result = Self::blank(rows, cols)?;
        result.randomize(rng);
        Ok(result)
    }

    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            cell.alive = rng.gen_bool(0.5);
        }
    }

    /// Parse a pattern where `'*'` is alive and `' '` or `'.'` is dead.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self, Error> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.as_ref().chars().count());
        let mut result = Self::blank(rows, cols)?;
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(Error::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let alive = match glyph {
                    ALIVE => true,
                    DEAD | '.' => false,
                    _ => return Err(Error::InvalidGlyph { row, col, glyph }),
                };
                result.set(row, col, alive);
            }
        }
        Ok(result)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) is outside of {}x{}",
            self.rows,
            self.cols
        );
        col + row * self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)].alive
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.index(row, col);
        self.cells[i].alive = alive;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Number of alive cells among the neighbors of `(row, col)`
    /// that lie inside the field.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        NEIGHBORHOOD
            .iter()
            .filter_map(|&(dy, dx)| {
                let y = row.checked_add_signed(dy)?;
                let x = col.checked_add_signed(dx)?;
                (y < self.rows && x < self.cols).then(|| self.get(y, x))
            })
            .filter(|&alive| alive)
            .count()
    }

    /// Advance the field by one generation.
    pub fn update(&mut self) {
        // counts have to be taken from the previous generation only
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neighbors = self.count_live_neighbors(row, col) as u8;
                let i = self.index(row, col);
                self.cells[i].neighbors = neighbors;
            }
        }
        for cell in self.cells.iter_mut() {
            cell.alive = cell.next_state();
        }
    }

    pub fn render(&self) -> String {
        self.cells
            .chunks_exact(self.cols)
            .map(|row| row.iter().map(|c| c.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Random `DEFAULT_ROWS x DEFAULT_COLS` field.
impl Default for Grid {
    fn default() -> Self {
        let mut result = Self {
            cells: vec![Cell::default(); DEFAULT_ROWS * DEFAULT_COLS],
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        };
        result.randomize(&mut ChaCha8Rng::from_entropy());
        result
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(&s.lines().collect::<Vec<_>>())
    }
}
