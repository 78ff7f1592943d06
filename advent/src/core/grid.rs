//! Rectangular byte grid parsed from line-oriented text.

use std::str::FromStr;

use crate::error::PuzzleError;

/// Row-major grid of single-byte cells. Bounds are fixed at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

/// Stand-in byte for any non-ASCII character. It carries no meaning to any
/// puzzle, so such cells read as open floor.
pub const NON_ASCII: u8 = b'?';

impl Grid {
    /// Parse one row per non-blank line, trimming surrounding whitespace.
    ///
    /// Each character is one cell; non-ASCII characters become [`NON_ASCII`].
    /// An input with no rows yields an empty grid. Rows of differing width are
    /// rejected.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let mut grid = Grid::default();
        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let start = grid.cells.len();
            grid.cells.extend(
                line.chars()
                    .map(|ch| if ch.is_ascii() { ch as u8 } else { NON_ASCII }),
            );
            let width = grid.cells.len() - start;
            if grid.rows == 0 {
                grid.cols = width;
            } else if width != grid.cols {
                return Err(PuzzleError::Configuration(format!(
                    "ragged grid: line {} has width {width}, expected {}",
                    index + 1,
                    grid.cols
                )));
            }
            grid.rows += 1;
        }
        Ok(grid)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: isize, col: isize) -> Option<u8> {
        self.index(row, col).map(|index| self.cells[index])
    }

    /// Overwrite one in-bounds cell, returning its previous content.
    pub fn replace(&mut self, row: isize, col: isize, value: u8) -> Option<u8> {
        let index = self.index(row, col)?;
        Some(std::mem::replace(&mut self.cells[index], value))
    }

    /// Iterate `(row, col, byte)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (isize, isize, u8)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &byte)| ((index / cols) as isize, (index % cols) as isize, byte))
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

impl FromStr for Grid {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}
