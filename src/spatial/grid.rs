//! Character board with bounds-tolerant access
//!
//! Cells are addressed as `(x, y)` with the origin at the top-left. Rows may
//! have different lengths: storage is a rectangular `Array2<char>` padded to
//! the longest row, and each row remembers its real length so probes past a
//! ragged end read as empty instead of as padding.

use ndarray::Array2;

use crate::io::error::{MazeError, Result};

/// Board coordinate `(x, y)`; signed so probes may step off the board
pub type Point = (i32, i32);

/// Filler for storage beyond a row's real end; never readable
const UNUSED: char = '\0';

/// Mutable character board owned by a single parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<char>,
    row_lengths: Vec<usize>,
}

impl Grid {
    /// Build a board from text rows
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let rows: Vec<Vec<char>> = lines.iter().map(|l| l.as_ref().chars().collect()).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let row_lengths = rows.iter().map(Vec::len).collect();

        let mut cells = Array2::from_elem((rows.len(), width), UNUSED);
        for (y, row) in rows.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if let Some(cell) = cells.get_mut([y, x]) {
                    *cell = c;
                }
            }
        }

        Self { cells, row_lengths }
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.row_lengths.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Length of row `y`, zero when the row does not exist
    pub fn row_len(&self, y: i32) -> usize {
        usize::try_from(y)
            .ok()
            .and_then(|row| self.row_lengths.get(row))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `(x, y)` addresses a real cell
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.row_len(y)
    }

    /// Character at `(x, y)`, `None` off the board
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells.get([y as usize, x as usize]).copied()
    }

    /// Overwrite `(x, y)`; returns `false` and changes nothing off the board
    pub fn set(&mut self, x: i32, y: i32, value: char) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.cells
            .get_mut([y as usize, x as usize])
            .map(|cell| *cell = value)
            .is_some()
    }

    /// Overwrite `(x, y)`, reporting an off-board write as an error
    ///
    /// # Errors
    ///
    /// Returns `MazeError::OutOfBounds` when `(x, y)` is not a real cell
    pub fn set_checked(&mut self, x: i32, y: i32, value: char) -> Result<()> {
        if self.set(x, y, value) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds { x, y })
        }
    }

    /// Every position holding `find`, row-major
    pub fn positions_of(&self, find: char) -> Vec<Point> {
        let mut points = Vec::new();
        for y in 0..self.height() {
            for x in 0..self.row_len(y as i32) {
                if self.cells.get([y, x]) == Some(&find) {
                    points.push((x as i32, y as i32));
                }
            }
        }
        points
    }

    /// Iterate over the rows as strings
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height()).map(|y| {
            (0..self.row_len(y as i32))
                .filter_map(|x| self.cells.get([y, x]).copied())
                .collect()
        })
    }

    /// Flat index for `(x, y)` used by per-cell bitsets
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width() + x as usize)
    }

    /// Size of the flat index space
    pub fn cell_capacity(&self) -> usize {
        self.height() * self.width()
    }
}
