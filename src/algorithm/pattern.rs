//! Rectangular multi-row pattern matching and block replacement
//!
//! Patterns are scanned row-major from their top-left corner. A replace call
//! collects every match before writing anything, so replacements made by the
//! same call never hide or create matches for each other.

use log::{trace, warn};

use crate::io::error::{Result, malformed_pattern};
use crate::spatial::grid::{Grid, Point};

/// Rectangular block of expected characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Pattern {
    /// Build a pattern from its rows
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern has no rows, an empty row, or rows of
    /// differing lengths
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        let Some(first) = rows.first() else {
            return Err(malformed_pattern(&"pattern has no rows"));
        };
        let width = first.len();
        if width == 0 {
            return Err(malformed_pattern(&"pattern rows are empty"));
        }
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(malformed_pattern(&format!(
                "row {row} differs in length from the first row ({width} columns)"
            )));
        }
        Ok(Self { rows, width })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at pattern offset `(i, j)`
    pub fn at(&self, i: usize, j: usize) -> Option<char> {
        self.rows.get(j).and_then(|row| row.get(i)).copied()
    }

    /// Whether both patterns cover the same rectangle
    pub fn same_shape(&self, other: &Self) -> bool {
        self.width == other.width && self.height() == other.height()
    }
}

/// Whether `pattern` matches the board with its top-left at `(x, y)`
pub fn has_pattern_at(grid: &Grid, pattern: &Pattern, x: i32, y: i32) -> bool {
    for j in 0..pattern.height() {
        for i in 0..pattern.width() {
            if grid.get(x + i as i32, y + j as i32) != pattern.at(i, j) {
                return false;
            }
        }
    }
    true
}

/// Top-left positions of every match, scanning row-major from `start`
///
/// The first row is scanned from `start.0`, later rows from column zero.
pub fn find_pattern(grid: &Grid, pattern: &Pattern, start: Point) -> Vec<Point> {
    let mut points = Vec::new();
    let (x0, y0) = start;
    for y in y0.max(0)..grid.height() as i32 {
        let row_start = if y == y0 { x0.max(0) } else { 0 };
        for x in row_start..grid.row_len(y) as i32 {
            if has_pattern_at(grid, pattern, x, y) {
                points.push((x, y));
            }
        }
    }
    points
}

/// Every position holding `find`
pub fn find_char(grid: &Grid, find: char) -> Vec<Point> {
    grid.positions_of(find)
}

/// Read a `w` by `h` block with its top-left at `(x, y)`
///
/// Off-board cells are omitted, so rows past a ragged edge come back short.
pub fn block_at(grid: &Grid, x: i32, y: i32, w: usize, h: usize) -> Vec<String> {
    (y..y + h as i32)
        .map(|j| (x..x + w as i32).filter_map(|i| grid.get(i, j)).collect())
        .collect()
}

/// Write `pattern` with its top-left at `(x, y)`; off-board cells are skipped
pub fn set_block(grid: &mut Grid, x: i32, y: i32, pattern: &Pattern) {
    for j in 0..pattern.height() {
        for i in 0..pattern.width() {
            if let Some(c) = pattern.at(i, j) {
                grid.set(x + i as i32, y + j as i32, c);
            }
        }
    }
}

/// Replace every match of `find` with `replacement`
///
/// All matches are located first, then every block is written. Returns the
/// number of blocks written. Identical patterns are reported and skipped;
/// a replacement with a different shape is reported and written as given.
pub fn replace(grid: &mut Grid, find: &Pattern, replacement: &Pattern) -> usize {
    if find == replacement {
        warn!("replace skipped: find and replace patterns are identical");
        return 0;
    }
    if !find.same_shape(replacement) {
        warn!(
            "replace pattern is {}x{} but find pattern is {}x{}",
            replacement.width(),
            replacement.height(),
            find.width(),
            find.height()
        );
    }

    let points = find_pattern(grid, find, (0, 0));
    for &(x, y) in &points {
        set_block(grid, x, y, replacement);
    }
    trace!("replaced {} block(s)", points.len());
    points.len()
}
