//! Iterative flood fill over matching characters
//!
//! The fill never recurses. Each round takes the current frontier, replaces
//! straight runs of matching cells outward from every frontier point, then
//! queues the untouched neighbours of everything replaced in that round.
//! Long straight walls and corridors are consumed in a single round.

use std::collections::HashSet;

use bitvec::prelude::*;
use log::{trace, warn};

use crate::io::configuration::MazeConfig;
use crate::spatial::cell::Glyphs;
use crate::spatial::grid::{Grid, Point};
use crate::spatial::macrocell::{set_macro_char, top_left};

/// North, south, west, east
pub const CARDINAL: [Point; 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Diagonals first, then the cardinal directions
pub const ALL_DIRECTIONS: [Point; 8] = [
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
];

/// Limits and adjacency rules for one fill call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOptions {
    /// Replace at most this many distinct wall positions
    pub length: Option<usize>,
    /// Use 8-way adjacency when the target is a diagonal wall glyph
    pub diagonal: bool,
    /// Frame width when the board is in microspace; wall positions are then
    /// counted per macro cell
    pub macro_pad: Option<i32>,
    /// Replace whole macro glyphs instead of single cells
    pub atomic_macro: bool,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            length: None,
            diagonal: true,
            macro_pad: None,
            atomic_macro: false,
        }
    }
}

impl FillOptions {
    /// Options matching a parser configuration
    pub fn from_config(config: &MazeConfig) -> Self {
        let macro_pad = config.use_microspace.then(|| config.pad_offset());
        Self {
            length: config.length,
            diagonal: config.scan_diagonal,
            macro_pad,
            atomic_macro: config.use_microspace && config.atomic_macro_walls,
        }
    }
}

/// Outcome of trying to replace one cell
enum Hit {
    /// Cell did not hold the target character, or lies past the wall cap
    Miss,
    /// Cell replaced, keep going
    Replaced,
}

/// Book-keeping for a single fill call
struct FillState<'a> {
    glyphs: &'a Glyphs,
    options: FillOptions,
    find: char,
    replace: char,
    touched: Vec<Point>,
    seen: BitVec,
    wall_positions: HashSet<Point>,
}

impl FillState<'_> {
    fn mark_seen(&mut self, grid: &Grid, (x, y): Point) -> bool {
        let Some(index) = grid.index_of(x, y) else {
            return false;
        };
        let fresh = self.seen.get(index).is_some_and(|bit| !*bit);
        if fresh {
            self.seen.set(index, true);
        }
        fresh
    }

    fn hit(&mut self, grid: &mut Grid, (x, y): Point, round: &mut Vec<Point>) -> Hit {
        if grid.get(x, y) != Some(self.find) {
            return Hit::Miss;
        }

        if let Some(cap) = self.options.length
            && self.glyphs.is_wall(self.find)
        {
            let position = self
                .options
                .macro_pad
                .map_or((x, y), |pad| top_left(x, y, pad));
            if self.wall_positions.len() >= cap && !self.wall_positions.contains(&position) {
                return Hit::Miss;
            }
            self.wall_positions.insert(position);
        }

        let changed = match self.options.macro_pad {
            Some(pad) if self.options.atomic_macro && self.glyphs.is_wall(self.find) => {
                set_macro_char(grid, x, y, self.replace, self.glyphs, pad)
            }
            _ => {
                grid.set(x, y, self.replace);
                vec![(x, y)]
            }
        };

        for &point in &changed {
            self.mark_seen(grid, point);
            self.touched.push(point);
            round.push(point);
        }

        Hit::Replaced
    }
}

/// Flood fill from several seeds, replacing `find` with `replace`
///
/// Returns every position written, in the order written. Identical `find`
/// and `replace` characters are reported and leave the board untouched.
pub fn fill_points(
    grid: &mut Grid,
    glyphs: &Glyphs,
    seeds: &[Point],
    find: char,
    replace: char,
    options: FillOptions,
) -> Vec<Point> {
    if find == replace {
        warn!("fill skipped: find and replace are both {find:?}");
        return Vec::new();
    }

    let deltas: &[Point] = if options.diagonal && glyphs.is_diagonal(find) {
        &ALL_DIRECTIONS
    } else {
        &CARDINAL
    };

    let mut state = FillState {
        glyphs,
        options,
        find,
        replace,
        touched: Vec::new(),
        seen: bitvec![0; grid.cell_capacity()],
        wall_positions: HashSet::new(),
    };

    let mut frontier: Vec<Point> = seeds
        .iter()
        .copied()
        .filter(|&p| state.mark_seen(grid, p))
        .collect();

    while !frontier.is_empty() {
        let mut round = Vec::new();

        for &(x, y) in &frontier {
            if matches!(state.hit(grid, (x, y), &mut round), Hit::Miss) {
                continue;
            }

            for &(dx, dy) in deltas {
                let (mut cx, mut cy) = (x + dx, y + dy);
                while matches!(state.hit(grid, (cx, cy), &mut round), Hit::Replaced) {
                    cx += dx;
                    cy += dy;
                }
            }
        }

        let mut next = Vec::new();
        for &(x, y) in &round {
            for &(dx, dy) in deltas {
                let neighbour = (x + dx, y + dy);
                if state.mark_seen(grid, neighbour) {
                    next.push(neighbour);
                }
            }
        }
        frontier = next;
    }

    trace!(
        "fill {find:?} -> {replace:?} touched {} cell(s)",
        state.touched.len()
    );
    state.touched
}

/// Flood fill from a single seed
pub fn fill(
    grid: &mut Grid,
    glyphs: &Glyphs,
    seed: Point,
    find: char,
    replace: char,
    options: FillOptions,
) -> Vec<Point> {
    fill_points(grid, glyphs, &[seed], find, replace, options)
}
