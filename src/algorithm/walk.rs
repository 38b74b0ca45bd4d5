//! Randomized carving walk that turns rooms into a maze
//!
//! From a claimed cell the walk looks in each direction, through its own
//! room and then through at most `thickness` wall cells. Landing on an
//! unclaimed room knocks the crossed wall segment down, claims the whole
//! room, and continues the walk from every newly claimed cell.
//!
//! The walk is depth-first but never recurses: every active cell is a frame
//! on an explicit stack holding its remaining directions and the cells
//! still waiting to be walked from.

use bitvec::prelude::*;
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::algorithm::fill::{CARDINAL, FillOptions, fill};
use crate::io::configuration::{MACRO_SIZE, MazeConfig, VerticalBreak};
use crate::spatial::cell::Role;
use crate::spatial::grid::{Grid, Point};
use crate::spatial::macrocell::{identity_value, top_left};

/// Totals collected over one carve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarveReport {
    /// Top-level walks started
    pub walks: usize,
    /// Wall segments knocked down
    pub walls_opened: usize,
    /// Rooms claimed, including each walk's starting room
    pub rooms_claimed: usize,
    /// Distinct cells the walk continued from
    pub cells_processed: usize,
}

/// A successful probe: the wall cells crossed and the unclaimed cell reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opening {
    /// Wall cells between the origin room and the landing cell
    pub walls: Vec<Point>,
    /// First open cell past the wall
    pub landing: Point,
}

/// Look from `origin` along `delta` for an unclaimed room behind a wall
///
/// The scan crosses the origin's own open space, then counts wall cells.
/// It gives up off the board, on a corner, on a second kind of wall glyph,
/// or once the wall is thicker than allowed. In microspace thickness is
/// counted in macro cells.
pub fn probe(grid: &Grid, config: &MazeConfig, origin: Point, delta: Point) -> Option<Opening> {
    let glyphs = &config.glyphs;
    let macro_pad = config.use_microspace.then(|| config.pad_offset());

    let (mut x, mut y) = origin;
    let mut walls = Vec::new();
    let mut wall_glyph = None;
    let mut last_block = None;
    let mut thickness = 0;

    loop {
        x += delta.0;
        y += delta.1;
        let c = grid.get(x, y)?;

        match glyphs.role(c) {
            Role::Corner(_) => return None,
            Role::Wall(w) => {
                if wall_glyph.is_some_and(|prev| prev != w) {
                    return None;
                }
                let block = macro_pad.map_or((x, y), |pad| top_left(x, y, pad));
                if last_block != Some(block) {
                    thickness += 1;
                    last_block = Some(block);
                }
                if thickness > config.thickness {
                    return None;
                }
                wall_glyph = Some(w);
                walls.push((x, y));
            }
            Role::Unvisited if wall_glyph.is_some() => {
                return Some(Opening {
                    walls,
                    landing: (x, y),
                });
            }
            _ if wall_glyph.is_some() => return None,
            _ => {}
        }
    }
}

/// Shuffle the four directions, then correct for bias
///
/// The least-taken direction moves to the front and the most-taken to the
/// back, which keeps the walk from running long straight corridors. Ties go
/// to whichever the shuffle placed first. Returns indices into `CARDINAL`.
pub fn biased_directions<R: Rng + ?Sized>(bias: &[usize; 4], rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..CARDINAL.len()).collect();
    order.shuffle(rng);

    if bias.iter().all(|&count| count == 0) {
        return order;
    }

    let count = |d: usize| bias.get(d).copied().unwrap_or(0);

    let rare_pos = order
        .iter()
        .enumerate()
        .min_by_key(|&(i, &d)| (count(d), i))
        .map(|(i, _)| i);
    if let Some(pos) = rare_pos {
        let rare = order.remove(pos);
        order.insert(0, rare);
    }

    let least = order.first().map_or(0, |&d| count(d));
    let most = order.iter().map(|&d| count(d)).max().unwrap_or(0);
    if most > least
        && let Some(pos) = order.iter().position(|&d| count(d) == most)
    {
        let common = order.remove(pos);
        order.push(common);
    }

    order
}

/// One active cell of the depth-first walk
struct Frame {
    point: Point,
    directions: Vec<usize>,
    next: usize,
    pending: Vec<Point>,
}

/// Per-carve walk state
///
/// Holds the board, the processed set shared by every walk of this carve,
/// and the direction bias of the walk in progress.
pub struct Carver<'a, R: Rng + ?Sized> {
    grid: &'a mut Grid,
    config: &'a MazeConfig,
    rng: &'a mut R,
    options: FillOptions,
    processed: BitVec,
    bias: [usize; 4],
    report: CarveReport,
}

impl<'a, R: Rng + ?Sized> Carver<'a, R> {
    /// Prepare a carve over `grid`
    pub fn new(grid: &'a mut Grid, config: &'a MazeConfig, rng: &'a mut R) -> Self {
        let processed = bitvec![0; grid.cell_capacity()];
        Self {
            grid,
            config,
            rng,
            options: FillOptions::from_config(config),
            processed,
            bias: [0; 4],
            report: CarveReport::default(),
        }
    }

    /// Walk every unclaimed region of the board
    ///
    /// A first pass starts from a random point in the upper-left three
    /// quarters of the board; a second full scan picks up any region the
    /// first pass could not reach.
    pub fn run(mut self) -> CarveReport {
        let unvisited = self.config.glyphs.unvisited;
        let last_row = self.grid.height() as i32 - 1;

        if last_row >= 0 {
            let last_col = self.grid.row_len(last_row / 2) as i32 - 1;
            let y_start = self.rng.random_range(0..=3 * last_row / 4);
            let x_start = self.rng.random_range(0..=(3 * last_col / 4).max(0));
            for y in y_start..last_row {
                for x in x_start..last_col {
                    if self.grid.get(x, y) == Some(unvisited) {
                        self.walk_from((x, y));
                    }
                }
            }
        }

        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.row_len(y) as i32 {
                if self.grid.get(x, y) == Some(unvisited) {
                    self.walk_from((x, y));
                }
            }
        }

        debug!("carve finished: {:?}", self.report);
        self.report
    }

    /// Run one complete walk starting at `seed`
    ///
    /// The seed's room is claimed first, then walked from every one of its
    /// cells.
    pub fn walk_from(&mut self, seed: Point) {
        if !self.mark_processed(seed) {
            return;
        }
        self.bias = [0; 4];
        self.report.walks += 1;

        let config = self.config;
        let glyphs = &config.glyphs;
        let mut room = fill(
            self.grid,
            glyphs,
            seed,
            glyphs.unvisited,
            glyphs.visited,
            self.options,
        );
        if !room.is_empty() {
            self.report.rooms_claimed += 1;
        }
        room.retain(|&p| p != seed);
        room.shuffle(self.rng);
        trace!("walk from {seed:?}, start room of {} cell(s)", room.len() + 1);

        let directions = biased_directions(&self.bias, self.rng);
        let mut stack = vec![Frame {
            point: seed,
            directions,
            next: 0,
            pending: room,
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.pending.pop() {
                if self.mark_processed(child) {
                    stack.push(Frame {
                        point: child,
                        directions: biased_directions(&self.bias, self.rng),
                        next: 0,
                        pending: Vec::new(),
                    });
                }
                continue;
            }

            if let Some(&direction) = frame.directions.get(frame.next) {
                frame.next += 1;
                let origin = frame.point;
                if let Some(claimed) = self.open(origin, direction) {
                    frame.pending = claimed;
                }
                continue;
            }

            stack.pop();
        }
    }

    /// Try to open a wall from `origin`; returns the newly claimed cells
    fn open(&mut self, origin: Point, direction: usize) -> Option<Vec<Point>> {
        let delta = CARDINAL.get(direction).copied()?;
        let opening = probe(self.grid, self.config, origin, delta)?;

        if let Some(count) = self.bias.get_mut(direction) {
            *count += 1;
        }
        self.report.walls_opened += 1;
        trace!("opening {} wall cell(s) from {origin:?}", opening.walls.len());

        let config = self.config;
        let glyphs = &config.glyphs;
        let mut wall_space = Vec::new();
        for &(x, y) in &opening.walls {
            let Some(c) = self.grid.get(x, y) else {
                continue;
            };
            if !glyphs.is_wall(c) {
                continue;
            }
            let replacement = self.broken_wall_char(x, y, c);
            wall_space.extend(fill(self.grid, glyphs, (x, y), c, replacement, self.options));
        }

        let mut claimed = fill(
            self.grid,
            glyphs,
            opening.landing,
            glyphs.unvisited,
            glyphs.visited,
            self.options,
        );
        if !claimed.is_empty() {
            self.report.rooms_claimed += 1;
        }

        claimed.retain(|p| *p != origin);
        if !config.scan_wall_space {
            claimed.retain(|p| !wall_space.contains(p));
        }
        claimed.shuffle(self.rng);
        Some(claimed)
    }

    /// Character a knocked-down wall cell turns into
    fn broken_wall_char(&self, x: i32, y: i32, wall: char) -> char {
        let glyphs = &self.config.glyphs;
        if self.config.vertical_break == VerticalBreak::Open || !glyphs.is_vertical(wall) {
            return glyphs.unvisited;
        }

        let (left, right) = if self.config.use_microspace {
            let pad = self.config.pad_offset();
            let step = MACRO_SIZE as i32;
            (
                identity_value(self.grid, x - step, y, glyphs, pad),
                identity_value(self.grid, x + step, y, glyphs, pad),
            )
        } else {
            (self.grid.get(x - 1, y), self.grid.get(x + 1, y))
        };

        if left == Some('_') || right == Some('_') {
            '_'
        } else {
            glyphs.unvisited
        }
    }

    /// Record a cell as walked from; `false` if it already was
    fn mark_processed(&mut self, (x, y): Point) -> bool {
        let Some(index) = self.grid.index_of(x, y) else {
            return false;
        };
        let fresh = self.processed.get(index).is_some_and(|bit| !*bit);
        if fresh {
            self.processed.set(index, true);
            self.report.cells_processed += 1;
        }
        fresh
    }
}
