//! Claim the template exterior and seal avoid regions before carving

use log::debug;

use crate::algorithm::fill::{FillOptions, fill};
use crate::io::configuration::MazeConfig;
use crate::spatial::grid::Grid;

/// Mark everything the walk must never open as visited
///
/// With a whitespace frame the origin is always exterior space, so filling
/// from it claims the whole connected outside of the shape. Each avoid
/// marker is then turned back into open space and its region immediately
/// claimed, which closes that region without connecting it to anything.
/// Returns the number of cells claimed.
pub fn init_outside(grid: &mut Grid, config: &MazeConfig) -> usize {
    let glyphs = &config.glyphs;
    let options = FillOptions::from_config(config);
    let mut claimed = 0;

    if config.pad > 0 {
        claimed += fill(grid, glyphs, (0, 0), glyphs.unvisited, glyphs.visited, options).len();
    }

    let avoid_points = grid.positions_of(glyphs.avoid);
    debug!("sealing {} avoid marker(s)", avoid_points.len());
    for point in avoid_points {
        fill(grid, glyphs, point, glyphs.avoid, glyphs.unvisited, options);
        claimed += fill(grid, glyphs, point, glyphs.unvisited, glyphs.visited, options).len();
    }

    claimed
}
