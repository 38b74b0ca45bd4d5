use std::path::Path;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    algorithm::outside::init_outside,
    algorithm::rules::{PRE_PROCESS_RULES, apply_rules, compile, post_process_rules},
    algorithm::walk::{CarveReport, Carver},
    io::configuration::MazeConfig,
    io::error::{Result, file_error},
    io::transform::{Layout, forward, inverse, render_raw},
    spatial::grid::Grid,
};

/// A parsed template and the board it is carved on
///
/// Parsing only builds the board. Nothing is opened until [`Maze::carve`]
/// runs, so a parsed maze can be inspected or edited first.
#[derive(Debug, Clone)]
pub struct Maze {
    /// Working board, framed and expanded
    grid: Grid,
    /// Settings fixed at parse time
    config: MazeConfig,
    /// Template extent inside the board
    layout: Layout,
}

impl Maze {
    /// Build the board for `template`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn parse(template: &str, config: MazeConfig) -> Result<Self> {
        config.validate()?;
        let (lines, layout) = forward(template, &config);
        let grid = Grid::from_lines(&lines);
        debug!(
            "parsed template into {}x{} board",
            grid.width(),
            grid.height()
        );
        Ok(Self {
            grid,
            config,
            layout,
        })
    }

    /// Read a template file and parse it
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read as UTF-8 text
    /// - The configuration fails validation
    pub fn from_file(path: impl AsRef<Path>, config: MazeConfig) -> Result<Self> {
        let path = path.as_ref();
        let template = std::fs::read_to_string(path).map_err(|e| file_error(path, "read", e))?;
        Self::parse(&template, config)
    }

    /// Carve the maze
    ///
    /// In microspace the joint-tightening rules run first and the implied
    /// wall rule runs last. In between the exterior and avoid regions are
    /// claimed and every remaining room is walked.
    pub fn carve<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CarveReport {
        if self.config.use_microspace {
            let rules = compile(PRE_PROCESS_RULES);
            apply_rules(&mut self.grid, &rules);
        }

        let outside = init_outside(&mut self.grid, &self.config);
        debug!("claimed {outside} exterior cell(s)");

        let report = Carver::new(&mut self.grid, &self.config, rng).run();

        if self.config.use_microspace {
            let rules = post_process_rules(&self.config);
            apply_rules(&mut self.grid, &rules);
        }
        report
    }

    /// The board in template space: frame removed, markers cleared
    pub fn render(&self) -> String {
        inverse(&self.grid, &self.config, &self.layout)
    }

    /// The board exactly as carved, frame and markers included
    pub fn render_raw(&self) -> String {
        render_raw(&self.grid)
    }

    /// Access the working board
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the working board
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Settings this maze was parsed with
    pub const fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Template extent inside the board
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }
}

/// Parse, carve and render a template in one call
///
/// A seed makes the result reproducible; without one the generator is
/// seeded from the operating system.
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn mazeify(template: &str, config: MazeConfig, seed: Option<u64>) -> Result<String> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut maze = Maze::parse(template, config)?;
    maze.carve(&mut rng);
    Ok(maze.render())
}
