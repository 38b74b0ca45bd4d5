//! Parser constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::cell::Glyphs;

// Glyph roles
/// Characters treated as wall
pub const DEFAULT_WALLS: [char; 7] = ['/', '\\', '_', '|', '-', '+', '#'];
/// Wall characters running diagonally
pub const DEFAULT_DIAGONAL_WALLS: [char; 2] = ['/', '\\'];
/// Wall characters running vertically
pub const DEFAULT_VERTICAL_WALLS: [char; 3] = ['/', '\\', '|'];
/// Wall joints the walk may not pass through
pub const DEFAULT_CORNERS: [char; 1] = ['+'];
/// Plain space emitted by the renderer
pub const DEFAULT_SPACE: char = ' ';
/// Open path not yet claimed
pub const DEFAULT_UNVISITED: char = ' ';
/// Claimed path; also usable in templates as an uncrossable line
pub const DEFAULT_VISITED: char = '`';
/// Marks interior whitespace that must never be opened
pub const DEFAULT_AVOID: char = '~';

/// Maximum number of wall cells crossed in one probe
pub const DEFAULT_THICKNESS: usize = 1;

/// Whitespace frame added around templates
pub const DEFAULT_PAD: usize = 1;

/// Edge length of a macro cell in microspace
pub const MACRO_SIZE: usize = 3;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_maze";
/// Extension of template files picked up from a directory
pub const TEMPLATE_EXTENSION: &str = "txt";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// What a broken vertical wall becomes when it touches an underscore
///
/// Templates such as `|_` or `\_` imply a horizontal wall continuing
/// through the vertical glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalBreak {
    /// Always open to the unvisited character
    #[default]
    Open,
    /// Keep the implied floor by writing `_` instead
    KeepUnderscore,
}

/// Parser parameters controlling how templates are read and carved
// Mirrors the independent toggles exposed on the command line
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Role character sets
    pub glyphs: Glyphs,
    /// Maximum stacked wall cells crossed per probe (macro cells in microspace)
    pub thickness: usize,
    /// Maximum distinct wall positions removed by one fill
    pub length: Option<usize>,
    /// Use 8-way adjacency when filling diagonal wall glyphs
    pub scan_diagonal: bool,
    /// Expand every character into a 3x3 macro cell
    pub use_microspace: bool,
    /// Width of the whitespace frame
    ///
    /// With a pad of zero there is no guaranteed exterior cell to fill from,
    /// so nothing outside the shape is claimed before carving and open
    /// template exterior is treated as a room. Use zero only for templates
    /// fully enclosed by walls, or to inspect the unframed board.
    pub pad: usize,
    /// Resume the walk from cells that used to be wall
    pub scan_wall_space: bool,
    /// Re-close claimed cells sitting on a corner as `_` after carving
    pub close_implied_wall: bool,
    /// Replacement policy for vertical walls next to underscores
    pub vertical_break: VerticalBreak,
    /// Remove microspace walls one whole macro glyph at a time
    pub atomic_macro_walls: bool,
    /// Decorate segment ends: `_ ` to `_.` and ` _` to `._`
    pub dot_last_underscore: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            thickness: DEFAULT_THICKNESS,
            length: None,
            scan_diagonal: true,
            use_microspace: false,
            pad: DEFAULT_PAD,
            scan_wall_space: true,
            close_implied_wall: true,
            vertical_break: VerticalBreak::Open,
            atomic_macro_walls: false,
            dot_last_underscore: false,
        }
    }
}

impl MazeConfig {
    /// Check parameters before a parse starts
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `thickness` or `length` is zero
    /// - the visited marker equals the unvisited character
    /// - the avoid marker collides with either path character
    /// - a corner glyph is not also a wall glyph
    pub fn validate(&self) -> Result<()> {
        if self.thickness == 0 {
            return Err(invalid_parameter(
                "thickness",
                &self.thickness,
                &"walls must be at least one cell thick",
            ));
        }

        if self.length == Some(0) {
            return Err(invalid_parameter(
                "length",
                &0,
                &"a wall segment cap must allow at least one cell",
            ));
        }

        let glyphs = &self.glyphs;
        if glyphs.visited == glyphs.unvisited {
            return Err(invalid_parameter(
                "visited",
                &glyphs.visited,
                &"visited marker must differ from the unvisited character",
            ));
        }

        if glyphs.avoid == glyphs.visited || glyphs.avoid == glyphs.unvisited {
            return Err(invalid_parameter(
                "avoid",
                &glyphs.avoid,
                &"avoid marker must differ from both path characters",
            ));
        }

        if let Some(corner) = glyphs.corners.iter().find(|c| !glyphs.walls.contains(c)) {
            return Err(invalid_parameter(
                "corners",
                corner,
                &"every corner glyph must also be a wall glyph",
            ));
        }

        Ok(())
    }

    /// Pad expressed as a signed board offset
    pub fn pad_offset(&self) -> i32 {
        i32::try_from(self.pad).unwrap_or(i32::MAX)
    }
}
