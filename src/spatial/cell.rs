//! Cell roles derived from configured glyph sets
//!
//! A board stores plain characters. The role of a character (open path,
//! claimed path, wall, corner, avoid marker) is never stored separately; it
//! is derived on every read from membership in the configured sets.

use crate::io::configuration::{
    DEFAULT_AVOID, DEFAULT_CORNERS, DEFAULT_DIAGONAL_WALLS, DEFAULT_SPACE, DEFAULT_UNVISITED,
    DEFAULT_VERTICAL_WALLS, DEFAULT_VISITED, DEFAULT_WALLS,
};

/// Role of a single board character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Open path cell not yet claimed by the walk
    Unvisited,
    /// Path cell already claimed by the walk (or protected by the template)
    Visited,
    /// Wall glyph the walk may knock down
    Wall(char),
    /// Wall joint the walk may never pass through
    Corner(char),
    /// Interior marker for regions that must stay closed
    Avoid,
    /// Anything else (labels, decorations)
    Other(char),
}

impl Role {
    /// Whether the role is a wall of any kind, corners included
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall(_) | Self::Corner(_))
    }
}

/// Character sets that decide which role a glyph plays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    /// Every glyph that counts as wall
    pub walls: Vec<char>,
    /// Walls that run diagonally; fills over these may use 8-way adjacency
    pub diagonal_walls: Vec<char>,
    /// Walls that run vertically (diagonals included)
    pub vertical_walls: Vec<char>,
    /// Subset of walls that block the walk outright
    pub corners: Vec<char>,
    /// Plain space written back at render time
    pub space: char,
    /// Open, unclaimed path
    pub unvisited: char,
    /// Claimed path
    pub visited: char,
    /// Avoid marker
    pub avoid: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            walls: DEFAULT_WALLS.to_vec(),
            diagonal_walls: DEFAULT_DIAGONAL_WALLS.to_vec(),
            vertical_walls: DEFAULT_VERTICAL_WALLS.to_vec(),
            corners: DEFAULT_CORNERS.to_vec(),
            space: DEFAULT_SPACE,
            unvisited: DEFAULT_UNVISITED,
            visited: DEFAULT_VISITED,
            avoid: DEFAULT_AVOID,
        }
    }
}

impl Glyphs {
    /// Classify a character
    ///
    /// Corners are checked before walls since they are a subset of them.
    pub fn role(&self, c: char) -> Role {
        if c == self.unvisited {
            Role::Unvisited
        } else if c == self.visited {
            Role::Visited
        } else if c == self.avoid {
            Role::Avoid
        } else if self.corners.contains(&c) {
            Role::Corner(c)
        } else if self.walls.contains(&c) {
            Role::Wall(c)
        } else {
            Role::Other(c)
        }
    }

    /// Whether a character belongs to the wall set
    pub fn is_wall(&self, c: char) -> bool {
        self.walls.contains(&c)
    }

    /// Whether a character is a diagonal wall glyph
    pub fn is_diagonal(&self, c: char) -> bool {
        self.diagonal_walls.contains(&c)
    }

    /// Whether a character is a vertical wall glyph
    pub fn is_vertical(&self, c: char) -> bool {
        self.vertical_walls.contains(&c)
    }

    /// Whether a character is path whitespace, claimed or not
    pub const fn is_path(&self, c: char) -> bool {
        c == self.unvisited || c == self.visited
    }
}
