//! Spatial data structures for the character board
//!
//! This module contains spatial-related functionality including:
//! - The character grid and its bounds-tolerant accessors
//! - Role classification of board characters
//! - The 3x3 microspace codec

/// Role classification of board characters
pub mod cell;
/// Character board with ragged-row support
pub mod grid;
/// Microspace expansion and macro glyph updates
pub mod macrocell;

pub use cell::{Glyphs, Role};
pub use grid::{Grid, Point};
