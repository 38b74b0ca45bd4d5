//! Turn ASCII line art into a maze
//!
//! Every enclosed room of a template is connected to the others by knocking
//! down just enough wall to form a spanning tree, so the drawing keeps its
//! shape while becoming a maze with exactly one route between any two rooms.

#![forbid(unsafe_code)]

/// Region fill, carving walk and the parse/carve/render pipeline
pub mod algorithm;
/// Configuration, errors, template transform and the command-line front end
pub mod io;
/// Character board, cell roles and the microspace codec
pub mod spatial;

pub use algorithm::executor::{Maze, mazeify};
pub use algorithm::walk::CarveReport;
pub use io::configuration::MazeConfig;
pub use io::error::{MazeError, Result};
