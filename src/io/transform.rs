//! Template text to board and back
//!
//! The forward transform normalizes line endings, optionally expands every
//! character into its 3x3 macro cell, and wraps the result in a frame of
//! open space so a fill from the origin always starts outside the shape.
//! The inverse samples each macro cell's identity, drops the frame, turns
//! path markers back into plain space and applies cosmetic substitutions.

use log::debug;

use crate::io::configuration::{MACRO_SIZE, MazeConfig};
use crate::spatial::grid::Grid;
use crate::spatial::macrocell::{expand_line, identity_value};

/// Logical extent of the template inside the framed board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Template rows
    pub rows: usize,
    /// Template columns (longest line)
    pub cols: usize,
    /// Frame width around the board
    pub pad: usize,
    /// Whether each template character occupies a 3x3 block
    pub microspace: bool,
}

impl Layout {
    /// Board cells per template character along each axis
    pub const fn scale(&self) -> usize {
        if self.microspace { MACRO_SIZE } else { 1 }
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split text into lines; a single trailing line break does not start a row
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = normalize_line_endings(text);
    let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
    body.split('\n').map(str::to_string).collect()
}

/// Expand and frame a template into board rows
pub fn forward(template: &str, config: &MazeConfig) -> (Vec<String>, Layout) {
    let lines = split_lines(template);
    let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let layout = Layout {
        rows: lines.len(),
        cols,
        pad: config.pad,
        microspace: config.use_microspace,
    };

    let body: Vec<String> = if config.use_microspace {
        lines.iter().flat_map(|line| expand_line(line)).collect()
    } else {
        lines
    };

    let fill = config.glyphs.unvisited;
    let inner = cols * layout.scale();
    let outer = inner + 2 * config.pad;
    let blank: String = std::iter::repeat_n(fill, outer).collect();
    let side: String = std::iter::repeat_n(fill, config.pad).collect();

    let mut board = Vec::with_capacity(body.len() + 2 * config.pad);
    board.extend(std::iter::repeat_n(blank.clone(), config.pad));
    for line in &body {
        let trailing = outer - config.pad - line.chars().count();
        let mut row = String::with_capacity(outer);
        row.push_str(&side);
        row.push_str(line);
        row.extend(std::iter::repeat_n(fill, trailing));
        board.push(row);
    }
    board.extend(std::iter::repeat_n(blank, config.pad));

    debug!(
        "transformed {}x{} template into {}x{} board",
        layout.cols,
        layout.rows,
        outer,
        board.len()
    );
    (board, layout)
}

/// Render the board back into template space
pub fn inverse(grid: &Grid, config: &MazeConfig, layout: &Layout) -> String {
    let glyphs = &config.glyphs;
    let pad = layout.pad as i32;
    let scale = layout.scale() as i32;

    let mut out = String::with_capacity((layout.cols + 1) * layout.rows);
    for row in 0..layout.rows as i32 {
        let y = pad + row * scale;
        for col in 0..layout.cols as i32 {
            let x = pad + col * scale;
            let c = if layout.microspace {
                identity_value(grid, x, y, glyphs, pad)
            } else {
                grid.get(x, y)
            };
            match c {
                Some(c) if !glyphs.is_path(c) => out.push(c),
                _ => out.push(glyphs.space),
            }
        }
        out.push('\n');
    }

    if config.dot_last_underscore {
        out = dot_last_underscore(&out);
    }
    out
}

/// Decorate the open end of underscore runs with a dot
pub fn dot_last_underscore(text: &str) -> String {
    text.replace("_ ", "_.").replace(" _", "._")
}

/// The board verbatim, frame and markers included
pub fn render_raw(grid: &Grid) -> String {
    let mut out = String::new();
    for line in grid.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
