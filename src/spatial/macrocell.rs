//! Microspace codec: one template character as a 3x3 block of board cells
//!
//! Expanding each glyph into a fixed shape lets walls occupy only part of a
//! character cell. An underscore, for instance, is floor-level wall at the
//! bottom of its cell and open space above it. The shape masks are a fixed
//! table; unlisted characters become a solid block of themselves.
//!
//! Macro cells are aligned to the whitespace frame, so every position
//! computation takes the frame width `pad` into account.

use crate::io::configuration::MACRO_SIZE;
use crate::spatial::cell::Glyphs;
use crate::spatial::grid::{Grid, Point};

/// 3x3 shape of a glyph; spaces are transparent
pub type Mask = [[char; MACRO_SIZE]; MACRO_SIZE];

/// Macro cell edge as a board offset
const STEP: i32 = MACRO_SIZE as i32;

/// Shape mask for a glyph
pub const fn mask(c: char) -> Mask {
    match c {
        '/' => [[' ', ' ', '/'], [' ', '/', ' '], ['/', ' ', ' ']],
        '\\' => [['\\', ' ', ' '], [' ', '\\', ' '], [' ', ' ', '\\']],
        '|' => [[' ', '|', ' '], [' ', '|', ' '], [' ', '|', ' ']],
        '_' => [[' ', ' ', ' '], [' ', '_', ' '], ['_', '_', '_']],
        '-' => [[' ', ' ', ' '], ['-', '-', '-'], [' ', ' ', ' ']],
        _ => [[c; MACRO_SIZE]; MACRO_SIZE],
    }
}

/// Whether the mask has a visible cell at offset `(dx, dy)`
pub fn mask_covers(mask: &Mask, dx: i32, dy: i32) -> bool {
    let (Ok(col), Ok(row)) = (usize::try_from(dx), usize::try_from(dy)) else {
        return false;
    };
    mask.get(row)
        .and_then(|r| r.get(col))
        .is_some_and(|&c| c != ' ')
}

/// Expand one template line into the three board lines it occupies
pub fn expand_line(line: &str) -> [String; MACRO_SIZE] {
    let mut rows: [String; MACRO_SIZE] = Default::default();
    for c in line.chars() {
        let shape = mask(c);
        for (row, mask_row) in rows.iter_mut().zip(shape.iter()) {
            row.extend(mask_row.iter());
        }
    }
    rows
}

/// Origin of the macro cell containing `(x, y)`
pub const fn top_left(x: i32, y: i32, pad: i32) -> Point {
    (
        pad + (x - pad).div_euclid(STEP) * STEP,
        pad + (y - pad).div_euclid(STEP) * STEP,
    )
}

/// Position holding the identity of the macro cell containing `(x, y)`
///
/// The center by default. Underscores carry their weight at the bottom, so
/// a `_` at the bottom-center wins.
pub fn identity_position(grid: &Grid, x: i32, y: i32, pad: i32) -> Point {
    let (x0, y0) = top_left(x, y, pad);
    let bottom = (x0 + 1, y0 + 2);
    if grid.get(bottom.0, bottom.1) == Some('_') {
        return bottom;
    }
    (x0 + 1, y0 + 1)
}

/// Logical character of the macro cell containing `(x, y)`
///
/// Path markers, claimed or not, read as plain space.
pub fn identity_value(grid: &Grid, x: i32, y: i32, glyphs: &Glyphs, pad: i32) -> Option<char> {
    if !grid.in_bounds(x, y) {
        return None;
    }
    let (ix, iy) = identity_position(grid, x, y, pad);
    let c = grid.get(ix, iy)?;
    if glyphs.is_path(c) {
        Some(glyphs.space)
    } else {
        Some(c)
    }
}

/// Rewrite the macro glyph at `(x, y)` as `value`
///
/// Whitespace cells are written directly. A hit on a visible cell of a
/// glyph rewrites every visible cell of that glyph's mask, so the glyph
/// changes as one unit. Returns every position written.
pub fn set_macro_char(
    grid: &mut Grid,
    x: i32,
    y: i32,
    value: char,
    glyphs: &Glyphs,
    pad: i32,
) -> Vec<Point> {
    let mut changed = Vec::new();
    let Some(current) = grid.get(x, y) else {
        return changed;
    };
    if current == value {
        return changed;
    }

    if glyphs.is_path(current) {
        if grid.set(x, y, value) {
            changed.push((x, y));
        }
        return changed;
    }

    let (x0, y0) = top_left(x, y, pad);
    let (ix, iy) = identity_position(grid, x, y, pad);
    let Some(old_id) = grid.get(ix, iy) else {
        return changed;
    };
    if old_id == value {
        return changed;
    }

    let old_mask = mask(old_id);
    if !mask_covers(&old_mask, x - x0, y - y0) {
        return changed;
    }

    for (dy, mask_row) in old_mask.iter().enumerate() {
        for (dx, &shape) in mask_row.iter().enumerate() {
            if shape == ' ' {
                continue;
            }
            let (px, py) = (x0 + dx as i32, y0 + dy as i32);
            if grid.set(px, py, value) {
                changed.push((px, py));
            }
        }
    }

    changed
}
