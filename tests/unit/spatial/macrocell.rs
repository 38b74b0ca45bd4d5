//! Tests for the microspace codec

#[cfg(test)]
mod tests {
    use asciimaze::spatial::cell::Glyphs;
    use asciimaze::spatial::grid::Grid;
    use asciimaze::spatial::macrocell::{
        expand_line, identity_position, identity_value, mask, mask_covers, set_macro_char,
        top_left,
    };

    fn expanded(line: &str) -> Grid {
        Grid::from_lines(&expand_line(line))
    }

    // Tests the underscore shape: floor wall with an open space above
    // Verified by swapping the first and last mask rows
    #[test]
    fn test_underscore_mask() {
        assert_eq!(
            mask('_'),
            [[' ', ' ', ' '], [' ', '_', ' '], ['_', '_', '_']]
        );
    }

    // Tests that unlisted glyphs become solid blocks
    // Verified by returning a blank mask for unknown characters
    #[test]
    fn test_unlisted_glyph_is_solid() {
        assert_eq!(mask('#'), [['#'; 3]; 3]);
        assert_eq!(mask('~'), [['~'; 3]; 3]);
    }

    // Tests mask visibility lookups including out-of-range offsets
    // Verified by treating negative offsets as zero
    #[test]
    fn test_mask_covers() {
        let pipe = mask('|');

        assert!(mask_covers(&pipe, 1, 0));
        assert!(!mask_covers(&pipe, 0, 0));
        assert!(!mask_covers(&pipe, -1, 1));
        assert!(!mask_covers(&pipe, 3, 1));
    }

    // Tests expansion of a line into three board rows
    // Verified by transposing the mask during expansion
    #[test]
    fn test_expand_line() {
        let rows = expand_line("_|");

        assert_eq!(rows, [
            "    | ".to_string(),
            " _  | ".to_string(),
            "___ | ".to_string()
        ]);
    }

    // Tests macro origins relative to the frame, including the frame itself
    // Verified by using truncating division instead of euclidean
    #[test]
    fn test_top_left() {
        assert_eq!(top_left(4, 5, 1), (4, 4));
        assert_eq!(top_left(3, 3, 1), (1, 1));
        assert_eq!(top_left(0, 0, 1), (-2, -2));
        assert_eq!(top_left(2, 8, 0), (0, 6));
    }

    // Tests that underscores carry their identity at the bottom
    // Verified by always returning the center
    #[test]
    fn test_identity_position() {
        assert_eq!(identity_position(&expanded("_"), 0, 0, 0), (1, 2));
        assert_eq!(identity_position(&expanded("|"), 2, 2, 0), (1, 1));
    }

    // Tests identity values for walls, path markers and off-board reads
    // Verified by returning the raw center character for claimed cells
    #[test]
    fn test_identity_value() {
        let glyphs = Glyphs::default();

        assert_eq!(identity_value(&expanded("_"), 2, 0, &glyphs, 0), Some('_'));
        assert_eq!(identity_value(&expanded("/"), 0, 0, &glyphs, 0), Some('/'));
        assert_eq!(identity_value(&expanded(" "), 1, 1, &glyphs, 0), Some(' '));
        assert_eq!(identity_value(&expanded("`"), 1, 1, &glyphs, 0), Some(' '));
        assert_eq!(identity_value(&expanded("_"), 5, 0, &glyphs, 0), None);
    }

    // Tests that a hit on a visible cell rewrites the whole glyph
    // Verified by writing only the hit cell
    #[test]
    fn test_set_macro_char_rewrites_glyph() {
        let glyphs = Glyphs::default();
        let mut grid = expanded("_");

        let mut changed = set_macro_char(&mut grid, 0, 2, ' ', &glyphs, 0);
        changed.sort_unstable();

        assert_eq!(changed, vec![(0, 2), (1, 1), (1, 2), (2, 2)]);
        assert!(grid.lines().all(|line| line == "   "));
    }

    // Tests that whitespace inside a glyph's block is written on its own
    // Verified by rewriting the whole mask for path hits
    #[test]
    fn test_set_macro_char_on_path_cell() {
        let glyphs = Glyphs::default();
        let mut grid = expanded("|");

        let changed = set_macro_char(&mut grid, 0, 0, '`', &glyphs, 0);

        assert_eq!(changed, vec![(0, 0)]);
        assert_eq!(grid.get(0, 0), Some('`'));
        assert_eq!(grid.get(1, 0), Some('|'));
    }

    // Tests that off-board and no-op writes change nothing
    // Verified by removing the early returns
    #[test]
    fn test_set_macro_char_noops() {
        let glyphs = Glyphs::default();
        let mut grid = expanded("-");
        let before = grid.clone();

        assert!(set_macro_char(&mut grid, 7, 7, ' ', &glyphs, 0).is_empty());
        assert!(set_macro_char(&mut grid, 1, 1, '-', &glyphs, 0).is_empty());
        assert_eq!(grid, before);
    }
}
