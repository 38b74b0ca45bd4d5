//! Tests for role classification of board characters

#[cfg(test)]
mod tests {
    use asciimaze::spatial::cell::{Glyphs, Role};

    // Tests the default role of every glyph class
    // Verified by checking walls before corners in role
    #[test]
    fn test_default_roles() {
        let glyphs = Glyphs::default();

        assert_eq!(glyphs.role(' '), Role::Unvisited);
        assert_eq!(glyphs.role('`'), Role::Visited);
        assert_eq!(glyphs.role('~'), Role::Avoid);
        assert_eq!(glyphs.role('+'), Role::Corner('+'));
        assert_eq!(glyphs.role('|'), Role::Wall('|'));
        assert_eq!(glyphs.role('#'), Role::Wall('#'));
        assert_eq!(glyphs.role('a'), Role::Other('a'));
    }

    // Tests that corners count as walls but other roles do not
    // Verified by dropping the Corner arm from is_wall
    #[test]
    fn test_role_is_wall() {
        assert!(Role::Wall('-').is_wall());
        assert!(Role::Corner('+').is_wall());
        assert!(!Role::Unvisited.is_wall());
        assert!(!Role::Visited.is_wall());
        assert!(!Role::Avoid.is_wall());
        assert!(!Role::Other('x').is_wall());
    }

    // Tests glyph subsets used by the fill and the walk
    // Verified by merging the diagonal and vertical sets
    #[test]
    fn test_glyph_subsets() {
        let glyphs = Glyphs::default();

        assert!(glyphs.is_diagonal('/'));
        assert!(glyphs.is_diagonal('\\'));
        assert!(!glyphs.is_diagonal('|'));
        assert!(glyphs.is_vertical('|'));
        assert!(glyphs.is_vertical('/'));
        assert!(!glyphs.is_vertical('_'));
        assert!(glyphs.is_wall('_'));
        assert!(!glyphs.is_wall(' '));
    }

    // Tests that both path markers count as path
    // Verified by testing only the unvisited character
    #[test]
    fn test_is_path() {
        let glyphs = Glyphs::default();

        assert!(glyphs.is_path(' '));
        assert!(glyphs.is_path('`'));
        assert!(!glyphs.is_path('~'));
        assert!(!glyphs.is_path('-'));
    }

    // Tests that custom markers change classification
    // Verified by hardcoding the default visited marker in role
    #[test]
    fn test_custom_markers() {
        let glyphs = Glyphs {
            visited: '.',
            avoid: '!',
            ..Glyphs::default()
        };

        assert_eq!(glyphs.role('.'), Role::Visited);
        assert_eq!(glyphs.role('!'), Role::Avoid);
        assert_eq!(glyphs.role('`'), Role::Other('`'));
        assert_eq!(glyphs.role('~'), Role::Other('~'));
    }
}
