//! Tests for the parse, carve and render pipeline

#[cfg(test)]
mod tests {
    use asciimaze::io::configuration::VerticalBreak;
    use asciimaze::{Maze, MazeConfig, MazeError, mazeify};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    const TWO_ROOMS: &str = "+---+---+\n|   |   |\n+---+---+\n";

    // A room whose only way out is a pipe flanked by underscores
    const FLANKED_PIPE: &str = "+-----+\n|     |\n+-_|_-+\n  | |\n  +-+";

    // Tests that parsing alone leaves the template unchanged
    // Verified by carving during parse
    #[test]
    fn test_parse_does_not_carve() {
        let maze = Maze::parse(TWO_ROOMS, MazeConfig::default()).expect("valid config");

        assert_eq!(maze.render(), TWO_ROOMS);
        assert_eq!(maze.grid().height(), 5);
        assert_eq!(maze.layout().rows, 3);
        assert_eq!(maze.layout().cols, 9);
    }

    // Tests that an invalid configuration is rejected before any work
    // Verified by removing the validate call from parse
    #[test]
    fn test_parse_validates_config() {
        let config = MazeConfig {
            thickness: 0,
            ..MazeConfig::default()
        };

        assert!(matches!(
            Maze::parse(TWO_ROOMS, config),
            Err(MazeError::InvalidParameter {
                parameter: "thickness",
                ..
            })
        ));
    }

    // Tests that carving opens the single wall between two rooms
    // Verified by skipping the walk in carve
    #[test]
    fn test_carve_two_rooms() {
        let mut maze = Maze::parse(TWO_ROOMS, MazeConfig::default()).expect("valid config");
        let mut rng = StdRng::seed_from_u64(11);

        let report = maze.carve(&mut rng);

        assert_eq!(report.walls_opened, 1);
        assert_eq!(maze.render(), "+---+---+\n|       |\n+---+---+\n");
    }

    // Tests both vertical break policies on a pipe next to underscores
    // Verified by ignoring the vertical break setting
    #[test]
    fn test_vertical_break_policies() {
        for (policy, expected) in [
            (VerticalBreak::Open, "+-_ _-+"),
            (VerticalBreak::KeepUnderscore, "+-___-+"),
        ] {
            let config = MazeConfig {
                vertical_break: policy,
                ..MazeConfig::default()
            };
            let mut maze = Maze::parse(FLANKED_PIPE, config).expect("valid config");
            let report = maze.carve(&mut StdRng::seed_from_u64(2));

            assert_eq!(report.walls_opened, 1);
            assert_eq!(maze.render().lines().nth(2), Some(expected));
        }
    }

    // Tests that the raw render keeps the frame and markers
    // Verified by stripping the frame in render_raw
    #[test]
    fn test_render_raw_keeps_frame() {
        let mut maze = Maze::parse("+-+\n| |\n+-+", MazeConfig::default()).expect("valid config");
        maze.carve(&mut StdRng::seed_from_u64(0));

        assert_eq!(
            maze.render_raw(),
            "`````\n`+-+`\n`|`|`\n`+-+`\n`````\n"
        );
        assert_eq!(maze.render(), "+-+\n| |\n+-+\n");
    }

    // Tests that edits through grid_mut are seen by the carve
    // Verified by carving a copy of the board
    #[test]
    fn test_grid_mut_edits_survive() {
        let mut maze = Maze::parse(TWO_ROOMS, MazeConfig::default()).expect("valid config");
        assert!(maze.grid_mut().set(5, 2, '+'));

        let report = maze.carve(&mut StdRng::seed_from_u64(4));

        assert_eq!(report.walls_opened, 0);
        assert_eq!(report.walks, 2);
        assert_eq!(maze.config(), &MazeConfig::default());
    }

    // Tests that a seed makes the result reproducible
    // Verified by ignoring the seed
    #[test]
    fn test_mazeify_seeded() {
        let template = "+---+---+---+\n|   |   |   |\n+---+---+---+\n|   |   |   |\n+---+---+---+";

        let first = mazeify(template, MazeConfig::default(), Some(99)).expect("valid config");
        let second = mazeify(template, MazeConfig::default(), Some(99)).expect("valid config");

        assert_eq!(first, second);
        assert_eq!(first.lines().count(), 5);
    }

    // Tests reading a template from disk and reporting a missing file
    // Verified by returning an empty template on read failure
    #[test]
    fn test_from_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("rooms.txt");
        fs::write(&path, TWO_ROOMS).expect("Failed to write template");

        let maze = Maze::from_file(&path, MazeConfig::default()).expect("readable template");
        assert_eq!(maze.render(), TWO_ROOMS);

        let missing = temp_dir.path().join("missing.txt");
        assert!(matches!(
            Maze::from_file(&missing, MazeConfig::default()),
            Err(MazeError::FileSystem {
                operation: "read",
                ..
            })
        ));
    }
}
