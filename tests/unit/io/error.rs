//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use asciimaze::MazeError;
    use asciimaze::io::error::{file_error, invalid_parameter, invalid_template, malformed_pattern};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = file_error(
            "/tmp/rooms.txt",
            "read",
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read"));
        assert!(message.contains("/tmp/rooms.txt"));
        assert!(message.contains("file not found"));
    }

    // Tests that only file system errors carry a source
    // Verified by returning a source for every variant
    #[test]
    fn test_other_errors_have_no_source() {
        assert!(MazeError::OutOfBounds { x: 1, y: 2 }.source().is_none());
        assert!(malformed_pattern(&"empty").source().is_none());
        assert!(invalid_template("bad target").source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("thickness", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("thickness"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests out-of-bounds message names the coordinate
    // Verified by swapping x and y in the message
    #[test]
    fn test_out_of_bounds_message() {
        let error = MazeError::OutOfBounds { x: -1, y: 7 };

        assert_eq!(error.to_string(), "Position (-1, 7) is outside the board");
    }

    // Tests helper constructors pick the right variants
    // Verified by building InvalidParameter in invalid_template
    #[test]
    fn test_helper_variants() {
        assert!(matches!(
            malformed_pattern(&"ragged rows"),
            MazeError::MalformedPattern { ref reason } if reason == "ragged rows"
        ));
        assert!(matches!(
            invalid_template("not a template"),
            MazeError::InvalidTemplate { ref reason } if reason == "not a template"
        ));
    }
}
