//! Error types for template parsing, configuration and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Checked write landed outside the board
    ///
    /// Reads never produce this; out-of-range reads return an empty value.
    OutOfBounds {
        /// Column of the rejected write
        x: i32,
        /// Row of the rejected write
        y: i32,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Find/replace pattern cannot be used
    MalformedPattern {
        /// Description of what's wrong with the pattern
        reason: String,
    },

    /// Template input is unusable (wrong target kind, undecodable file)
    InvalidTemplate {
        /// Description of what's wrong with the template
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => {
                write!(f, "Position ({x}, {y}) is outside the board")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedPattern { reason } => {
                write!(f, "Malformed pattern: {reason}")
            }
            Self::InvalidTemplate { reason } => {
                write!(f, "Invalid template: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed pattern error
pub fn malformed_pattern(reason: &impl ToString) -> MazeError {
    MazeError::MalformedPattern {
        reason: reason.to_string(),
    }
}

/// Create an invalid template error for unusable CLI targets
pub fn invalid_template(msg: &str) -> MazeError {
    MazeError::InvalidTemplate {
        reason: msg.to_string(),
    }
}

/// Attach a path and operation to a raw I/O error
pub fn file_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MazeError {
    MazeError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
