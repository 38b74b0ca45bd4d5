/// Command-line argument handling and batch file processing
pub mod cli;
/// Default constants and parser configuration
pub mod configuration;
/// Error types and helper constructors
pub mod error;
/// Progress bars for batch runs
pub mod progress;
/// Template text to board and back
pub mod transform;
