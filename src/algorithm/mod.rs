/// Parse, carve and render orchestration
pub mod executor;
/// Iterative region fill
pub mod fill;
/// Exterior and avoid region sealing
pub mod outside;
/// Block pattern matching and replacement
pub mod pattern;
/// Microspace joint and implied-wall rule tables
pub mod rules;
/// Randomized wall-knocking walk
pub mod walk;
