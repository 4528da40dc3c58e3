//! Landmark files: point parsing and filename metadata

/// XML point file loading
pub mod loader;
/// Typed parser for the `<Info> <Culture> <Time>` filename grammar
pub mod metadata;
/// Landmark points and per-specimen point sets
pub mod point;
