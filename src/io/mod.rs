//! Input/output operations: batching, export, configuration and errors

/// Fail-fast aggregation of landmark files
pub mod batch;
/// Command-line interface
pub mod cli;
/// Pipeline constants and default tables
pub mod configuration;
/// Error types
pub mod error;
/// CSV export of result tables
pub mod export;
/// Batch progress display
pub mod progress;
/// Pairing and stage tables read from CSV
pub mod tables;
