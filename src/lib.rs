//! Distance measurements between digitized landmarks of embryonic palatal shelves
//!
//! Landmark files are parsed into named points, annotated with the stage,
//! culture protocol and time encoded in their filenames, measured along a
//! configured set of landmark pairings and exported as flat CSV tables.

#![forbid(unsafe_code)]

/// Tabular analysis of measured distances
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Landmark file parsing and filename metadata
pub mod landmarks;
/// Pairwise landmark distance measurement
pub mod measurement;

pub use io::batch::{BatchOptions, BatchResults, aggregate};
pub use io::error::{LandmarkError, Result};
pub use landmarks::loader::load;
pub use landmarks::metadata::{FileMetadata, parse};
pub use landmarks::point::{LandmarkFile, LandmarkPoint};
pub use measurement::distance::{DistanceRecord, measure};
pub use measurement::pairing::PointPairing;
