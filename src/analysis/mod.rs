//! Tabular analysis of measured distances

/// Long-form measurement rows
pub mod reshape;
/// Standardised AP and ML composites
pub mod standardisation;
/// Means, deviations, standard scores and grouped summaries
pub mod statistics;
