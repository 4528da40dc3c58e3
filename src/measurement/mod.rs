//! Distance measurements between configured landmark pairs

/// Euclidean distance extraction per specimen
pub mod distance;
/// Named landmark pairs and their canonical labels
pub mod pairing;
