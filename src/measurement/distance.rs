//! Pairwise landmark distances for one specimen

use crate::landmarks::point::LandmarkFile;
use crate::measurement::pairing::PointPairing;
use std::collections::BTreeMap;

/// Distances measured on one specimen, keyed by pairing label
///
/// A label is absent when either landmark of its pairing was not digitized.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRecord {
    file_id: String,
    distances: BTreeMap<String, f64>,
}

impl DistanceRecord {
    /// Filename stem of the measured specimen
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// Measured distances keyed by label
    pub const fn distances(&self) -> &BTreeMap<String, f64> {
        &self.distances
    }

    /// Distance stored under `label`
    pub fn get(&self, label: &str) -> Option<f64> {
        self.distances.get(label).copied()
    }

    /// Distance measured for `pairing`
    pub fn for_pairing(&self, pairing: &PointPairing) -> Option<f64> {
        self.get(&pairing.label())
    }

    /// Number of measured distances
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether no pairing could be measured
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Measure every pairing whose two landmarks are present in `file`
pub fn measure(file: &LandmarkFile, pairings: &[PointPairing]) -> DistanceRecord {
    let distances = pairings
        .iter()
        .filter_map(|pairing| {
            let from = file.point(pairing.from_name())?;
            let to = file.point(pairing.to_name())?;
            Some((pairing.label(), from.distance_to(to)))
        })
        .collect();

    DistanceRecord {
        file_id: file.file_id().to_string(),
        distances,
    }
}
