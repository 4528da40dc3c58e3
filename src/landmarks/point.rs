//! Named landmark coordinates and the per-specimen point set

use crate::io::error::Result;
use crate::landmarks::metadata::FileMetadata;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// A manually digitized anatomical landmark
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkPoint {
    /// Experimenter-assigned label, e.g. `Ant shelf L`
    pub name: String,
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl LandmarkPoint {
    /// Create a landmark at `(x, y)`
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to another landmark
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy).sqrt()
    }
}

/// One parsed specimen observation
///
/// Immutable once built. Points are keyed by name; when a name occurs more
/// than once the last occurrence is kept and the name is listed in
/// [`LandmarkFile::duplicates`].
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFile {
    file_id: String,
    points: BTreeMap<String, LandmarkPoint>,
    metadata: FileMetadata,
    node_count: usize,
    duplicates: Vec<String>,
}

impl LandmarkFile {
    /// Build a specimen from its points in file order
    pub fn from_points<I>(file_id: impl Into<String>, metadata: FileMetadata, points: I) -> Self
    where
        I: IntoIterator<Item = LandmarkPoint>,
    {
        let mut map = BTreeMap::new();
        let mut duplicates = Vec::new();
        let mut node_count = 0;

        for point in points {
            node_count += 1;
            match map.entry(point.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(point);
                }
                Entry::Occupied(mut slot) => {
                    if !duplicates.contains(&point.name) {
                        duplicates.push(point.name.clone());
                    }
                    slot.insert(point);
                }
            }
        }

        Self {
            file_id: file_id.into(),
            points: map,
            metadata,
            node_count,
            duplicates,
        }
    }

    /// Filename stem the specimen was loaded from
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// Landmarks keyed by name
    pub const fn points(&self) -> &BTreeMap<String, LandmarkPoint> {
        &self.points
    }

    /// Landmark called `name`, if digitized
    pub fn point(&self, name: &str) -> Option<&LandmarkPoint> {
        self.points.get(name)
    }

    /// Metadata parsed from the filename
    pub const fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    /// Number of point nodes read, including overwritten duplicates
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Names that occurred more than once, in order of first collision
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Number of distinct landmarks
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no landmark was digitized
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Culture time or developmental age in hours
    ///
    /// # Errors
    ///
    /// Returns [`crate::LandmarkError::MissingLookup`] for a fixed specimen
    /// whose stage has no known age
    pub fn require_time_hours(&self) -> Result<f64> {
        self.metadata.require_time_hours(&self.file_id)
    }
}
