//! Landmark pairs whose distances are measured

use crate::io::configuration::DEFAULT_PAIRINGS;
use std::fmt;

/// Ordered pair of landmark names defining one distance measurement
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointPairing {
    from: String,
    to: String,
}

impl PointPairing {
    /// Create a pairing from landmark `from` to landmark `to`
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// First landmark name
    pub fn from_name(&self) -> &str {
        &self.from
    }

    /// Second landmark name
    pub fn to_name(&self) -> &str {
        &self.to
    }

    /// Canonical column label, e.g. `Dist(Ant shelf L, Post shelf L)`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PointPairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dist({}, {})", self.from, self.to)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for PointPairing {
    fn from((from, to): (A, B)) -> Self {
        Self::new(from, to)
    }
}

/// The built-in pairing table
pub fn default_pairings() -> Vec<PointPairing> {
    DEFAULT_PAIRINGS.iter().copied().map(PointPairing::from).collect()
}
