//! Pairing and stage tables supplied as CSV files
//!
//! Pairings use a `from,to` header, stages a `stage,hours` header.

use crate::io::error::{LandmarkError, Result};
use crate::landmarks::metadata::StageTable;
use crate::measurement::pairing::PointPairing;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PairingEntry {
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct StageEntry {
    stage: String,
    hours: f64,
}

fn config_error(path: &Path, reason: impl Into<String>) -> LandmarkError {
    LandmarkError::Config {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn read_entries<T>(path: &Path) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LandmarkError::Table {
            path: path.to_path_buf(),
            source,
        })?;

    reader
        .deserialize::<T>()
        .enumerate()
        .map(|(row, entry)| {
            entry.map_err(|e| config_error(path, format!("row {}: {e}", row + 1)))
        })
        .collect()
}

/// Read the landmark pairings to measure
///
/// # Errors
///
/// Returns [`LandmarkError::Table`] when the file cannot be opened and
/// [`LandmarkError::Config`] when it is empty, a row is malformed, a name is
/// blank or a pairing is listed twice
pub fn load_pairings(path: &Path) -> Result<Vec<PointPairing>> {
    let entries: Vec<PairingEntry> = read_entries(path)?;
    if entries.is_empty() {
        return Err(config_error(path, "no pairings listed"));
    }

    let mut seen = BTreeSet::new();
    let mut pairings = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.from.is_empty() || entry.to.is_empty() {
            return Err(config_error(path, "pairing with a blank landmark name"));
        }
        let pairing = PointPairing::new(entry.from, entry.to);
        if !seen.insert(pairing.clone()) {
            return Err(config_error(path, format!("{pairing} is listed twice")));
        }
        pairings.push(pairing);
    }

    Ok(pairings)
}

/// Read the ages in hours of each stage label
///
/// # Errors
///
/// Returns [`LandmarkError::Table`] when the file cannot be opened and
/// [`LandmarkError::Config`] when a row is malformed, an age is not finite or
/// a stage is listed twice
pub fn load_stage_table(path: &Path) -> Result<StageTable> {
    let entries: Vec<StageEntry> = read_entries(path)?;

    let mut table = StageTable::empty();
    for entry in entries {
        if !entry.hours.is_finite() {
            return Err(config_error(
                path,
                format!("stage '{}' has non-finite age", entry.stage),
            ));
        }
        if table.insert(entry.stage.clone(), entry.hours).is_some() {
            return Err(config_error(
                path,
                format!("stage '{}' is listed twice", entry.stage),
            ));
        }
    }

    Ok(table)
}
