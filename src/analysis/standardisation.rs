//! Standardised shelf length (AP) and extent (ML) per stage group and time
//!
//! AP is the mean of the left and right anteroposterior shelf lengths, ML the
//! mean of the left and right medial-shelf to posterior-whisker distances.
//! Either side may be missing. Scores are taken within specimens sharing a
//! stage group (`In vivo` for every fixed specimen) and time, using the
//! population standard deviation. Specimens without a time keep blank scores.

use crate::analysis::statistics::{TimeKey, mean, z_scores};
use crate::io::batch::BatchResults;
use crate::io::configuration::{AP_PAIRINGS, ML_PAIRINGS};
use crate::measurement::distance::DistanceRecord;
use crate::measurement::pairing::PointPairing;
use serde::Serialize;
use std::collections::BTreeMap;

/// Composite measurements and their standard scores for one specimen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardisedRow {
    /// Filename stem of the specimen
    #[serde(rename = "File")]
    pub file_id: String,
    /// Stage group, `In vivo` for fixed specimens
    #[serde(rename = "Group")]
    pub group: String,
    /// Time in hours
    #[serde(rename = "Time")]
    pub time_hours: Option<f64>,
    /// Mean anteroposterior shelf length
    #[serde(rename = "AP")]
    pub ap: Option<f64>,
    /// Mean mediolateral extent
    #[serde(rename = "ML")]
    pub ml: Option<f64>,
    /// AP standard score within the group
    #[serde(rename = "Standardised AP")]
    pub standardised_ap: Option<f64>,
    /// ML standard score within the group
    #[serde(rename = "Standardised ML")]
    pub standardised_ml: Option<f64>,
}

impl StandardisedRow {
    /// Header of the standardisation table
    pub const COLUMNS: [&'static str; 7] = [
        "File",
        "Group",
        "Time",
        "AP",
        "ML",
        "Standardised AP",
        "Standardised ML",
    ];
}

/// Mean of whichever sides of a composite were measured
fn composite(record: &DistanceRecord, sides: &[(&str, &str)]) -> Option<f64> {
    let values: Vec<f64> = sides
        .iter()
        .filter_map(|&(from, to)| record.for_pairing(&PointPairing::new(from, to)))
        .collect();
    mean(&values)
}

/// Score the values read by `get` across `members`, storing them with `set`
fn standardise_group<G, S>(rows: &mut [StandardisedRow], members: &[usize], get: G, mut set: S)
where
    G: Fn(&StandardisedRow) -> Option<f64>,
    S: FnMut(&mut StandardisedRow, Option<f64>),
{
    let present: Vec<(usize, f64)> = members
        .iter()
        .filter_map(|&index| rows.get(index).and_then(&get).map(|value| (index, value)))
        .collect();
    let values: Vec<f64> = present.iter().map(|&(_, value)| value).collect();

    for ((index, _), score) in present.iter().zip(z_scores(&values)) {
        if let Some(row) = rows.get_mut(*index) {
            set(row, score);
        }
    }
}

/// Compute AP and ML composites and their grouped standard scores
pub fn standardise(results: &BatchResults) -> Vec<StandardisedRow> {
    let mut rows: Vec<StandardisedRow> = results
        .rows()
        .map(|(file, record)| StandardisedRow {
            file_id: file.file_id().to_string(),
            group: file.metadata().stage_group(),
            time_hours: file.metadata().time_hours(),
            ap: composite(record, &AP_PAIRINGS),
            ml: composite(record, &ML_PAIRINGS),
            standardised_ap: None,
            standardised_ml: None,
        })
        .collect();

    let mut groups: BTreeMap<(String, TimeKey), Vec<usize>> = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        // specimens of unknown age are never scored
        if row.time_hours.is_none() {
            continue;
        }
        groups
            .entry((row.group.clone(), TimeKey(row.time_hours)))
            .or_default()
            .push(index);
    }

    for members in groups.values() {
        standardise_group(&mut rows, members, |row| row.ap, |row, score| {
            row.standardised_ap = score;
        });
        standardise_group(&mut rows, members, |row| row.ml, |row, score| {
            row.standardised_ml = score;
        });
    }

    rows
}
