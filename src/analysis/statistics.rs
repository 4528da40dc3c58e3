//! Descriptive statistics over measured distances

use crate::analysis::reshape::MeasurementRow;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Arithmetic mean, `None` for no values
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn sum_of_squares(values: &[f64], centre: f64) -> f64 {
    values
        .iter()
        .map(|v| (v - centre) * (v - centre))
        .sum::<f64>()
}

/// Population standard deviation (divisor `n`)
pub fn population_std(values: &[f64]) -> Option<f64> {
    let centre = mean(values)?;
    Some((sum_of_squares(values, centre) / values.len() as f64).sqrt())
}

/// Sample standard deviation (divisor `n - 1`), `None` below two values
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let centre = mean(values)?;
    Some((sum_of_squares(values, centre) / (values.len() - 1) as f64).sqrt())
}

/// Standard scores against the population mean and deviation
///
/// Every score is `None` when the values have no spread.
pub fn z_scores(values: &[f64]) -> Vec<Option<f64>> {
    let (Some(centre), Some(spread)) = (mean(values), population_std(values)) else {
        return Vec::new();
    };
    if spread == 0.0 {
        return vec![None; values.len()];
    }
    values.iter().map(|v| Some((v - centre) / spread)).collect()
}

/// Time used as part of a grouping key, ordered numerically with blanks first
#[derive(Debug, Clone, Copy)]
pub struct TimeKey(pub Option<f64>);

impl PartialEq for TimeKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TimeKey {}

impl PartialOrd for TimeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.total_cmp(&b),
        }
    }
}

/// Distance statistics for one stage, culture, time and measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Stage token
    #[serde(rename = "Info")]
    pub info: String,
    /// Culture token
    #[serde(rename = "Culture")]
    pub culture: String,
    /// Time in hours
    #[serde(rename = "Time")]
    pub time_hours: Option<f64>,
    /// Pairing label
    #[serde(rename = "Measurement")]
    pub measurement: String,
    /// Number of specimens measured
    #[serde(rename = "Count")]
    pub count: usize,
    /// Mean distance
    #[serde(rename = "Mean")]
    pub mean: f64,
    /// Sample standard deviation, blank for a single specimen
    #[serde(rename = "Std")]
    pub std: Option<f64>,
}

impl SummaryRow {
    /// Header of the summary table
    pub const COLUMNS: [&'static str; 7] = [
        "Info",
        "Culture",
        "Time",
        "Measurement",
        "Count",
        "Mean",
        "Std",
    ];
}

/// Group measurements by stage, culture, time and measurement
///
/// Groups are sorted by those keys in that order.
pub fn summarise(rows: &[MeasurementRow]) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<(&str, &str, TimeKey, &str), Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups
            .entry((
                row.info.as_str(),
                row.culture.as_str(),
                TimeKey(row.time_hours),
                row.measurement.as_str(),
            ))
            .or_default()
            .push(row.distance);
    }

    groups
        .into_iter()
        .filter_map(|((info, culture, time, measurement), values)| {
            Some(SummaryRow {
                info: info.to_string(),
                culture: culture.to_string(),
                time_hours: time.0,
                measurement: measurement.to_string(),
                count: values.len(),
                mean: mean(&values)?,
                std: sample_std(&values),
            })
        })
        .collect()
}
