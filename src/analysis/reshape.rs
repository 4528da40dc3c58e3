//! Long-form view of the distance table: one row per specimen and measurement

use crate::io::batch::BatchResults;
use serde::Serialize;

/// One measured distance with the metadata of its specimen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementRow {
    /// Filename stem of the specimen
    #[serde(rename = "File")]
    pub file_id: String,
    /// Stage token
    #[serde(rename = "Info")]
    pub info: String,
    /// Culture token
    #[serde(rename = "Culture")]
    pub culture: String,
    /// Culture time or developmental age in hours
    #[serde(rename = "Time")]
    pub time_hours: Option<f64>,
    /// Pairing label
    #[serde(rename = "Measurement")]
    pub measurement: String,
    /// Measured distance
    #[serde(rename = "Distance")]
    pub distance: f64,
}

impl MeasurementRow {
    /// Header of the measurement table
    pub const COLUMNS: [&'static str; 6] =
        ["File", "Info", "Culture", "Time", "Measurement", "Distance"];
}

/// Stack the distance table, dropping pairings a specimen could not measure
///
/// Rows follow specimen order, then configured pairing order.
pub fn long_form(results: &BatchResults) -> Vec<MeasurementRow> {
    let mut rows = Vec::new();
    for (file, record) in results.rows() {
        let metadata = file.metadata();
        for pairing in results.pairings() {
            let label = pairing.label();
            if let Some(distance) = record.get(&label) {
                rows.push(MeasurementRow {
                    file_id: file.file_id().to_string(),
                    info: metadata.info().to_string(),
                    culture: metadata.culture_condition().to_string(),
                    time_hours: metadata.time_hours(),
                    measurement: label,
                    distance,
                });
            }
        }
    }
    rows
}
