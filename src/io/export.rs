//! CSV export of batch results
//!
//! All tables are keyed by the `File` column so they can be joined
//! downstream. Missing values are written as empty cells.

use crate::analysis::reshape::{MeasurementRow, long_form};
use crate::analysis::standardisation::{StandardisedRow, standardise};
use crate::analysis::statistics::{SummaryRow, summarise};
use crate::io::batch::BatchResults;
use crate::io::configuration::{
    DISTANCES_TABLE, MEASUREMENTS_TABLE, POINTS_TABLE, STANDARDISED_TABLE, SUMMARY_TABLE,
};
use crate::io::error::{LandmarkError, Result, file_system_error};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Metadata columns leading every per-specimen table
const METADATA_COLUMNS: [&str; 4] = ["File", "Info", "Culture", "Time"];

/// One coordinate of one landmark of one specimen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRow {
    /// Filename stem of the specimen
    #[serde(rename = "File")]
    pub file_id: String,
    /// Stage token
    #[serde(rename = "Info")]
    pub info: String,
    /// Culture token
    #[serde(rename = "Culture")]
    pub culture: String,
    /// Time in hours
    #[serde(rename = "Time")]
    pub time_hours: Option<f64>,
    /// Landmark name
    #[serde(rename = "Landmark")]
    pub landmark: String,
    /// `x` or `y`
    #[serde(rename = "Coordinate")]
    pub coordinate: &'static str,
    /// Coordinate value
    #[serde(rename = "Value")]
    pub value: f64,
}

impl PointRow {
    /// Header of the point table
    pub const COLUMNS: [&'static str; 7] = [
        "File",
        "Info",
        "Culture",
        "Time",
        "Landmark",
        "Coordinate",
        "Value",
    ];
}

/// Long-form point table rows: specimen order, then landmark name, `x` before `y`
pub fn point_rows(results: &BatchResults) -> Vec<PointRow> {
    let mut rows = Vec::new();
    for file in results.files() {
        let metadata = file.metadata();
        for point in file.points().values() {
            for (coordinate, value) in [("x", point.x), ("y", point.y)] {
                rows.push(PointRow {
                    file_id: file.file_id().to_string(),
                    info: metadata.info().to_string(),
                    culture: metadata.culture_condition().to_string(),
                    time_hours: metadata.time_hours(),
                    landmark: point.name.clone(),
                    coordinate,
                    value,
                });
            }
        }
    }
    rows
}

/// Column names of the wide distance table
pub fn distance_header(results: &BatchResults) -> Vec<String> {
    METADATA_COLUMNS
        .iter()
        .map(|column| (*column).to_string())
        .chain(results.pairings().iter().map(|pairing| pairing.label()))
        .collect()
}

/// Cells of the wide distance table, one row per specimen
pub fn distance_rows(results: &BatchResults) -> Vec<Vec<String>> {
    results
        .rows()
        .map(|(file, record)| {
            let metadata = file.metadata();
            let mut row = vec![
                file.file_id().to_string(),
                metadata.info().to_string(),
                metadata.culture_condition().to_string(),
                format_cell(metadata.time_hours()),
            ];
            row.extend(
                results
                    .pairings()
                    .iter()
                    .map(|pairing| format_cell(record.for_pairing(pairing))),
            );
            row
        })
        .collect()
}

/// Blank for a missing value, otherwise the float as the serialized tables print it
fn format_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:?}")).unwrap_or_default()
}

// Headers are written explicitly so tables without rows keep their columns
fn create_writer(path: &Path) -> Result<csv::Writer<File>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| LandmarkError::Table {
        path: path.to_path_buf(),
        source,
    })
}

fn table_error(path: &Path) -> impl Fn(csv::Error) -> LandmarkError + '_ {
    move |source| LandmarkError::Table {
        path: path.to_path_buf(),
        source,
    }
}

fn serialize_rows<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = create_writer(path)?;
    writer.write_record(columns).map_err(table_error(path))?;
    for row in rows {
        writer.serialize(row).map_err(table_error(path))?;
    }
    writer
        .flush()
        .map_err(|e| file_system_error(path, "flush table", e))
}

/// Write the long-form point table
///
/// # Errors
///
/// Returns an error if the table cannot be written
pub fn write_points(path: &Path, results: &BatchResults) -> Result<()> {
    serialize_rows(path, &PointRow::COLUMNS, &point_rows(results))
}

/// Write the wide distance table, one column per configured pairing
///
/// # Errors
///
/// Returns an error if the table cannot be written
pub fn write_distances(path: &Path, results: &BatchResults) -> Result<()> {
    let mut writer = create_writer(path)?;
    writer
        .write_record(distance_header(results))
        .map_err(table_error(path))?;
    for row in distance_rows(results) {
        writer.write_record(&row).map_err(table_error(path))?;
    }
    writer
        .flush()
        .map_err(|e| file_system_error(path, "flush table", e))
}

/// Write the long-form measurement table
///
/// # Errors
///
/// Returns an error if the table cannot be written
pub fn write_measurements(path: &Path, rows: &[MeasurementRow]) -> Result<()> {
    serialize_rows(path, &MeasurementRow::COLUMNS, rows)
}

/// Write grouped distance statistics
///
/// # Errors
///
/// Returns an error if the table cannot be written
pub fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    serialize_rows(path, &SummaryRow::COLUMNS, rows)
}

/// Write the AP/ML standardisation table
///
/// # Errors
///
/// Returns an error if the table cannot be written
pub fn write_standardised(path: &Path, rows: &[StandardisedRow]) -> Result<()> {
    serialize_rows(path, &StandardisedRow::COLUMNS, rows)
}

/// Write every result table into `dir`, creating it if needed
///
/// Returns the paths written, point table first.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a table cannot be
/// written
pub fn export_all(dir: &Path, results: &BatchResults) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| file_system_error(dir, "create directory", e))?;

    let points = dir.join(POINTS_TABLE);
    write_points(&points, results)?;

    let distances = dir.join(DISTANCES_TABLE);
    write_distances(&distances, results)?;

    let measurement_rows = long_form(results);
    let measurements = dir.join(MEASUREMENTS_TABLE);
    write_measurements(&measurements, &measurement_rows)?;

    let summary = dir.join(SUMMARY_TABLE);
    write_summary(&summary, &summarise(&measurement_rows))?;

    let standardised = dir.join(STANDARDISED_TABLE);
    write_standardised(&standardised, &standardise(results))?;

    info!(
        "Wrote {} specimens to '{}'",
        results.len(),
        dir.display()
    );

    Ok(vec![points, distances, measurements, summary, standardised])
}
