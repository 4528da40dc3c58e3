//! Fail-fast aggregation of landmark files into aligned point and distance sets

use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::landmarks::loader::{LoadOptions, load_with};
use crate::landmarks::point::LandmarkFile;
use crate::measurement::distance::{DistanceRecord, measure};
use crate::measurement::pairing::{PointPairing, default_pairings};
use log::{info, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Handling of fixed specimens whose stage has no known age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StagePolicy {
    /// Leave the time blank and log a warning
    #[default]
    Lenient,
    /// Fail the batch with [`crate::LandmarkError::MissingLookup`]
    Strict,
}

/// Everything a batch needs besides the file list
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// How each landmark file is loaded
    pub load: LoadOptions,
    /// Pairings measured on every specimen
    pub pairings: Vec<PointPairing>,
    /// Handling of unknown fixed stages
    pub stage_policy: StagePolicy,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            load: LoadOptions::default(),
            pairings: default_pairings(),
            stage_policy: StagePolicy::default(),
        }
    }
}

/// Specimens and their distance records, aligned by index and file id
#[derive(Debug, Clone)]
pub struct BatchResults {
    files: Vec<LandmarkFile>,
    records: Vec<DistanceRecord>,
    pairings: Vec<PointPairing>,
}

impl BatchResults {
    /// Loaded specimens in input order
    pub fn files(&self) -> &[LandmarkFile] {
        &self.files
    }

    /// Distance records, one per specimen, in input order
    pub fn records(&self) -> &[DistanceRecord] {
        &self.records
    }

    /// Pairings every record was measured with
    pub fn pairings(&self) -> &[PointPairing] {
        &self.pairings
    }

    /// Specimens joined with their distance records
    pub fn rows(&self) -> impl Iterator<Item = (&LandmarkFile, &DistanceRecord)> {
        self.files.iter().zip(&self.records)
    }

    /// Number of specimens
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the batch holds no specimen
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// List the landmark files named by `target`
///
/// A file target is returned as is, whatever its extension. A directory
/// target yields its files with `extension`, sorted by path.
///
/// # Errors
///
/// Returns an error if the target does not exist or cannot be listed
pub fn collect_landmark_files(target: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }
    if !target.is_dir() {
        return Err(invalid_parameter(
            "target",
            &target.display(),
            &"must be a landmark file or a directory",
        ));
    }

    let entries =
        std::fs::read_dir(target).map_err(|e| file_system_error(target, "list directory", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(target, "list directory", e))?
            .path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load and measure every file, failing on the first bad one
///
/// # Errors
///
/// Returns the first load, filename or stage error encountered; no partial
/// results are returned
pub fn aggregate(paths: &[PathBuf], options: &BatchOptions) -> Result<BatchResults> {
    aggregate_observed(paths, options, |_, _| {})
}

/// Like [`aggregate`], calling `on_file` after each file is measured
///
/// # Errors
///
/// Returns the first load, filename or stage error encountered; no partial
/// results are returned
pub fn aggregate_observed<F>(
    paths: &[PathBuf],
    options: &BatchOptions,
    mut on_file: F,
) -> Result<BatchResults>
where
    F: FnMut(&Path, &LandmarkFile),
{
    let mut seen_ids = BTreeSet::new();
    let mut files = Vec::with_capacity(paths.len());
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        let file = load_with(path, &options.load)?;

        if !seen_ids.insert(file.file_id().to_string()) {
            return Err(invalid_parameter(
                "files",
                &path.display(),
                &format!("file id '{}' occurs more than once", file.file_id()),
            ));
        }

        if file.metadata().time_hours().is_none() {
            match options.stage_policy {
                StagePolicy::Strict => {
                    file.require_time_hours()?;
                }
                StagePolicy::Lenient => warn!(
                    "'{}': no age known for stage '{}', time left blank",
                    file.file_id(),
                    file.metadata().info()
                ),
            }
        }

        records.push(measure(&file, &options.pairings));
        on_file(path, &file);
        files.push(file);
    }

    info!(
        "Measured {} pairings on {} landmark files",
        options.pairings.len(),
        files.len()
    );

    Ok(BatchResults {
        files,
        records,
        pairings: options.pairings.clone(),
    })
}
