//! Command-line interface for batch landmark measurement

use crate::io::batch::{BatchOptions, StagePolicy, aggregate_observed, collect_landmark_files};
use crate::io::configuration::{DEFAULT_OUTPUT_DIR, LANDMARK_EXTENSION};
use crate::io::error::Result;
use crate::io::export::export_all;
use crate::io::progress::ProgressManager;
use crate::io::tables::{load_pairings, load_stage_table};
use crate::landmarks::loader::{DuplicatePolicy, LoadOptions};
use crate::landmarks::metadata::StageTable;
use crate::measurement::pairing::default_pairings;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palatometry")]
#[command(
    author,
    version,
    about = "Measure landmark distances on digitized palatal shelf specimens"
)]
/// Command-line arguments for the measurement tool
pub struct Cli {
    /// Landmark file or directory of landmark files to measure
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory the result tables are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Extension of landmark files when TARGET is a directory
    #[arg(short, long, default_value = LANDMARK_EXTENSION)]
    pub extension: String,

    /// CSV file with `from,to` columns replacing the built-in pairings
    #[arg(short, long)]
    pub pairings: Option<PathBuf>,

    /// CSV file with `stage,hours` columns replacing the built-in stage ages
    #[arg(short, long)]
    pub stages: Option<PathBuf>,

    /// Fail when a fixed specimen's stage has no known age
    #[arg(long)]
    pub strict_stages: bool,

    /// Fail when a landmark name occurs twice in one file
    #[arg(long)]
    pub reject_duplicates: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Assemble batch options from flags and configuration files
    ///
    /// # Errors
    ///
    /// Returns an error if a pairing or stage table cannot be read
    pub fn batch_options(&self) -> Result<BatchOptions> {
        let pairings = match self.pairings {
            Some(ref path) => load_pairings(path)?,
            None => default_pairings(),
        };
        let stages = match self.stages {
            Some(ref path) => load_stage_table(path)?,
            None => StageTable::default(),
        };

        Ok(BatchOptions {
            load: LoadOptions {
                stages,
                duplicate_policy: if self.reject_duplicates {
                    DuplicatePolicy::Reject
                } else {
                    DuplicatePolicy::Warn
                },
            },
            pairings,
            stage_policy: if self.strict_stages {
                StagePolicy::Strict
            } else {
                StagePolicy::Lenient
            },
        })
    }
}

/// Orchestrates loading, measuring and exporting a batch of landmark files
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a processor with the given CLI configuration
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Measure every landmark file and write the result tables
    ///
    /// Returns the tables written; nothing is written when any file fails or
    /// no landmark file is found.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, load or export error
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let options = self.cli.batch_options()?;
        let files = collect_landmark_files(&self.cli.target, &self.cli.extension)?;

        if files.is_empty() {
            warn!(
                "No .{} files found in '{}'",
                self.cli.extension,
                self.cli.target.display()
            );
            return Ok(Vec::new());
        }

        info!(
            "Measuring {} landmark files from '{}'",
            files.len(),
            self.cli.target.display()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let progress = &mut self.progress_manager;
        let outcome = aggregate_observed(&files, &options, |path, _| {
            if let Some(pm) = progress.as_mut() {
                pm.complete_file(path);
            }
        });

        let results = match outcome {
            Ok(results) => results,
            Err(e) => {
                if let Some(ref pm) = self.progress_manager {
                    pm.abandon();
                }
                error!("Batch aborted, no tables written: {e}");
                return Err(e);
            }
        };

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        export_all(&self.cli.output, &results)
    }
}
