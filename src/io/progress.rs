//! Batch progress display over the landmark files being measured

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many landmark files of a batch have been measured
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    file_count: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar shown yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            file_count: 0,
            completed: 0,
        }
    }

    /// Show a bar for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        self.completed = 0;

        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Mark `path` as measured and show its name
    pub fn complete_file(&mut self, path: &Path) {
        self.completed = (self.completed + 1).min(self.file_count);
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
            bar.set_position(self.completed as u64);
        }
    }

    /// Number of files marked complete since the last initialization
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of files in the current batch
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Remove the bar after a failed batch, leaving the error visible
    pub fn abandon(&self) {
        if let Some(ref bar) = self.bar {
            bar.abandon();
        }
    }
}
