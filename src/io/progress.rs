//! Progress display for directory fingerprinting runs

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_FILES};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}} {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of image files
///
/// Hidden for single-file runs so one-off invocations print only results.
pub struct BatchProgress {
    bar: ProgressBar,
    failures: usize,
}

impl BatchProgress {
    /// Create a progress display for `file_count` files
    pub fn new(file_count: usize, visible: bool) -> Self {
        let bar = if visible && file_count >= PROGRESS_MIN_FILES {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar, failures: 0 }
    }

    /// Show the file currently being fingerprinted
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Advance past a file, recording whether it failed
    pub fn complete_file(&mut self, succeeded: bool) {
        if !succeeded {
            self.failures += 1;
        }
        self.bar.inc(1);
    }

    /// Number of files that failed so far
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
