//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for file processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize a byte-based progress bar over the input files
    pub fn init_bytes(&mut self, total_bytes: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_bytes);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str, bytes: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {}", filename));
            pb.inc(bytes);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_bytes(100);
        assert!(reporter.progress_bar.is_none());
        reporter.file_completed("a.txt", 100);
        reporter.finish();
    }

    #[test]
    fn test_reporter_counts_bytes() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_bytes(100);
        reporter.file_completed("a.txt", 40);
        assert_eq!(reporter.progress_bar.as_ref().map(|pb| pb.position()), Some(40));
        reporter.finish();
    }
}
