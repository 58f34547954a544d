//! Progress bar display for package uploads

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for an import run
pub struct ProgressDisplay {
    /// One tick per package uploaded, skipped or failed
    package_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total package count
    pub fn new(total_packages: u64) -> Self {
        let package_pb = ProgressBar::new(total_packages);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}") {
            package_pb.set_style(style.progress_chars("#>-"));
        }
        Self { package_pb }
    }

    /// Update to show current package being uploaded
    pub fn update_package(&self, full_name: &str) {
        self.package_pb.set_message(full_name.to_string());
    }

    /// Increment package progress
    pub fn inc_package(&self) {
        self.package_pb.inc(1);
    }

    /// Hide the bar while `f` writes to the terminal (prompts, log lines)
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.package_pb.suspend(f)
    }

    pub fn finish(&self) {
        self.package_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.package_pb.abandon();
    }
}
