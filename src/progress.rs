//! Progress reporting
//!
//! The search reports progress through `ProgressObserver`. Reports are
//! advisory: observers may drop or reorder them, and results never depend on
//! them.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress reports from a long-running search
///
/// Methods take `&self` because reports arrive from worker threads.
pub trait ProgressObserver: Sync {
    fn start(&self, total: usize, label: &str);
    fn update(&self, count: usize, label: &str);
    fn increment_by_one(&self);
    fn complete(&self, label: &str);
}

/// Observer that ignores every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn start(&self, _total: usize, _label: &str) {}
    fn update(&self, _count: usize, _label: &str) {}
    fn increment_by_one(&self) {}
    fn complete(&self, _label: &str) {}
}

/// Terminal progress bar backed by `indicatif`
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░");
        bar.set_style(style);
        Self { bar }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for BarProgress {
    fn start(&self, total: usize, label: &str) {
        self.bar.reset();
        self.bar.set_length(total as u64);
        self.bar.set_message(label.to_string());
    }

    fn update(&self, count: usize, label: &str) {
        // Workers finish out of order; never move the bar backwards
        if count as u64 > self.bar.position() {
            self.bar.set_position(count as u64);
        }
        self.bar.set_message(label.to_string());
    }

    fn increment_by_one(&self) {
        self.bar.inc(1);
    }

    fn complete(&self, label: &str) {
        self.bar.finish_with_message(label.to_string());
    }
}
