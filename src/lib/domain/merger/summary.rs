use tracing::{info, warn};

pub struct MergeSummary {
    pub files_supplied: usize,
    pub files_merged: usize,
    pub files_skipped: usize,
    pub total_rows: usize,
    pub total_runtime_secs: f64,
}

pub fn log_summary(summary: MergeSummary) {
    info!("=== Merge Summary ===");
    info!(
        "Files merged: {} of {} supplied",
        summary.files_merged, summary.files_supplied
    );
    info!("Total rows in output: {}", summary.total_rows);
    info!("Total runtime: {:.1}s", summary.total_runtime_secs);
    if summary.files_skipped > 0 {
        warn!("Files that could not be read: {}", summary.files_skipped);
    }
}
