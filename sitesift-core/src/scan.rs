use crate::error::Result;
use crate::report::ReportWriter;
use indicatif::{ProgressBar, ProgressStyle};
use sitesift_scanner::{ScanResult, ScanStatus, SiteScanner};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Options for configuring a scan run
pub struct ScanOptions {
    pub targets: Vec<String>,
    pub timeout_secs: u64,
    pub show_progress: bool,
}

/// Callback invoked with each target just before it is fetched
pub type ScanProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback invoked with each result once its row has been written
pub type ScanResultCallback = Arc<dyn Fn(&ScanResult) + Send + Sync>;

/// Per-status tally for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: usize,
    pub safe: usize,
    pub suspicious: usize,
    pub errors: usize,
}

impl ScanSummary {
    pub fn record(&mut self, status: ScanStatus) {
        self.scanned += 1;
        match status {
            ScanStatus::Safe => self.safe += 1,
            ScanStatus::Suspicious => self.suspicious += 1,
            ScanStatus::Error => self.errors += 1,
        }
    }
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching {}...", url));
    pb
}

/// Scan every target in order, writing one report row per target.
///
/// Targets are handled one at a time: a row is written before the next
/// fetch starts. Fetch failures become Error rows; only report I/O or
/// client setup failures end the run early.
pub async fn execute_scan<W: Write>(
    options: ScanOptions,
    report: &mut ReportWriter<W>,
    progress_callback: Option<ScanProgressCallback>,
    result_callback: Option<ScanResultCallback>,
) -> Result<ScanSummary> {
    let ScanOptions {
        targets,
        timeout_secs,
        show_progress,
    } = options;

    let scanner = SiteScanner::with_timeout(timeout_secs)?;
    info!(
        "Scanning {} target(s) with a {}s timeout",
        targets.len(),
        scanner.timeout_secs()
    );

    let mut summary = ScanSummary::default();

    for target in &targets {
        if let Some(ref callback) = progress_callback {
            callback(target.as_str());
        }

        let spinner = show_progress.then(|| fetch_spinner(target));
        let result = scanner.scan(target).await;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        report.append(&result)?;
        summary.record(result.status);

        if let Some(ref callback) = result_callback {
            callback(&result);
        }
    }

    info!(
        "Scan complete: {} rows written ({} suspicious, {} errors)",
        report.rows_written(),
        summary.suspicious,
        summary.errors
    );
    Ok(summary)
}
