// Report output: the CSV file and its console mirror

use crate::error::{CoreError, Result};
use crate::scan::ScanSummary;
use colored::Colorize;
use serde::Serialize;
use sitesift_scanner::{ScanResult, ScanStatus};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_REPORT_FILE: &str = "multi_site_scan_results.csv";

pub const REPORT_HEADER: [&str; 5] = [
    "Website",
    "Title",
    "Status",
    "Suspicious Links",
    "Suspicious Scripts",
];

/// Placeholder for absent titles and for the match cells of error rows.
pub const NOT_AVAILABLE: &str = "N/A";

/// Separator used when a list of matches is flattened into one cell.
pub const LIST_SEPARATOR: &str = "; ";

/// One CSV row, already flattened to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub website: String,
    pub title: String,
    pub status: String,
    pub suspicious_links: String,
    pub suspicious_scripts: String,
}

impl From<&ScanResult> for ReportRow {
    fn from(result: &ScanResult) -> Self {
        let (suspicious_links, suspicious_scripts) = match result.status {
            ScanStatus::Error => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
            _ => (
                result.matched_links.join(LIST_SEPARATOR),
                result.matched_scripts.join(LIST_SEPARATOR),
            ),
        };

        Self {
            website: result.url.clone(),
            title: result
                .title
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            status: result.status.to_string(),
            suspicious_links,
            suspicious_scripts,
        }
    }
}

/// Append-only CSV report. The header goes out on construction; every
/// appended row is flushed before `append` returns.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl ReportWriter<File> {
    /// Create (or truncate) the report file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::from_writer(file)
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(REPORT_HEADER)?;
        writer.flush()?;

        Ok(Self { writer, rows: 0 })
    }

    pub fn append(&mut self, result: &ScanResult) -> Result<()> {
        self.writer.serialize(ReportRow::from(result))?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| CoreError::Io(e.into_error()))
    }
}

fn status_label(status: ScanStatus) -> String {
    match status {
        ScanStatus::Safe => format!("{}", "✅ Safe".green()),
        ScanStatus::Suspicious => format!("{}", "⚠️ Suspicious".red()),
        ScanStatus::Error => format!("{}", "Error".yellow()),
    }
}

/// Console block for one finished site.
pub fn render_site_block(result: &ScanResult) -> String {
    if result.status == ScanStatus::Error {
        let cause = result.error.as_deref().unwrap_or("unknown error");
        return format!(
            "{}\n",
            format!("Error scanning {}: {}", result.url, cause).yellow()
        );
    }

    let mut block = String::new();
    block.push_str(&format!(
        "Title: {}\n",
        result.title.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
    block.push_str(&format!("Status: {}\n", status_label(result.status)));
    block.push_str(&format!("Suspicious Links: {:?}\n", result.matched_links));
    block.push_str(&format!("Suspicious Scripts: {:?}\n", result.matched_scripts));
    block
}

/// Closing lines: the tally and where the report went.
pub fn render_summary(summary: &ScanSummary, report_path: &Path) -> String {
    let mut text = String::new();
    text.push_str(&format!(
        "\n{} scanned: {} safe, {} suspicious, {} errors\n",
        summary.scanned,
        summary.safe.to_string().green(),
        summary.suspicious.to_string().red(),
        summary.errors.to_string().yellow()
    ));
    text.push_str(&format!("📁 Results saved to {}\n", report_path.display()));
    text
}
