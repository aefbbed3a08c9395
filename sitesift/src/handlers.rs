use anyhow::{Context, Result};
use clap::ArgMatches;
use sitesift_core::report::{
    render_site_block, render_summary, ReportWriter, DEFAULT_REPORT_FILE,
};
use sitesift_core::scan::{execute_scan, ScanOptions, ScanProgressCallback, ScanResultCallback};
use sitesift_scanner::scanner::DEFAULT_TIMEOUT_SECS;
use sitesift_scanner::ScanResult;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, Level};

pub const SITES_PROMPT: &str =
    "Enter websites separated by commas (e.g. example.com, python.org): ";

// Helper functions for scan handler

/// Trim a site token and default it to https when it carries no scheme.
/// No other validation happens here; bad hosts fail at fetch time.
pub fn normalize_target(token: &str) -> String {
    let token = token.trim();
    if token.starts_with("http://") || token.starts_with("https://") {
        token.to_string()
    } else {
        format!("https://{}", token)
    }
}

/// Split a comma-delimited site list into normalized targets, in input order.
pub fn split_targets(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(normalize_target)
        .collect()
}

/// Read one line of sites from `reader`, without the line terminator.
pub fn read_sites_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_for_sites() -> io::Result<String> {
    print!("{}", SITES_PROMPT);
    io::stdout().flush()?;
    read_sites_line(&mut io::stdin().lock())
}

/// Expand `~` in the report path.
pub fn resolve_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::ERROR };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Settings resolved from the command line, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// `None` means the sites are read from stdin.
    pub sites: Option<String>,
    pub report_path: PathBuf,
    pub timeout_secs: u64,
    pub show_progress: bool,
}

impl ScanSettings {
    pub fn from_args(args: &ArgMatches) -> Self {
        let output = args
            .get_one::<String>("output")
            .map(String::as_str)
            .unwrap_or(DEFAULT_REPORT_FILE);

        Self {
            sites: args.get_one::<String>("sites").cloned(),
            report_path: resolve_output_path(output),
            timeout_secs: *args
                .get_one::<u64>("timeout")
                .unwrap_or(&DEFAULT_TIMEOUT_SECS),
            show_progress: !args.get_flag("quiet"),
        }
    }

    pub fn scan_options(&self, targets: Vec<String>) -> ScanOptions {
        ScanOptions {
            targets,
            timeout_secs: self.timeout_secs,
            show_progress: self.show_progress,
        }
    }
}

pub async fn handle_scan(args: &ArgMatches) -> Result<()> {
    let settings = ScanSettings::from_args(args);

    let raw_sites = match settings.sites {
        Some(ref sites) => sites.clone(),
        None => prompt_for_sites().context("Failed to read sites from stdin")?,
    };
    let targets = split_targets(&raw_sites);
    debug!("Parsed {} target(s): {:?}", targets.len(), targets);

    let report_path = &settings.report_path;
    let mut report = ReportWriter::create(report_path)
        .with_context(|| format!("Failed to create report {}", report_path.display()))?;

    let progress_callback: ScanProgressCallback = Arc::new(|url: &str| {
        println!("\n🔍 Scanning: {}", url);
    });
    let result_callback: ScanResultCallback = Arc::new(|result: &ScanResult| {
        print!("{}", render_site_block(result));
    });

    let summary = execute_scan(
        settings.scan_options(targets),
        &mut report,
        Some(progress_callback),
        Some(result_callback),
    )
    .await?;
    report.finish()?;

    print!("{}", render_summary(&summary, report_path));
    Ok(())
}
