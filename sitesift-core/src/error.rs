use sitesift_scanner::ScanError;
use thiserror::Error;

/// Failures that end the whole run, as opposed to per-site fetch errors.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to write report: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scanner setup failed: {0}")]
    Scanner(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
