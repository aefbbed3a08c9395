use crate::inspector::Inspection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of scanning one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    Safe,
    Suspicious,
    Error,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Safe => "Safe",
            ScanStatus::Suspicious => "Suspicious",
            ScanStatus::Error => "Error",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub url: String,
    pub title: Option<String>,
    pub status: ScanStatus,
    pub matched_links: Vec<String>,
    pub matched_scripts: Vec<String>,
    pub error: Option<String>,
}

impl ScanResult {
    pub fn from_inspection(url: String, inspection: Inspection) -> Self {
        let status = if inspection.is_suspicious() {
            ScanStatus::Suspicious
        } else {
            ScanStatus::Safe
        };

        Self {
            url,
            title: inspection.title,
            status,
            matched_links: inspection.matched_links,
            matched_scripts: inspection.matched_scripts,
            error: None,
        }
    }

    pub fn with_error(url: String, error: String) -> Self {
        Self {
            url,
            title: None,
            status: ScanStatus::Error,
            matched_links: Vec::new(),
            matched_scripts: Vec::new(),
            error: Some(error),
        }
    }
}
