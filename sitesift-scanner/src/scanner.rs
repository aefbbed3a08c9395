use crate::error::{Result, ScanError};
use crate::inspector::inspect;
use crate::result::ScanResult;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches one page per call and screens it.
pub struct SiteScanner {
    client: Client,
    timeout_secs: u64,
}

impl SiteScanner {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        // No custom headers; redirects follow the client default.
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ScanError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// GET `url` and return the body text.
    ///
    /// Any HTTP status counts as success; only transport failures, timeouts
    /// and unparseable URLs are errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("Fetching {}", parsed);
        let start = Instant::now();
        let response = self.client.get(parsed).send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;

        debug!(
            "{} answered {} ({} bytes) in {:?}",
            url,
            status_code,
            body.len(),
            start.elapsed()
        );
        Ok(body)
    }

    /// Scan one site. Fetch failures are folded into an Error result so the
    /// caller can keep going.
    pub async fn scan(&self, url: &str) -> ScanResult {
        match self.fetch(url).await {
            Ok(body) => {
                let result = ScanResult::from_inspection(url.to_string(), inspect(&body));
                info!("{} scanned: {}", url, result.status);
                result
            }
            Err(e) => {
                warn!("Scan error for {}: {}", url, e);
                ScanResult::with_error(url.to_string(), e.to_string())
            }
        }
    }
}
