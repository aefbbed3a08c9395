pub mod error;
pub mod inspector;
pub mod result;
pub mod scanner;

pub use error::ScanError;
pub use inspector::{Inspection, SUSPICIOUS_KEYWORDS, inspect};
pub use result::{ScanResult, ScanStatus};
pub use scanner::SiteScanner;
