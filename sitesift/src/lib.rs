pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use commands::command_argument_builder;
pub use handlers::{ScanSettings, normalize_target, read_sites_line, resolve_output_path, split_targets};
