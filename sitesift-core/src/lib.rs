pub mod error;
pub mod report;
pub mod scan;

pub use error::CoreError;

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
  ___ _ _          _  __ _
 / __(_) |_ ___ __(_)/ _| |_
 \__ \ |  _/ -_|_-< |  _|  _|
 |___/_|\__\___/__/_|_|  \__|
"#;
    println!("{}", banner.bright_cyan().bold());
    println!(
        "  {} {}\n",
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_white(),
        "- lexical screening of links and inline scripts".dimmed()
    );
}
