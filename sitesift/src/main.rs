use colored::Colorize;
use sitesift::commands::command_argument_builder;
use sitesift::handlers::{handle_scan, init_tracing};
use sitesift_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let matches = cmd.get_matches();

    init_tracing(matches.get_flag("verbose"));

    // Show banner unless --quiet flag is set
    if !matches.get_flag("quiet") {
        print_banner();
    }

    if let Err(e) = handle_scan(&matches).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
