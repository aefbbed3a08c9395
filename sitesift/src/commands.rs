use clap::arg;
use sitesift_core::report::DEFAULT_REPORT_FILE;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitesift")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitesift")
        .about("Fetch a list of sites and flag suspicious links and inline scripts")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-s --"sites" <SITES>)
                .required(false)
                .help("Comma-separated sites to scan (prompted for on stdin when omitted)"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Where to write the CSV report (overwritten on every run)")
                .default_value(DEFAULT_REPORT_FILE),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Per-request timeout in seconds")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("10"),
        )
        .arg(
            arg!(-q --"quiet" "Suppress banner and the fetch spinner")
                .required(false),
        )
        .arg(
            arg!(-v --"verbose" "Print debug diagnostics to stderr")
                .required(false),
        )
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
