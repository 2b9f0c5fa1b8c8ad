//! Command-line interface for etabs.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// File to reflow, or `-` for stdin/stdout. The driver insists on
    /// exactly one input; extra or missing inputs produce the usage text.
    pub inputs: Vec<PathBuf>,

    /// Inter-column gap override
    pub gap: Option<usize>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Output to stdout instead of replacing the file
    pub stdout: bool,

    /// Silent mode (no output)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("etabs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Re-align whitespace-delimited text columns (elastic tabstops)")
        .arg(
            Arg::new("inputs")
                .help("File to reflow, or - for stdin/stdout")
                .value_name("FILE")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("gap")
                .short('g')
                .long("gap")
                .help("Spaces between an aligned column and the next [default: 2]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Output to stdout instead of replacing the file in place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no status output, for editor integration)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config discovery and overrides)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        inputs: matches
            .get_many::<PathBuf>("inputs")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        gap: matches.get_one::<usize>("gap").copied(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        stdout: matches.get_flag("stdout"),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}
