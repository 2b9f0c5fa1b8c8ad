//! etabs - Elastic-tabstops re-aligner for plain text
//!
//! Re-flows whitespace-delimited columns so that contiguous runs of lines
//! sharing a column line up, padded with spaces to a fixed gap.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod directive;
pub mod error;
pub mod format;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use directive::{find_directive, parse_directive, DirectiveOverrides};
pub use error::Result;
pub use process::{reflow, Outcome};
