//! Library half of the `ahk-scan` driver: argument parsing and commands.

pub mod commands;
pub mod config;

pub use commands::run;
pub use config::{parse_args, CliError, Command, ScanConfig};
