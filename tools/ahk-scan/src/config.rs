//! Command-line configuration.
//!
//! Arguments are parsed by hand into a [`ScanConfig`]:
//!
//! ```text
//! ahk-scan probe <file> --at=<offset> [--valid=<kinds>]
//! ahk-scan sweep <file> [--valid=<kinds>]
//! ahk-scan kinds
//! ```
//!
//! `<kinds>` is a comma-separated list of token kind names, or `all`.

use std::io;
use std::path::PathBuf;

use ahk_scanner::{ParseTokenKindError, TokenKind, ValidSymbols};
use thiserror::Error;

/// What to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Dispatch once at a byte offset.
    Probe { path: PathBuf, offset: u32 },
    /// Dispatch at every character boundary of the script.
    Sweep { path: PathBuf },
    /// List the token table.
    Kinds,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    pub command: Command,
    /// Kinds the scanner may report. Defaults to every kind.
    pub valid: ValidSymbols,
}

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    NotUtf8 { path: PathBuf },

    #[error("invalid offset '{0}': expected a byte offset")]
    InvalidOffset(String),

    #[error("offset {offset} is not a character boundary of the script ({len} bytes)")]
    OffsetOutOfRange { offset: u32, len: u32 },

    #[error(transparent)]
    UnknownKind(#[from] ParseTokenKindError),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<ScanConfig, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Missing("command"));
    };

    let mut path: Option<PathBuf> = None;
    let mut offset: Option<u32> = None;
    let mut valid = ValidSymbols::all();

    for arg in rest {
        if let Some(value) = arg.strip_prefix("--at=") {
            offset = Some(
                value
                    .parse()
                    .map_err(|_| CliError::InvalidOffset(value.to_string()))?,
            );
        } else if let Some(value) = arg.strip_prefix("--valid=") {
            valid = parse_valid(value)?;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }

    let command = match command.as_str() {
        "probe" => Command::Probe {
            path: path.ok_or(CliError::Missing("file path"))?,
            offset: offset.ok_or(CliError::Missing("--at=<offset>"))?,
        },
        "sweep" => Command::Sweep {
            path: path.ok_or(CliError::Missing("file path"))?,
        },
        "kinds" => Command::Kinds,
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };

    Ok(ScanConfig { command, valid })
}

/// Parse a `--valid` list.
pub fn parse_valid(list: &str) -> Result<ValidSymbols, CliError> {
    if list.eq_ignore_ascii_case("all") {
        return Ok(ValidSymbols::all());
    }
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<TokenKind>().map_err(CliError::from))
        .collect()
}
