//! Command implementations.
//!
//! Results go to `out`; encoding warnings go to `diag`. Both are plain
//! writers so the commands can be exercised without a terminal.

use std::io::Write;
use std::path::Path;

use ahk_lexer_core::{EncodingIssueKind, SourceBuffer};
use ahk_scanner::{scan_at, TokenKind, ValidSymbols};
use tracing::debug;

use crate::config::{CliError, Command, ScanConfig};

/// Execute a parsed command line.
pub fn run(config: &ScanConfig, out: &mut impl Write, diag: &mut impl Write) -> Result<(), CliError> {
    match &config.command {
        Command::Probe { path, offset } => {
            let buf = load(path, diag)?;
            probe(&buf, *offset, config.valid, out)
        }
        Command::Sweep { path } => {
            let buf = load(path, diag)?;
            sweep(&buf, config.valid, out)
        }
        Command::Kinds => kinds(out),
    }
}

/// Read a script into a scanner buffer, reporting encoding issues.
pub fn load(path: &Path, diag: &mut impl Write) -> Result<SourceBuffer, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| CliError::NotUtf8 {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded script");

    let buf = SourceBuffer::new(&text);
    for issue in buf.encoding_issues() {
        let what = match issue.kind {
            EncodingIssueKind::InteriorNull => "null byte",
        };
        writeln!(
            diag,
            "warning: {}: {what} at byte {} reads as end of line",
            path.display(),
            issue.pos
        )?;
    }
    Ok(buf)
}

/// Dispatch once at `offset`.
pub fn probe(
    buf: &SourceBuffer,
    offset: u32,
    valid: ValidSymbols,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if buf.cursor_at(offset).is_none() {
        return Err(CliError::OffsetOutOfRange {
            offset,
            len: buf.len(),
        });
    }
    match scan_at(buf, offset, valid) {
        Some(token) => writeln!(out, "{} @ {}", token.kind, token.span)?,
        None => writeln!(out, "no external token at {offset}")?,
    }
    Ok(())
}

/// Dispatch at every character boundary and list the accepted tokens.
pub fn sweep(buf: &SourceBuffer, valid: ValidSymbols, out: &mut impl Write) -> Result<(), CliError> {
    let mut counts = [0usize; TokenKind::COUNT];
    for offset in buf.content_start()..=buf.len() {
        if !buf.is_char_boundary(offset) {
            continue;
        }
        if let Some(token) = scan_at(buf, offset, valid) {
            counts[token.kind.index()] += 1;
            writeln!(out, "{offset:>6}  {:<26} {}", token.kind, token.span)?;
        }
    }

    let total: usize = counts.iter().sum();
    writeln!(out, "{total} external tokens")?;
    for kind in TokenKind::ALL {
        let count = counts[kind.index()];
        if count > 0 {
            writeln!(out, "  {kind}: {count}")?;
        }
    }
    Ok(())
}

/// List the token table in index order.
pub fn kinds(out: &mut impl Write) -> Result<(), CliError> {
    for kind in TokenKind::ALL {
        writeln!(out, "{} {kind}", kind.index())?;
    }
    Ok(())
}
