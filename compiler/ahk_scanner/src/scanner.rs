//! Scanner lifecycle as seen by an incremental parsing host.
//!
//! The host creates one scanner per parse session, resets it between
//! independent parses, and snapshots it (serialize/deserialize) whenever it
//! may need to re-lex from an earlier position. Every recognition here is a
//! pure function of the input and the valid-symbol set, so there is nothing
//! to snapshot: serialization writes zero bytes.

use ahk_lexer_core::Lexer;
use tracing::debug;

use crate::dispatch;
use crate::token_kind::{TokenKind, ValidSymbols};

/// Size of the buffer hosts provide to [`ExternalScanner::serialize`].
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Per-session scanner handle. Carries no state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExternalScanner;

impl ExternalScanner {
    /// Create the scanner for a parse session.
    pub fn new() -> Self {
        ExternalScanner
    }

    /// Prepare for an unrelated parse.
    pub fn reset(&mut self) {}

    /// Write the scanner state into the host buffer, returning the number of bytes
    /// written. Always zero.
    pub fn serialize(&self, _buf: &mut [u8]) -> usize {
        0
    }

    /// Restore state written by [`serialize`](Self::serialize).
    ///
    /// Hosts pass an empty slice to mean "initial state". Non-empty input
    /// cannot come from this scanner and is ignored.
    pub fn deserialize(&mut self, state: &[u8]) {
        if !state.is_empty() {
            debug!(
                len = state.len(),
                "ignoring external scanner state; the scanner is stateless"
            );
        }
    }

    /// Resolve the ambiguity at the cursor. See [`dispatch::scan`].
    pub fn scan<L: Lexer + Clone>(&mut self, lexer: &mut L, valid: ValidSymbols) -> Option<TokenKind> {
        dispatch::scan(lexer, valid)
    }
}
