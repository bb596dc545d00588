//! Convenience entry point for hosts holding a [`SourceBuffer`].

use ahk_lexer_core::{SourceBuffer, Span};

use crate::dispatch::scan;
use crate::token_kind::{TokenKind, ValidSymbols};

/// An accepted external token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedToken {
    pub kind: TokenKind,
    /// Byte range the host should treat as the token.
    pub span: Span,
}

/// Dispatch at byte `offset` of `buf`.
///
/// Returns `None` when nothing matches, or when `offset` is not a valid
/// cursor position (see [`SourceBuffer::cursor_at`]).
pub fn scan_at(buf: &SourceBuffer, offset: u32, valid: ValidSymbols) -> Option<ScannedToken> {
    let mut cursor = buf.cursor_at(offset)?;
    let kind = scan(&mut cursor, valid)?;
    Some(ScannedToken {
        kind,
        span: cursor.token_span(),
    })
}
