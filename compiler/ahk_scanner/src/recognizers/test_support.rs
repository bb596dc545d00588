//! Shared helpers for recognizer tests.

use ahk_lexer_core::{Lexer, SourceBuffer, SourceCursor, Span};

/// What a recognizer left behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Outcome {
    pub accepted: bool,
    /// Token span as the host would see it.
    pub span: Span,
    /// Last `mark_end`, if any.
    pub committed: Option<u32>,
    /// How far the recognizer read.
    pub pos: u32,
}

/// Run `recognizer` at byte `offset` of `source`, optionally marking the
/// commit point first the way the dispatcher does.
pub(super) fn run_at(
    recognizer: impl FnOnce(&mut SourceCursor<'_>) -> bool,
    source: &str,
    offset: u32,
    commit_on_entry: bool,
) -> Outcome {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf
        .cursor_at(offset)
        .expect("test offset must be a char boundary");
    if commit_on_entry {
        cursor.mark_end();
    }
    let accepted = recognizer(&mut cursor);
    Outcome {
        accepted,
        span: cursor.token_span(),
        committed: cursor.committed_end(),
        pos: cursor.pos(),
    }
}

/// Byte offset of the first occurrence of `needle`.
pub(super) fn offset_of(source: &str, needle: &str) -> u32 {
    let pos = source.find(needle).expect("needle must occur in source");
    u32::try_from(pos).expect("test source fits in u32")
}
