//! Priority-ordered dispatch over the valid-symbol set.
//!
//! The host calls [`scan`] wherever the grammar can accept an external
//! token. Recognizers are tried in a fixed order, each only if its kind is
//! valid, and the first one that accepts wins:
//!
//! 1. optional marker
//! 2. empty argument
//! 3. implicit concatenation
//! 4. continuation section start
//! 5. continuation newline
//! 6. function declaration (unbounded paren scan, broadest fallthrough)
//!
//! # Speculation
//!
//! Every attempt runs on a copy of the host cursor taken at the call
//! position. An accepted attempt replaces the host cursor; a declined one
//! is dropped, so the next recognizer starts from exactly where the first
//! did. Recognizers themselves never rewind.

use ahk_lexer_core::Lexer;
use tracing::trace;

use crate::recognizers::{
    continuation_newline, continuation_section_start, empty_argument, function_declaration,
    implicit_concatenation, optional_marker,
};
use crate::token_kind::{TokenKind, ValidSymbols};

/// One row of the dispatch table.
pub struct Recognizer<L> {
    /// Kind reported on acceptance.
    pub kind: TokenKind,
    /// Mark the commit point before running, making the token start
    /// zero-width unless the recognizer marks again.
    pub commit_on_entry: bool,
    /// The recognizer itself.
    pub recognize: fn(&mut L) -> bool,
}

/// The dispatch table, in priority order.
pub fn recognizers<L: Lexer>() -> [Recognizer<L>; TokenKind::COUNT] {
    [
        Recognizer {
            kind: TokenKind::OptionalMarker,
            commit_on_entry: false,
            recognize: optional_marker::<L>,
        },
        Recognizer {
            kind: TokenKind::EmptyArg,
            commit_on_entry: true,
            recognize: empty_argument::<L>,
        },
        Recognizer {
            kind: TokenKind::ImplicitConcatMarker,
            commit_on_entry: true,
            recognize: implicit_concatenation::<L>,
        },
        Recognizer {
            kind: TokenKind::ContinuationSectionStart,
            commit_on_entry: false,
            recognize: continuation_section_start::<L>,
        },
        Recognizer {
            kind: TokenKind::ContinuationNewline,
            commit_on_entry: false,
            recognize: continuation_newline::<L>,
        },
        Recognizer {
            kind: TokenKind::FunctionDefMarker,
            commit_on_entry: true,
            recognize: function_declaration::<L>,
        },
    ]
}

/// Run the recognizers allowed by `valid` at the cursor position.
///
/// Returns the accepted kind, with `lexer` advanced to the accepting
/// attempt's state. Returns `None` with `lexer` untouched otherwise.
pub fn scan<L: Lexer + Clone>(lexer: &mut L, valid: ValidSymbols) -> Option<TokenKind> {
    for entry in recognizers::<L>() {
        if !valid.contains_kind(entry.kind) {
            continue;
        }

        let mut attempt = lexer.clone();
        if entry.commit_on_entry {
            attempt.mark_end();
        }
        let accepted = (entry.recognize)(&mut attempt);
        trace!(kind = entry.kind.name(), accepted, "external scanner attempt");

        if accepted {
            *lexer = attempt;
            return Some(entry.kind);
        }
    }
    None
}
