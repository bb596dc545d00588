//! Host-side building blocks for the AutoHotkey external scanner.
//!
//! The recognizers in `ahk_scanner` never see the source text directly.
//! They talk to the input through the [`Lexer`] capability trait, which
//! mirrors what an incremental parsing host hands to an external scanner:
//! a lookahead code point, a one-character advance, a commit mark and an
//! end-of-input query.
//!
//! This crate provides that trait, the character classes every recognizer
//! shares, and one concrete host: [`SourceBuffer`] plus [`SourceCursor`],
//! a sentinel-terminated buffer and a `Copy` cursor over it.

mod char_class;
mod cursor;
mod lexer;
mod source_buffer;

pub use char_class::{is_horizontal_ws, is_ident_char, is_line_terminator, is_whitespace};
pub use cursor::{SourceCursor, Span};
pub use lexer::Lexer;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
