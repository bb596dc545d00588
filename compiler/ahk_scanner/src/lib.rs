//! External scanner for the AutoHotkey grammar.
//!
//! AutoHotkey's surface syntax cannot be decided by a context-free grammar
//! at the point a token begins. `?` may mark an optional parameter or start
//! a ternary; a space may concatenate two strings or merely separate
//! tokens; `Name(...)` may be a call or the head of a declaration. At each
//! such point the grammar asks this crate which reading applies.
//!
//! # Architecture
//!
//! ```text
//! host parser ──valid kinds──▶ dispatch::scan ──▶ recognizers (in priority order)
//!      ▲                            │                    │
//!      └────── TokenKind + span ◀───┘          Lexer (lookahead/advance/mark_end)
//! ```
//!
//! - [`recognizers`]: one free function per ambiguity.
//! - [`dispatch`]: the ordered `(kind, recognizer)` table and [`scan`].
//! - [`ExternalScanner`]: create/reset/serialize/deserialize hooks. The
//!   scanner is stateless, so these do nothing.
//! - [`keywords`] and [`ident`]: allocation-free, case-insensitive keyword
//!   matching.
//!
//! The crate never reports errors. A recognizer that does not match simply
//! declines, and the host tries another production.

pub mod dispatch;
mod host;
pub mod ident;
pub mod keywords;
pub mod recognizers;
mod scanner;
mod token_kind;

pub use dispatch::{recognizers, scan, Recognizer};
pub use host::{scan_at, ScannedToken};
pub use scanner::{ExternalScanner, SERIALIZATION_BUFFER_SIZE};
pub use token_kind::{ParseTokenKindError, TokenKind, ValidSymbols};
