//! The six recognizers, one per ambiguity.
//!
//! Each is a free function over a [`Lexer`](ahk_lexer_core::Lexer) that
//! returns `true` when its interpretation applies. A `false` verdict is not
//! an error: the host simply tries another production.
//!
//! Recognizers never allocate and keep no state between calls. The ones the
//! dispatcher commits on entry (empty argument, implicit concatenation,
//! function declaration) rely on that mark; called directly, the caller is
//! responsible for it.

mod concat;
mod continuation;
mod empty_arg;
mod function_decl;
mod optional;

pub use concat::{implicit_concatenation, is_expression_start, is_operator_start};
pub use continuation::{continuation_newline, continuation_section_start};
pub use empty_arg::empty_argument;
pub use function_decl::function_declaration;
pub use optional::{is_optional_follower, optional_marker};

#[cfg(test)]
mod test_support;
