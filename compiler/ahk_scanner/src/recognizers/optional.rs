//! Optional marker vs. ternary `?`.
//!
//! `Fn(a, b?)` marks `b` optional; `x ? a : b` is a ternary. The marker must
//! be followed by one of `) ] } , :` (whitespace and line breaks allowed in
//! between) or by end of input.

use ahk_lexer_core::Lexer;

/// Characters that may follow an optional marker.
#[inline]
pub fn is_optional_follower(c: char) -> bool {
    matches!(c, ')' | ']' | '}' | ',' | ':')
}

/// Recognize a trailing `?`. On success the token covers the `?` and the
/// whitespace after it.
pub fn optional_marker<L: Lexer>(lexer: &mut L) -> bool {
    if lexer.lookahead() != '?' {
        return false;
    }
    lexer.advance(false);
    lexer.eat_whitespace(true);

    lexer.is_eof() || is_optional_follower(lexer.lookahead())
}
