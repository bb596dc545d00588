//! Implicit concatenation: whitespace as the concatenation operator.
//!
//! `"a" "b"` and `x y` concatenate. Whitespace also separates everything
//! else, so this recognizer has to rule out every other reading of the gap:
//!
//! - end of line or input (the statement ends);
//! - a binary or postfix operator (`x < y`, `x . y`, `x ? a : b`);
//! - a sign followed by space or doubled (`x + y`, `x ++`), which is an
//!   arithmetic or increment operator rather than a unary sign;
//! - a verbal operator (`x and y`, `x contains y`).
//!
//! The token is the whitespace run; the operand after it is left for the
//! grammar.

use ahk_lexer_core::{is_ident_char, is_line_terminator, Lexer};

use crate::ident::IdentBuf;
use crate::keywords::{is_operator_keyword, starts_operator_keyword, OPERATOR_WORD_CAPACITY};

/// First characters of binary/postfix operators. `+` and `-` are absent:
/// they may also be unary signs and get their own rule.
#[inline]
pub fn is_operator_start(c: char) -> bool {
    matches!(
        c,
        '?' | '*' | '/' | '<' | '>' | '=' | '^' | '|' | '&' | '!' | '~' | ':' | '.' | ','
    )
}

/// Characters that can begin an operand.
#[inline]
pub fn is_expression_start(c: char) -> bool {
    is_ident_char(c) || matches!(c, '"' | '\'' | '(' | '+' | '-' | '%')
}

/// Recognize whitespace that concatenates its neighbours. Expects the commit
/// point to be marked at entry.
///
/// May commit and still decline: before a sign, the whitespace is committed
/// so the sign is never re-read as part of a concatenation.
pub fn implicit_concatenation<L: Lexer>(lexer: &mut L) -> bool {
    if !lexer.eat_horizontal_ws(false) {
        return false;
    }

    let next = lexer.lookahead();
    if lexer.is_eof() || is_line_terminator(next) || is_operator_start(next) {
        return false;
    }

    match next {
        '+' | '-' => {
            lexer.mark_end();
            lexer.advance(false);
            // `x + y` and `x ++` are operators; only a sign glued to its
            // operand (`x -y`) is unary.
            if lexer.eat_horizontal_ws(false) || lexer.lookahead() == next || lexer.is_eof() {
                return false;
            }
            is_expression_start(lexer.lookahead())
        }
        c if is_expression_start(c) => {
            lexer.mark_end();
            if starts_operator_keyword(c) {
                let word = IdentBuf::<OPERATOR_WORD_CAPACITY>::capture(lexer);
                return !word.folded().is_some_and(is_operator_keyword);
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
