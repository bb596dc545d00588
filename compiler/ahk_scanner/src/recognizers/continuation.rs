//! Continuation sections.
//!
//! A continuation section folds several physical lines into one logical
//! line. It opens with `(` alone at the start of a line, optionally
//! followed by options, and closes with `)` at the start of a later line:
//!
//! ```text
//! text := "
//! ( LTrim Join`s Comments
//!     first line
//!     second line
//! )"
//! ```
//!
//! Options recognized on the opening line:
//!
//! | Option | Spellings |
//! |--------|-----------|
//! | join   | `join` followed by any delimiter text (`Join`, `Join,`, ``Join`s``) |
//! | comments | `comments`, `comment`, `com`, `c` |
//! | trim   | `ltrim`, `ltrim0`, `rtrim0` |
//! | raw    | `` ` `` |
//!
//! Any other text on that line means the `(` opens an ordinary
//! parenthesized expression instead.

use ahk_lexer_core::{is_line_terminator, is_whitespace, Lexer};

use crate::ident::{eat_keyword_prefix, IdentBuf};
use crate::keywords::{is_comment_option, is_trim_option, OPTION_WORD_CAPACITY};

/// Recognize the `(` that opens a continuation section. The token is the
/// `(` alone; the options after it are validated but not committed.
pub fn continuation_section_start<L: Lexer>(lexer: &mut L) -> bool {
    lexer.eat_horizontal_ws(true);
    if lexer.is_eof() || !is_line_terminator(lexer.lookahead()) {
        return false;
    }

    lexer.eat_whitespace(true);
    if lexer.lookahead() != '(' {
        return false;
    }
    lexer.advance(false);
    lexer.mark_end();

    lexer.eat_horizontal_ws(false);
    loop {
        match lexer.lookahead() {
            '\n' | '\r' => return true,
            'j' | 'J' => {
                if !eat_keyword_prefix(lexer, "join") {
                    return false;
                }
                // The delimiter is arbitrary text up to the next whitespace.
                lexer.eat_while(false, |c| c != '\0' && !is_whitespace(c));
            }
            'c' | 'C' => {
                if !eat_option_word(lexer, is_comment_option) {
                    return false;
                }
            }
            'l' | 'L' | 'r' | 'R' => {
                if !eat_option_word(lexer, is_trim_option) {
                    return false;
                }
            }
            '`' => lexer.advance(false),
            _ => return false,
        }
        lexer.eat_horizontal_ws(false);
    }
}

/// Consume an identifier and check it against an option vocabulary.
fn eat_option_word<L: Lexer>(lexer: &mut L, accepts: fn(&str) -> bool) -> bool {
    let word = IdentBuf::<OPTION_WORD_CAPACITY>::capture(lexer);
    word.folded().is_some_and(accepts)
}

/// Recognize a line break inside a continuation section. `\r\n` is one
/// break. Indentation on the next line is left alone: it may be part of the
/// section's content.
pub fn continuation_newline<L: Lexer>(lexer: &mut L) -> bool {
    lexer.eat_horizontal_ws(true);
    match lexer.lookahead() {
        '\n' => lexer.advance(false),
        '\r' => {
            lexer.advance(false);
            if lexer.lookahead() == '\n' {
                lexer.advance(false);
            }
        }
        _ => return false,
    }
    lexer.mark_end();
    true
}
