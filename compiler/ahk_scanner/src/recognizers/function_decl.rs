//! Function declaration vs. call followed by a block.
//!
//! `MyFunc(arg)` could start a call statement or a declaration; only what
//! follows the closing paren decides:
//!
//! ```text
//! MyFunc(a, b) {          declaration
//! MyFunc(a, b) => a + b   declaration (fat arrow body)
//! MyFunc(a, b)            call
//! if (x) {                control flow, never a declaration
//! static Name() {         static method, `Name` is the real name
//! ```
//!
//! The paren scan is unbounded, which is why the dispatcher tries this
//! recognizer last.

use ahk_lexer_core::{is_ident_char, Lexer};

use crate::ident::{skip_identifier, IdentBuf};
use crate::keywords::{is_reserved, DECL_NAME_CAPACITY, STORAGE_KEYWORD};

/// Recognize the start of a function declaration. Expects the commit point
/// to be marked at entry; the token is zero-width.
pub fn function_declaration<L: Lexer>(lexer: &mut L) -> bool {
    lexer.eat_whitespace(true);

    if !is_ident_char(lexer.lookahead()) {
        return false;
    }
    let name = IdentBuf::<DECL_NAME_CAPACITY>::capture(lexer);

    if name.eq_ignore_ascii_case(STORAGE_KEYWORD) {
        // `static` needs a space and then the real name.
        if !lexer.eat_horizontal_ws(false) || skip_identifier(lexer) == 0 {
            return false;
        }
    } else if name.folded().is_some_and(is_reserved) {
        return false;
    }

    // `Name (params)` is accepted as well as `Name(params)`.
    lexer.eat_horizontal_ws(false);
    if lexer.lookahead() != '(' {
        return false;
    }
    lexer.advance(false);
    if !skip_balanced_parens(lexer) {
        return false;
    }

    lexer.eat_whitespace(true);
    match lexer.lookahead() {
        '{' => true,
        '=' => {
            lexer.advance(false);
            lexer.lookahead() == '>'
        }
        _ => false,
    }
}

/// Consume up to and including the `)` that closes an already-consumed `(`.
/// Returns `false` if the input ends first.
fn skip_balanced_parens<L: Lexer>(lexer: &mut L) -> bool {
    let mut depth: u32 = 1;
    while depth > 0 {
        lexer.skip_to_paren();
        match lexer.lookahead() {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => return false,
        }
        lexer.advance(false);
    }
    true
}
