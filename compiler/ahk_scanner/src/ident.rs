//! Identifier scanning with bounded, case-folded capture.
//!
//! [`IdentBuf`] consumes a maximal run of identifier characters and keeps at
//! most `N` of them, ASCII-lowercased, in a stack array. The full length is
//! always recorded, so an identifier that overflowed the buffer can never
//! compare equal to a keyword that happens to be its prefix.

use ahk_lexer_core::{is_ident_char, Lexer};

/// Case-folded identifier capture of capacity `N` bytes.
#[derive(Clone, Copy, Debug)]
pub struct IdentBuf<const N: usize> {
    folded: [u8; N],
    /// Full identifier length in characters, including any overflow.
    len: usize,
}

impl<const N: usize> IdentBuf<N> {
    /// Consume an identifier (possibly empty) and capture its prefix.
    pub fn capture<L: Lexer>(lexer: &mut L) -> Self {
        let mut buf = Self {
            folded: [0; N],
            len: 0,
        };
        loop {
            let c = lexer.lookahead();
            if !is_ident_char(c) {
                break;
            }
            if buf.len < N {
                // Identifier chars are ASCII.
                if let Ok(byte) = u8::try_from(c) {
                    buf.folded[buf.len] = byte.to_ascii_lowercase();
                }
            }
            buf.len += 1;
            lexer.advance(false);
        }
        buf
    }

    /// Full length of the identifier, including characters that did not fit.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the identifier was longer than the buffer.
    pub fn is_truncated(&self) -> bool {
        self.len > N
    }

    /// The lowercased identifier, or `None` if it overflowed the buffer.
    pub fn folded(&self) -> Option<&str> {
        if self.is_truncated() {
            return None;
        }
        std::str::from_utf8(&self.folded[..self.len]).ok()
    }

    /// ASCII case-insensitive comparison. Always `false` when truncated.
    pub fn eq_ignore_ascii_case(&self, keyword: &str) -> bool {
        self.folded()
            .is_some_and(|word| word.eq_ignore_ascii_case(keyword))
    }
}

/// Consume an identifier without capturing it. Returns its length.
pub fn skip_identifier<L: Lexer>(lexer: &mut L) -> u32 {
    lexer.eat_while(false, is_ident_char)
}

/// Consume `keyword.len()` characters if they spell `keyword`
/// case-insensitively. Stops at the first mismatch and returns `false`;
/// whatever matched so far stays consumed.
pub fn eat_keyword_prefix<L: Lexer>(lexer: &mut L, keyword: &str) -> bool {
    for expected in keyword.chars() {
        if !lexer.lookahead().eq_ignore_ascii_case(&expected) {
            return false;
        }
        lexer.advance(false);
    }
    true
}

#[cfg(test)]
mod tests;
