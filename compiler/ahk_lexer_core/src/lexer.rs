//! The cursor contract between a parsing host and the recognizers.

use crate::char_class::{is_horizontal_ws, is_whitespace};

/// Forward-only view over the input, owned by the host.
///
/// Every advance is speculative. If a recognizer accepts, the token ends at
/// the last [`mark_end`](Self::mark_end) (or at the current position when
/// nothing was marked). If it declines, the host discards whatever the
/// recognizer advanced over. There is no way to seek backwards.
///
/// # Skipped characters
///
/// `advance(true)` marks the character as insignificant whitespace. While
/// nothing has been consumed with `advance(false)` and no end is marked,
/// skipped characters move the token start forward instead of becoming part
/// of the token.
pub trait Lexer {
    /// Current code point, or `'\0'` at end of input.
    fn lookahead(&self) -> char;

    /// Move past the current code point. No-op at end of input.
    fn advance(&mut self, skip: bool);

    /// Declare that an accepted token ends at the current position.
    fn mark_end(&mut self);

    /// Returns `true` once the input is exhausted.
    fn is_eof(&self) -> bool;

    /// Advance while `pred` holds for the lookahead. Returns the number of
    /// code points advanced over.
    ///
    /// # Contract
    ///
    /// `pred('\0')` must return `false`, otherwise the loop never sees the
    /// end of input.
    #[inline]
    fn eat_while(&mut self, skip: bool, pred: impl Fn(char) -> bool) -> u32
    where
        Self: Sized,
    {
        let mut count = 0;
        while pred(self.lookahead()) {
            self.advance(skip);
            count += 1;
        }
        count
    }

    /// Skip spaces and tabs. Returns `true` if anything was skipped.
    #[inline]
    fn eat_horizontal_ws(&mut self, skip: bool) -> bool
    where
        Self: Sized,
    {
        self.eat_while(skip, is_horizontal_ws) > 0
    }

    /// Skip spaces, tabs and line breaks.
    #[inline]
    fn eat_whitespace(&mut self, skip: bool)
    where
        Self: Sized,
    {
        self.eat_while(skip, is_whitespace);
    }

    /// Advance (without skipping) until the lookahead is `(` or `)`, or the
    /// input ends.
    ///
    /// Hosts with random access to their buffer can override this with a
    /// vectorised search; the result must be identical.
    fn skip_to_paren(&mut self) {
        while !self.is_eof() && !matches!(self.lookahead(), '(' | ')') {
            self.advance(false);
        }
    }
}
