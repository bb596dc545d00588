//! Character classes shared by every recognizer.
//!
//! Identifiers in the positions the scanner inspects are ASCII-only, so
//! every predicate here answers `false` for non-ASCII code points.
//!
//! All predicates return `false` for `'\0'` except [`is_line_terminator`].
//! The cursor reports `'\0'` at end of input, which lets `eat_while` loops
//! terminate without a separate EOF check.

/// `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Space or tab.
#[inline]
pub fn is_horizontal_ws(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Horizontal whitespace plus CR and LF.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// CR, LF, or the `'\0'` reported at end of input.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\0')
}
