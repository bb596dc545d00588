//! Omitted positional argument: `Fn(a, , c)`.
//!
//! A trailing comma (`MsgBox("Hello",)`) means the same as no comma at all,
//! so it is not tracked; only a comma that directly follows another
//! argument separator yields an empty-argument marker. The grammar asks for
//! this token only in that position.

use ahk_lexer_core::Lexer;

/// Recognize the gap before a `,`. The comma itself is left for the grammar;
/// the token is zero-width.
pub fn empty_argument<L: Lexer>(lexer: &mut L) -> bool {
    lexer.eat_whitespace(true);
    lexer.lookahead() == ','
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run_at;
    use super::empty_argument;
    use ahk_lexer_core::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn comma_after_separator() {
        // Positioned right after the first comma of `Fn(a, , c)`.
        let outcome = run_at(|c| empty_argument(c), "Fn(a, , c)", 5, true);
        assert!(outcome.accepted);
        assert_eq!(outcome.span, Span::new(5, 5));
        assert_eq!(outcome.pos, 6);
    }

    #[test]
    fn comma_on_next_line() {
        let outcome = run_at(|c| empty_argument(c), "Fn(a,\n  , c)", 5, true);
        assert!(outcome.accepted);
        assert!(outcome.span.is_empty());
    }

    #[test]
    fn argument_present_declines() {
        let outcome = run_at(|c| empty_argument(c), "Fn(a, b)", 5, true);
        assert!(!outcome.accepted);
        assert_eq!(outcome.committed, Some(5));
    }

    #[test]
    fn closing_paren_declines() {
        assert!(!run_at(|c| empty_argument(c), "Fn(a, )", 5, true).accepted);
    }

    #[test]
    fn zero_width_without_entry_mark() {
        let outcome = run_at(|c| empty_argument(c), "  ,", 0, false);
        assert!(outcome.accepted);
        assert_eq!(outcome.span, Span::new(2, 2));
    }
}
