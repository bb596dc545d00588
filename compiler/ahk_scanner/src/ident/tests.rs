use super::*;
use ahk_lexer_core::SourceBuffer;

fn capture<const N: usize>(source: &str) -> IdentBuf<N> {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    IdentBuf::<N>::capture(&mut cursor)
}

#[test]
fn captures_and_folds_case() {
    let word = capture::<16>("MsgBox(");
    assert_eq!(word.len(), 6);
    assert_eq!(word.folded(), Some("msgbox"));
    assert!(word.eq_ignore_ascii_case("MSGBOX"));
}

#[test]
fn stops_at_non_identifier_char() {
    let buf = SourceBuffer::new("a_1 b");
    let mut cursor = buf.cursor();
    let word = IdentBuf::<8>::capture(&mut cursor);
    assert_eq!(word.folded(), Some("a_1"));
    assert_eq!(cursor.lookahead(), ' ');
}

#[test]
fn empty_capture() {
    let word = capture::<8>("(x)");
    assert!(word.is_empty());
    assert_eq!(word.folded(), Some(""));
    assert!(!word.eq_ignore_ascii_case("and"));
}

#[test]
fn consumes_whole_identifier_even_when_truncated() {
    let buf = SourceBuffer::new("abcdefghij(");
    let mut cursor = buf.cursor();
    let word = IdentBuf::<4>::capture(&mut cursor);
    assert_eq!(word.len(), 10);
    assert!(word.is_truncated());
    assert_eq!(word.folded(), None);
    assert_eq!(cursor.lookahead(), '(');
}

// === Capacity Boundary ===

#[test]
fn keyword_of_exactly_capacity_length_matches() {
    let word = capture::<8>("Contains x");
    assert!(!word.is_truncated());
    assert!(word.eq_ignore_ascii_case("contains"));
}

#[test]
fn one_char_past_capacity_never_matches() {
    // The first 8 bytes equal "contains"; the 9th must still break the match.
    let word = capture::<8>("containsx");
    assert!(word.is_truncated());
    assert!(!word.eq_ignore_ascii_case("contains"));
}

#[test]
fn longer_identifier_does_not_match_its_prefix_keyword() {
    let word = capture::<8>("andy");
    assert!(!word.eq_ignore_ascii_case("and"));
    let word = capture::<4>("andy");
    assert!(!word.is_truncated());
    assert!(!word.eq_ignore_ascii_case("and"));
}

// === Helpers ===

#[test]
fn skip_identifier_returns_length() {
    let buf = SourceBuffer::new("Name2 x");
    let mut cursor = buf.cursor();
    assert_eq!(skip_identifier(&mut cursor), 5);
    assert_eq!(skip_identifier(&mut cursor), 0);
}

#[test]
fn keyword_prefix_is_case_insensitive() {
    let buf = SourceBuffer::new("JOIN`n");
    let mut cursor = buf.cursor();
    assert!(eat_keyword_prefix(&mut cursor, "join"));
    assert_eq!(cursor.lookahead(), '`');
}

#[test]
fn keyword_prefix_mismatch() {
    let buf = SourceBuffer::new("jump");
    let mut cursor = buf.cursor();
    assert!(!eat_keyword_prefix(&mut cursor, "join"));
    assert_eq!(cursor.pos(), 1);
}
