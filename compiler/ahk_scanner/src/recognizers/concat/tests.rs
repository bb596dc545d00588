use super::super::test_support::{run_at, Outcome};
use super::{implicit_concatenation, is_expression_start, is_operator_start};
use ahk_lexer_core::Span;
use pretty_assertions::assert_eq;

/// Run the recognizer right after the left operand, which is everything
/// before the first `|` in `marked`. The `|` itself is removed.
fn recognize(marked: &str) -> Outcome {
    let split = marked.find('|').expect("test input needs a `|` marker");
    let source = marked.replacen('|', "", 1);
    let offset = u32::try_from(split).expect("fits");
    run_at(|c| implicit_concatenation(c), &source, offset, true)
}

// === Accepted ===

#[test]
fn adjacent_strings() {
    let outcome = recognize(r#""a"| "b""#);
    assert!(outcome.accepted);
    assert_eq!(outcome.span, Span::new(3, 4));
}

#[test]
fn identifiers_and_literals() {
    assert!(recognize("x|  y").accepted);
    assert!(recognize("x|\t'b'").accepted);
    assert!(recognize("x| (y)").accepted);
    assert!(recognize("x| %name%").accepted);
    assert!(recognize("x| 42").accepted);
    assert!(recognize("x| _y").accepted);
}

#[test]
fn token_is_whitespace_only() {
    let outcome = recognize("x|   y");
    assert_eq!(outcome.span, Span::new(1, 4));
    assert_eq!(outcome.committed, Some(4));
}

#[test]
fn glued_sign_is_unary() {
    let outcome = recognize(r#""a"| +b"#);
    assert!(outcome.accepted);
    // The sign belongs to the operand, not to the marker.
    assert_eq!(outcome.span, Span::new(3, 4));
    assert!(recognize("x| -1").accepted);
    assert!(recognize("x| -(y)").accepted);
    assert!(recognize("x| +-y").accepted);
}

// === Declined ===

#[test]
fn requires_whitespace() {
    let outcome = recognize(r#""a"|"b""#);
    assert!(!outcome.accepted);
    assert_eq!(outcome.committed, Some(3));
}

#[test]
fn end_of_line_or_input() {
    assert!(!recognize("x|   \ny").accepted);
    assert!(!recognize("x|  \r\ny").accepted);
    assert!(!recognize("x|   ").accepted);
}

#[test]
fn binary_operators() {
    for op in ["?", "*", "/", "<", ">", "=", "^", "|", "&", "!", "~", ":", ".", ","] {
        let marked = format!("x| {op} y");
        assert!(!recognize(&marked).accepted, "operator {op}");
    }
}

#[test]
fn spaced_sign_is_binary() {
    let outcome = recognize(r#""a"| + "b""#);
    assert!(!outcome.accepted);
    // The whitespace before the sign stays committed.
    assert_eq!(outcome.committed, Some(4));
    assert!(!recognize(r#""a"| + b"#).accepted);
    assert!(!recognize("x| - y").accepted);
}

#[test]
fn doubled_sign_is_increment() {
    assert!(!recognize("x| ++y").accepted);
    assert!(!recognize("x| --y").accepted);
}

#[test]
fn sign_at_end_of_input() {
    assert!(!recognize("x| +").accepted);
}

#[test]
fn sign_before_non_operand() {
    assert!(!recognize("x| +)").accepted);
    assert!(!recognize("x| -\n").accepted);
}

#[test]
fn verbal_operators() {
    for word in ["and", "AND", "not", "Not", "is", "or", "OR", "contains", "Contains"] {
        let marked = format!("x| {word} y");
        let outcome = recognize(&marked);
        assert!(!outcome.accepted, "{word}");
        // The whitespace is still committed.
        assert_eq!(outcome.committed, Some(2), "{word}");
    }
}

#[test]
fn words_prefixed_by_operator_keywords_are_operands() {
    for word in ["andy", "notes", "island", "order", "containsx", "cat", "a", "i"] {
        let marked = format!("x| {word}");
        assert!(recognize(&marked).accepted, "{word}");
    }
}

#[test]
fn unrelated_character_declines() {
    assert!(!recognize("x| ]").accepted);
    assert!(!recognize("x| {").accepted);
    assert!(!recognize("x| ;comment").accepted);
}

// === Classifiers ===

#[test]
fn operator_start_excludes_signs() {
    assert!(!is_operator_start('+'));
    assert!(!is_operator_start('-'));
    assert!(is_operator_start('.'));
}

#[test]
fn expression_start_set() {
    for c in ['a', 'Z', '0', '_', '"', '\'', '(', '+', '-', '%'] {
        assert!(is_expression_start(c), "{c:?}");
    }
    for c in [')', '[', '{', ' ', '\0', '.'] {
        assert!(!is_expression_start(c), "{c:?}");
    }
}
