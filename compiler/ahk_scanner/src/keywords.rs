//! Keyword vocabulary consulted by the recognizers.
//!
//! All lookups take text already lowercased by
//! [`IdentBuf`](crate::ident::IdentBuf). AutoHotkey keywords are
//! case-insensitive, so `IF`, `If` and `if` are the same word.
//!
//! # Reserved Keywords
//!
//! A function declaration can never start with a control-flow or verbal
//! operator keyword: `if (x) {` is a statement with a parenthesized
//! condition, not a function named `if`. The lookup buckets by length
//! first (all reserved words are 2-8 chars).
//!
//! # Storage Keyword
//!
//! `static` precedes the real name of a static method:
//! `static Name(args) { ... }`.

/// Capture capacity for function-declaration names.
pub const DECL_NAME_CAPACITY: usize = 16;

/// Capture capacity for the verbal-operator guard in implicit
/// concatenation. Exactly fits the longest operator keyword.
pub const OPERATOR_WORD_CAPACITY: usize = 8;

/// Capture capacity for continuation-section options.
pub const OPTION_WORD_CAPACITY: usize = 8;

const _: () = assert!("contains".len() == OPERATOR_WORD_CAPACITY);
const _: () = assert!("comments".len() <= OPTION_WORD_CAPACITY);

/// Marks a static declaration; the function name follows it.
pub const STORAGE_KEYWORD: &str = "static";

/// Words that can never begin a function declaration.
pub const RESERVED_KEYWORDS: [&str; 22] = [
    "if", "while", "for", "loop", "try", "catch", "finally", "else", "switch", "case", "default",
    "goto", "return", "break", "continue", "as", "in", "and", "or", "not", "is", "contains",
];

/// Binary operators spelled as words.
pub const OPERATOR_KEYWORDS: [&str; 5] = ["and", "not", "is", "or", "contains"];

/// Spellings of the continuation-section comment option.
pub const COMMENT_OPTIONS: [&str; 4] = ["comments", "comment", "com", "c"];

/// Spellings of the continuation-section trim options.
pub const TRIM_OPTIONS: [&str; 3] = ["ltrim", "ltrim0", "rtrim0"];

/// Returns `true` if `word` (lowercase) is a reserved keyword.
#[inline]
pub fn is_reserved(word: &str) -> bool {
    match word.len() {
        2 => matches!(word, "if" | "as" | "in" | "or" | "is"),
        3 => matches!(word, "for" | "try" | "and" | "not"),
        4 => matches!(word, "loop" | "else" | "case" | "goto"),
        5 => matches!(word, "while" | "catch" | "break"),
        6 => matches!(word, "switch" | "return"),
        7 => matches!(word, "finally" | "default"),
        8 => matches!(word, "continue" | "contains"),
        _ => false,
    }
}

/// Returns `true` if `word` (lowercase) is a verbal operator.
#[inline]
pub fn is_operator_keyword(word: &str) -> bool {
    OPERATOR_KEYWORDS.contains(&word)
}

/// Returns `true` if `c` could begin a verbal operator (`a n i o c`, any case).
#[inline]
pub fn starts_operator_keyword(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'n' | 'i' | 'o' | 'c')
}

#[inline]
pub fn is_comment_option(word: &str) -> bool {
    COMMENT_OPTIONS.contains(&word)
}

#[inline]
pub fn is_trim_option(word: &str) -> bool {
    TRIM_OPTIONS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_lookup_matches_table() {
        for word in RESERVED_KEYWORDS {
            assert!(is_reserved(word), "{word} should be reserved");
        }
        for word in ["static", "func", "iff", "i", "", "msgbox", "continues"] {
            assert!(!is_reserved(word), "{word} should not be reserved");
        }
    }

    #[test]
    fn operator_keywords_are_reserved() {
        for word in OPERATOR_KEYWORDS {
            assert!(is_reserved(word));
            assert!(starts_operator_keyword(word.chars().next().unwrap_or('\0')));
        }
    }

    #[test]
    fn operator_start_letters_any_case() {
        for c in ['a', 'A', 'n', 'N', 'i', 'I', 'o', 'O', 'c', 'C'] {
            assert!(starts_operator_keyword(c));
        }
        for c in ['b', 'x', '_', '1', '"'] {
            assert!(!starts_operator_keyword(c));
        }
    }

    #[test]
    fn continuation_options() {
        assert!(is_comment_option("com"));
        assert!(is_comment_option("c"));
        assert!(!is_comment_option("commentz"));
        assert!(is_trim_option("ltrim0"));
        assert!(!is_trim_option("rtrim"));
    }
}
