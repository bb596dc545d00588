//! External token kinds and the per-call valid-symbol set.
//!
//! The discriminants are the indices the host grammar uses for its external
//! token table, so the order here is part of the interface and must not
//! change.

use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

/// One resolved ambiguity. Carries no payload.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Trailing `?` on an optional parameter or argument.
    OptionalMarker = 0,
    /// Zero-width marker before `name(...) {` or `name(...) =>`.
    FunctionDefMarker = 1,
    /// Zero-width marker for an omitted argument before `,`.
    EmptyArg = 2,
    /// Whitespace acting as the concatenation operator.
    ImplicitConcatMarker = 3,
    /// Opening `(` of a continuation section.
    ContinuationSectionStart = 4,
    /// Line break inside a continuation section.
    ContinuationNewline = 5,
}

impl TokenKind {
    /// Every kind, in table order.
    pub const ALL: [TokenKind; 6] = [
        TokenKind::OptionalMarker,
        TokenKind::FunctionDefMarker,
        TokenKind::EmptyArg,
        TokenKind::ImplicitConcatMarker,
        TokenKind::ContinuationSectionStart,
        TokenKind::ContinuationNewline,
    ];

    /// Number of external token kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in the host's external token table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable snake_case name, as used by the grammar's `externals`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::OptionalMarker => "optional_marker",
            TokenKind::FunctionDefMarker => "function_def_marker",
            TokenKind::EmptyArg => "empty_arg",
            TokenKind::ImplicitConcatMarker => "implicit_concat_marker",
            TokenKind::ContinuationSectionStart => "continuation_section_start",
            TokenKind::ContinuationNewline => "continuation_newline",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a name matches no [`TokenKind`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind `{0}`")]
pub struct ParseTokenKindError(pub String);

impl FromStr for TokenKind {
    type Err = ParseTokenKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseTokenKindError(s.to_owned()))
    }
}

bitflags! {
    /// Token kinds the grammar would accept at the current position.
    ///
    /// The dispatcher never attempts a recognizer whose kind is absent.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidSymbols: u8 {
        const OPTIONAL_MARKER = 1 << 0;
        const FUNCTION_DEF_MARKER = 1 << 1;
        const EMPTY_ARG = 1 << 2;
        const IMPLICIT_CONCAT_MARKER = 1 << 3;
        const CONTINUATION_SECTION_START = 1 << 4;
        const CONTINUATION_NEWLINE = 1 << 5;
    }
}

impl ValidSymbols {
    /// The single flag for `kind`.
    #[inline]
    pub const fn of(kind: TokenKind) -> Self {
        Self::from_bits_retain(1 << kind as u8)
    }

    #[inline]
    pub const fn contains_kind(self, kind: TokenKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// Build from the host's boolean vector, indexed by [`TokenKind::index`].
    ///
    /// Entries past [`TokenKind::COUNT`] are ignored; missing entries count
    /// as `false`.
    pub fn from_valid_mask(mask: &[bool]) -> Self {
        TokenKind::ALL
            .into_iter()
            .zip(mask)
            .filter(|&(_, &valid)| valid)
            .map(|(kind, _)| kind)
            .collect()
    }

    /// Kinds in the set, in table order.
    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL
            .into_iter()
            .filter(move |&kind| self.contains_kind(kind))
    }
}

impl From<TokenKind> for ValidSymbols {
    fn from(kind: TokenKind) -> Self {
        Self::of(kind)
    }
}

impl FromIterator<TokenKind> for ValidSymbols {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, kind| acc | Self::of(kind))
    }
}
