//! `Copy` cursor over a sentinel-terminated buffer, implementing [`Lexer`].
//!
//! The cursor decodes one UTF-8 code point at a time. EOF is detected when
//! the position has reached the source length; the sentinel byte (`0x00`)
//! at that position makes [`lookahead`](Lexer::lookahead) report `'\0'`
//! without a bounds check.
//!
//! # Token boundaries
//!
//! Besides the read position the cursor tracks the two ends of the token a
//! recognizer is building:
//! - `start` follows skipped characters until the first significant
//!   advance or the first [`mark_end`](Lexer::mark_end);
//! - `end` is the last mark, or the read position when nothing was marked.

use crate::Lexer;

/// Half-open byte range `[start, end)` in the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length in bytes.
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Host cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`]: a dispatcher snapshots it before each
/// recognition attempt and keeps the snapshot only if the attempt succeeds.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. Guaranteed
/// by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct SourceCursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Start of the token under construction.
    start: u32,
    /// Last committed end, if any.
    end: Option<u32>,
    /// Whether a significant (non-skipped) character has been consumed.
    consumed: bool,
}

impl<'a> SourceCursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32, pos: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            source_len,
            pos,
            start: pos,
            end: None,
            consumed: false,
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// The committed end, if [`mark_end`](Lexer::mark_end) has been called.
    #[inline]
    pub fn committed_end(&self) -> Option<u32> {
        self.end
    }

    /// Byte range of the token under construction.
    pub fn token_span(&self) -> Span {
        Span::new(self.start, self.end.unwrap_or(self.pos))
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode a multi-byte code point at the current position.
    #[cold]
    fn decode_at_pos(&self) -> char {
        let start = self.pos as usize;
        let width = Self::utf8_char_width(self.buf[start]) as usize;
        let end = (start + width).min(self.source_len as usize);
        std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl Lexer for SourceCursor<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        let byte = self.buf[self.pos as usize];
        if byte.is_ascii() {
            char::from(byte)
        } else {
            self.decode_at_pos()
        }
    }

    fn advance(&mut self, skip: bool) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.buf[self.pos as usize]);
        self.pos = (self.pos + width).min(self.source_len);
        if !skip {
            self.consumed = true;
        } else if !self.consumed && self.end.is_none() {
            self.start = self.pos;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.end = Some(self.pos);
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    fn skip_to_paren(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let offset = memchr::memchr2(b'(', b')', remaining).unwrap_or(remaining.len());
        if offset > 0 {
            self.pos += offset as u32;
            self.consumed = true;
        }
    }
}
