//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the script content, so
//! [`SourceCursor::lookahead`](crate::SourceCursor) can read the current byte
//! at end of input without a bounds check. The total size is rounded up to
//! the next 64-byte boundary; the padding is zero-filled as well.
//!
//! # Encoding
//!
//! AutoHotkey scripts are frequently saved with a UTF-8 byte order mark.
//! It is accepted and skipped: cursors start after it. Interior null bytes
//! are recorded as [`EncodingIssue`]s: the cursor reports them as `'\0'`,
//! which the recognizers treat as a line terminator. Hosts decide whether to
//! surface them.

use crate::cursor::SourceCursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [bom?, script_bytes..., 0x00, padding_zeros...]
///        ^                ^     ^
///  content_start          |     rounded up to 64-byte boundary
///                    source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Offset of the first byte after a leading UTF-8 BOM (0 without one).
    content_start: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// Null byte (U+0000) inside the script.
    InteriorNull,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from a script.
    ///
    /// Scripts larger than `u32::MAX` bytes are accepted but `source_len`
    /// saturates at `u32::MAX`; anything past that is never scanned.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let mut encoding_issues = Vec::new();
        detect_interior_nulls(source_bytes, &mut encoding_issues);

        let content_start = if source_bytes.starts_with(UTF8_BOM) {
            3
        } else {
            0
        };

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            content_start,
            encoding_issues,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`SourceCursor`] positioned at the start of the script
    /// (after a UTF-8 BOM, if present).
    pub fn cursor(&self) -> SourceCursor<'_> {
        SourceCursor::new(&self.buf, self.source_len, self.content_start)
    }

    /// Create a [`SourceCursor`] positioned at byte `offset`.
    ///
    /// Returns `None` if `offset` is past the end of the source, inside the
    /// BOM, or not on a UTF-8 character boundary.
    pub fn cursor_at(&self, offset: u32) -> Option<SourceCursor<'_>> {
        if offset < self.content_start || !self.is_char_boundary(offset) {
            return None;
        }
        Some(SourceCursor::new(&self.buf, self.source_len, offset))
    }

    /// Returns `true` if `offset` starts a character (or is the end of the
    /// source).
    pub fn is_char_boundary(&self, offset: u32) -> bool {
        if offset > self.source_len {
            return false;
        }
        // The sentinel at `source_len` is 0x00, never a continuation byte.
        !matches!(self.buf[offset as usize], 0x80..=0xBF)
    }

    /// Offset of the first script byte (3 when a UTF-8 BOM is present).
    pub fn content_start(&self) -> u32 {
        self.content_start
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for pos in memchr::memchr_iter(0, source) {
        if let Ok(pos) = u32::try_from(pos) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
    }
}
