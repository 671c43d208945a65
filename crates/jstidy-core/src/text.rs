//! Source position utilities for ESTree offsets.
//!
//! ESTree producers report offsets and columns in UTF-16 code units (they are
//! JavaScript string indices), while Rust slices source text by byte offsets.
//! [`SourceIndex`] bridges the two:
//!
//! - [`SourceIndex::byte_offset`] converts a UTF-16 offset to a byte offset
//! - [`SourceIndex::position`] converts a UTF-16 offset to a [`Position`]
//!
//! ## Coordinate Conventions
//!
//! - Lines are **1-indexed**, columns **0-indexed** (ESTree `loc` convention)
//! - Line terminators are `\n`, `\r\n`, lone `\r`, U+2028 and U+2029
//! - Offsets past the end of the text clamp to the end

use crate::types::Position;

/// Precomputed line table and offset mapping for one source text.
///
/// Both lookups are binary searches; nothing rescans the text after
/// [`SourceIndex::new`].
#[derive(Debug, Clone)]
pub struct SourceIndex<'s> {
    source: &'s str,
    /// UTF-16 offset of the first code unit of each line.
    line_starts: Vec<u64>,
    /// Every non-ASCII character, in source order. Between two of them the
    /// text is ASCII, where UTF-16 and byte offsets advance together.
    wide_chars: Vec<WideChar>,
    /// Total length in UTF-16 code units.
    utf16_len: u64,
}

/// A character whose UTF-8 encoding is longer than one byte.
#[derive(Debug, Clone, Copy)]
struct WideChar {
    utf16: u64,
    byte: usize,
    utf16_len: u64,
    byte_len: usize,
}

impl WideChar {
    fn utf16_end(&self) -> u64 {
        self.utf16 + self.utf16_len
    }

    fn byte_end(&self) -> usize {
        self.byte + self.byte_len
    }
}

impl<'s> SourceIndex<'s> {
    /// Build the index for `source`.
    pub fn new(source: &'s str) -> Self {
        let mut line_starts = vec![0u64];
        let mut wide_chars = Vec::new();
        let mut utf16 = 0u64;
        let mut chars = source.char_indices().peekable();

        while let Some((byte, ch)) = chars.next() {
            if !ch.is_ascii() {
                wide_chars.push(WideChar {
                    utf16,
                    byte,
                    utf16_len: ch.len_utf16() as u64,
                    byte_len: ch.len_utf8(),
                });
            }
            utf16 += ch.len_utf16() as u64;
            match ch {
                '\r' => {
                    if chars.peek().map(|&(_, next)| next) == Some('\n') {
                        chars.next();
                        utf16 += 1;
                    }
                    line_starts.push(utf16);
                }
                '\n' | '\u{2028}' | '\u{2029}' => line_starts.push(utf16),
                _ => {}
            }
        }

        SourceIndex {
            source,
            line_starts,
            wide_chars,
            utf16_len: utf16,
        }
    }

    /// The indexed source text.
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Number of lines in the source (an empty text has one empty line).
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Convert a UTF-16 offset into a byte offset.
    ///
    /// An offset inside a character (between the halves of a surrogate
    /// pair) maps to the end of that character.
    pub fn byte_offset(&self, utf16_offset: u64) -> usize {
        if utf16_offset >= self.utf16_len {
            return self.source.len();
        }
        let before = self.wide_chars.partition_point(|c| c.utf16 < utf16_offset);
        let Some(wide) = before.checked_sub(1).map(|i| self.wide_chars[i]) else {
            return utf16_offset as usize;
        };
        if utf16_offset < wide.utf16_end() {
            wide.byte_end()
        } else {
            wide.byte_end() + (utf16_offset - wide.utf16_end()) as usize
        }
    }

    /// Convert a UTF-16 offset into a line/column position.
    ///
    /// The returned position keeps `utf16_offset` (clamped) as its offset.
    pub fn position(&self, utf16_offset: u64) -> Position {
        let offset = utf16_offset.min(self.utf16_len);
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let column = offset - self.line_starts[line_idx];
        Position::new(line_idx as u32 + 1, column as u32, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_first_line() {
        let index = SourceIndex::new("var x = 1;\nx = 2;\n");
        assert_eq!(index.position(0), Position::new(1, 0, 0));
        assert_eq!(index.position(4), Position::new(1, 4, 4));
    }

    #[test]
    fn position_after_newline() {
        let index = SourceIndex::new("var x = 1;\nx = 2;\n");
        assert_eq!(index.position(11), Position::new(2, 0, 11));
        assert_eq!(index.position(15), Position::new(2, 4, 15));
    }

    #[test]
    fn crlf_is_one_terminator() {
        let index = SourceIndex::new("a;\r\nb;\rc;");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.position(4), Position::new(2, 0, 4));
        assert_eq!(index.position(7), Position::new(3, 0, 7));
    }

    #[test]
    fn offset_beyond_end_clamps() {
        let index = SourceIndex::new("short");
        assert_eq!(index.position(100), Position::new(1, 5, 5));
        assert_eq!(index.byte_offset(100), 5);
    }

    #[test]
    fn ascii_byte_offset_is_identity() {
        let index = SourceIndex::new("let a = 'b';");
        assert_eq!(index.byte_offset(8), 8);
    }

    #[test]
    fn non_ascii_byte_offset() {
        // "é" is one UTF-16 unit but two bytes; "😀" is two units and four bytes.
        let source = "'é';'😀';x";
        let index = SourceIndex::new(source);
        assert_eq!(index.byte_offset(4), 5);
        assert_eq!(&source[index.byte_offset(9)..], "x");
    }

    #[test]
    fn offset_inside_surrogate_pair_maps_to_char_end() {
        let source = "a😀b";
        let index = SourceIndex::new(source);
        assert_eq!(index.byte_offset(2), 5);
        assert_eq!(&source[index.byte_offset(3)..], "b");
    }

    #[test]
    fn byte_offsets_match_a_linear_scan() {
        let source = "é\nlet s = '日本';\r\n// 😀 ok\nx = \"ü\";".repeat(50);
        let index = SourceIndex::new(&source);
        let mut units = 0u64;
        for (byte, ch) in source.char_indices() {
            assert_eq!(index.byte_offset(units), byte, "utf16 offset {units}");
            units += ch.len_utf16() as u64;
        }
        assert_eq!(index.byte_offset(units), source.len());
    }

    #[test]
    fn empty_source() {
        let index = SourceIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.position(0), Position::new(1, 0, 0));
    }
}
