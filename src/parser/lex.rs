//! Cursor primitives plus the whitespace and comment skipper.

use memchr::{memchr, memchr2};

use super::Parser;
use crate::classify::{
    is_delimiter_byte, is_special_whitespace, is_whitespace, is_whitespace_byte,
    is_whitespace_except_newline,
};

impl<'a> Parser<'a> {
    /// Decode the scalar starting at byte offset `i`, or None at end of
    /// input or when `i` is not a scalar boundary.
    #[inline]
    pub(crate) fn char_at(&self, i: usize) -> Option<char> {
        self.text.get(i..).and_then(|s| s.chars().next())
    }

    #[inline]
    pub(crate) fn byte_at(&self, i: usize) -> Option<u8> {
        self.text.as_bytes().get(i).copied()
    }

    #[inline]
    pub(crate) fn is_ascii_ws_at(&self, i: usize) -> bool {
        matches!(self.text.as_bytes().get(i), Some(&b) if is_whitespace_byte(b))
    }

    pub(crate) fn skip_bom(&mut self) {
        if self.text[self.i..].starts_with('\u{FEFF}') {
            self.i += '\u{FEFF}'.len_utf8();
        }
    }

    /// Walk backwards from byte offset `start` over ASCII whitespace and
    /// return the offset of the first non-whitespace byte. The result is a
    /// byte position, not necessarily a scalar boundary; callers compare the
    /// byte at it against ASCII classes.
    pub(crate) fn prev_non_whitespace_index(&self, start: usize) -> usize {
        let bytes = self.text.as_bytes();
        let mut prev = start;
        while prev > 0 && matches!(bytes.get(prev), Some(&b) if is_whitespace_byte(b)) {
            prev -= 1;
        }
        prev
    }

    #[inline]
    pub(crate) fn is_delimiter_byte_at(&self, i: usize) -> bool {
        matches!(self.text.as_bytes().get(i), Some(&b) if is_delimiter_byte(b))
    }

    /// Consume `c` when it is the next character, copying it to the output.
    pub(crate) fn parse_character(&mut self, c: char) -> bool {
        if self.char_at(self.i) == Some(c) {
            self.out.push(c);
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `c` when it is the next character, without emitting it.
    pub(crate) fn skip_character(&mut self, c: char) -> bool {
        if self.char_at(self.i) == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skip `...` placeholders like `[1, 2, 3, ...]`, including surrounding
    /// whitespace/comments and one optional trailing comma.
    pub(crate) fn skip_ellipsis(&mut self) -> bool {
        self.parse_whitespace_and_skip_comments(true);

        if self.text[self.i..].starts_with("...") {
            self.i += 3;
            self.parse_whitespace_and_skip_comments(true);
            self.skip_character(',');
            true
        } else {
            false
        }
    }

    /// Whitespace is copied to the output; exotic unicode spaces are
    /// normalised to a single regular space. With `skip_newline == false`,
    /// U+000A stops the scan (used for lookahead after a candidate end
    /// quote, which must not cross a line).
    pub(crate) fn parse_whitespace(&mut self, skip_newline: bool) -> bool {
        let mut changed = false;
        while let Some(c) = self.char_at(self.i) {
            let plain = if skip_newline {
                is_whitespace(c)
            } else {
                is_whitespace_except_newline(c)
            };
            if plain {
                self.out.push(c);
            } else if is_special_whitespace(c) {
                self.out.push(' ');
            } else {
                break;
            }
            self.i += c.len_utf8();
            changed = true;
        }
        changed
    }

    /// Comments are dropped entirely, they never reach the output.
    pub(crate) fn parse_comment(&mut self) -> bool {
        let bytes = self.text.as_bytes();

        // Block comment /* ... */
        if bytes.get(self.i) == Some(&b'/') && bytes.get(self.i + 1) == Some(&b'*') {
            let rest = &bytes[self.i + 2..];
            let mut off = 0usize;
            loop {
                match memchr(b'*', &rest[off..]) {
                    Some(p) if rest.get(off + p + 1) == Some(&b'/') => {
                        self.i += 2 + off + p + 2;
                        break;
                    }
                    Some(p) => off += p + 1,
                    None => {
                        self.i = self.text.len();
                        break;
                    }
                }
            }
            return true;
        }

        // Line comment // ... (the newline itself is left in place)
        if bytes.get(self.i) == Some(&b'/') && bytes.get(self.i + 1) == Some(&b'/') {
            match memchr(b'\n', &bytes[self.i + 2..]) {
                Some(p) => self.i += 2 + p,
                None => self.i = self.text.len(),
            }
            return true;
        }

        // Optional hash comment # ...
        if self.opts.tolerate_hash_comments && bytes.get(self.i) == Some(&b'#') {
            match memchr2(b'\n', b'\r', &bytes[self.i + 1..]) {
                Some(p) => self.i += 1 + p,
                None => self.i = self.text.len(),
            }
            return true;
        }

        false
    }

    pub(crate) fn parse_whitespace_and_skip_comments(&mut self, skip_newline: bool) -> bool {
        let start = self.i;
        self.parse_whitespace(skip_newline);
        while self.parse_comment() {
            self.parse_whitespace(skip_newline);
        }
        self.i > start
    }
}
