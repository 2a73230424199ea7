//! String parsing and repair. This is the most involved recognizer: it
//! normalises quote styles, escapes bare control characters and interior
//! quotes, and repairs missing end quotes. An ambiguous end quote triggers a
//! speculative re-parse from a checkpoint under a stricter stop mode:
//!
//! - `stop_at_delimiter`: the string has no usable end quote; end it at the
//!   next unquoted-string delimiter.
//! - `stop_at_index`: a comma inside the string turned out to separate two
//!   values; end the string right there.
//!
//! Each rollback moves to a strictly stricter mode, so a single string parse
//! re-enters at most twice.

#![allow(clippy::collapsible_if)]

use super::Parser;
use crate::classify::{
    control_escape, is_delimiter, is_function_name_char, is_function_name_char_start,
    is_pass_through_escape, is_quote, is_unquoted_string_delimiter, is_url_char,
    is_valid_string_character, is_whitespace, matches_url_start, QuoteFamily,
};
use crate::surgery::{insert_before_last_whitespace, remove_at_index, strip_last_occurrence};

impl<'a> Parser<'a> {
    pub(crate) fn parse_string(&mut self, stop_at_delimiter: bool, stop_at_index: Option<usize>) -> bool {
        if self.i >= self.text.len() {
            return false;
        }

        // A leading backslash means the whole string is escaped, like
        // \"hello\". Interior escapes are then dropped one-for-one after
        // every character.
        let mut skip_escape_chars = false;
        if self.byte_at(self.i) == Some(b'\\') {
            self.i += 1;
            skip_escape_chars = true;
        }

        if self.i >= self.text.len() {
            return false;
        }

        let Some(open) = self.char_at(self.i) else {
            return false;
        };
        let Some(family) = QuoteFamily::of(open) else {
            if skip_escape_chars {
                self.i -= 1;
            }
            return false;
        };

        let i_before = self.i;
        let o_before = self.out.len();

        self.out.push('"');
        self.i += open.len_utf8();

        loop {
            if self.i >= self.text.len() {
                // Missing end quote. When the last significant character is a
                // delimiter the string most likely should have ended earlier;
                // retry and stop there instead of swallowing the delimiter.
                let i_prev = self.prev_non_whitespace_index(self.i - 1);
                if !stop_at_delimiter && self.is_delimiter_byte_at(i_prev) {
                    self.i = i_before;
                    self.out.truncate(o_before);
                    return self.parse_string(true, None);
                }

                self.log_repair("inserted missing end quote");
                insert_before_last_whitespace(&mut self.out, "\"");
                return true;
            }

            if stop_at_index == Some(self.i) {
                insert_before_last_whitespace(&mut self.out, "\"");
                return true;
            }

            let c = self.char_at(self.i).unwrap();

            if family.is_end(c) {
                let i_quote = self.i;
                let quote_width = c.len_utf8();
                let o_quote = self.out.len();

                self.out.push('"');
                self.i += quote_width;

                self.parse_whitespace_and_skip_comments(false);

                let next = self.char_at(self.i);
                let accepted = stop_at_delimiter
                    || next.is_none()
                    || next.is_some_and(|n| is_delimiter(n) || is_quote(n) || n.is_ascii_digit());

                if accepted {
                    // The quote is followed by the end of the text, a
                    // delimiter or a next value, so it plausibly ends the
                    // string. For plain double quotes, still check whether
                    // the right-hand context suggests an unescaped interior
                    // quote (`"a 24" screen"`).
                    if family == QuoteFamily::Double
                        && self.unescaped_quote_suspicious(i_quote + quote_width)
                        && self.find_next_valid_end_quote(i_quote + quote_width).is_some()
                    {
                        self.out.truncate(o_quote);
                        self.out.push_str("\\\"");
                        self.i = i_quote + quote_width;
                        self.log_repair("escaped unescaped double quote");
                        continue;
                    }

                    self.parse_concatenated_string();
                    return true;
                }

                let i_prev = self.prev_non_whitespace_index(i_quote - 1);
                if self.byte_at(i_prev) == Some(b',') {
                    // The quote closes a value that was missing its own end
                    // quote: `{"a":"b,"c":"d"}`. Re-parse and stop at the
                    // comma.
                    self.i = i_before;
                    self.out.truncate(o_before);
                    return self.parse_string(false, Some(i_prev));
                }
                if self.is_delimiter_byte_at(i_prev) {
                    self.i = i_before;
                    self.out.truncate(o_before);
                    return self.parse_string(true, None);
                }

                // Not a real end quote after all: escape it and keep going.
                self.out.truncate(o_quote);
                self.out.push_str("\\\"");
                self.i = i_quote + quote_width;
                self.log_repair("escaped unescaped double quote");
            } else if stop_at_delimiter && is_unquoted_string_delimiter(c) {
                // In delimiter-stop mode a URL would end at its first '/';
                // absorb the rest of it before closing the string.
                if self.i > 0
                    && self.byte_at(self.i - 1) == Some(b':')
                    && matches_url_start(self.text, i_before + 1, self.i + 2)
                {
                    while let Some(u) = self.char_at(self.i) {
                        if is_url_char(u) {
                            self.out.push(u);
                            self.i += u.len_utf8();
                        } else {
                            break;
                        }
                    }
                }

                self.log_repair("inserted missing end quote");
                insert_before_last_whitespace(&mut self.out, "\"");
                self.parse_concatenated_string();
                return true;
            } else if c == '\\' {
                if self.i + 1 < self.text.len() {
                    let next_char = self.char_at(self.i + 1).unwrap();
                    let next_width = next_char.len_utf8();

                    // Doubly-escaped unicode truncated at the end of the
                    // text, like `"\\ud`: treat the rest as cut off.
                    if next_char == '\\' && self.byte_at(self.i + 2) == Some(b'u') {
                        let mut j = 3;
                        while j < 7 && self.byte_at(self.i + j).is_some_and(|b| b.is_ascii_hexdigit())
                        {
                            j += 1;
                        }
                        if self.i + j >= self.text.len() && j < 7 {
                            self.i = self.text.len();
                            continue;
                        }
                    }

                    if is_pass_through_escape(next_char) {
                        self.out.push('\\');
                        self.out.push(next_char);
                        self.i += 1 + next_width;
                    } else if next_char == 'u' {
                        let mut j = 2;
                        while j < 6 && self.byte_at(self.i + j).is_some_and(|b| b.is_ascii_hexdigit())
                        {
                            j += 1;
                        }
                        if j == 6 {
                            // Emitted verbatim, never re-encoded.
                            self.out.push_str(&self.text[self.i..self.i + 6]);
                            self.i += 6;
                        } else if self.i + j >= self.text.len() {
                            // Truncated \uXX at the end: drop it and let the
                            // end-of-input branch close the string.
                            self.i = self.text.len();
                        } else {
                            return false;
                        }
                    } else {
                        // Invalid escape: drop the backslash.
                        self.out.push(next_char);
                        self.i += 1 + next_width;
                    }
                } else {
                    self.i += 1;
                }
            } else if c == '"' && self.byte_at(self.i - 1) != Some(b'\\') {
                // A bare double quote inside a single- or curly-quoted string.
                self.out.push_str("\\\"");
                self.i += 1;
            } else if let Some(esc) = control_escape(c) {
                self.out.push_str(esc);
                self.i += c.len_utf8();
            } else {
                if !is_valid_string_character(c) {
                    return false;
                }
                if self.opts.ensure_ascii && !c.is_ascii() {
                    push_unicode_escape(&mut self.out, c);
                } else {
                    self.out.push(c);
                }
                self.i += c.len_utf8();
            }

            if skip_escape_chars {
                self.skip_character('\\');
            }
        }
    }

    /// Merge JavaScript string concatenation like `"hello" + " world"` into
    /// a single string.
    pub(crate) fn parse_concatenated_string(&mut self) -> bool {
        let mut processed = false;

        self.parse_whitespace_and_skip_comments(true);
        while self.byte_at(self.i) == Some(b'+') {
            processed = true;
            self.i += 1;
            self.parse_whitespace_and_skip_comments(true);

            // Drop the end quote of the first string (and whitespace emitted
            // after it), then the start quote of the second.
            strip_last_occurrence(&mut self.out, '"', true);
            let start = self.out.len();
            if self.parse_string(false, None) {
                remove_at_index(&mut self.out, start, 1);
            } else {
                // No string after the '+': restore the end quote.
                insert_before_last_whitespace(&mut self.out, "\"");
            }
        }

        processed
    }

    /// Right-hand context check for a candidate end quote. True when the
    /// context suggests the quote is really an unescaped quote inside the
    /// string content.
    fn unescaped_quote_suspicious(&self, after: usize) -> bool {
        let Some(c) = self.char_at(after) else {
            return false; // end of text
        };

        if is_whitespace(c) {
            return false;
        }
        if matches!(c, '}' | ']' | ':') {
            return false;
        }

        if is_quote(c) {
            // Quote directly after quote: either a missing comma between two
            // strings (`["a""b"]`) or an unescaped quote like `"53""`. The
            // latter shows a delimiter right after the second quote.
            let mut j = after + c.len_utf8();
            while let Some(w) = self.char_at(j) {
                if is_whitespace(w) {
                    j += w.len_utf8();
                } else {
                    break;
                }
            }
            let Some(c2) = self.char_at(j) else {
                return true;
            };
            return matches!(c2, '}' | ']' | ',');
        }

        if c == '+' {
            return false; // concatenation
        }

        if c == ',' {
            let mut j = after + 1;
            while let Some(w) = self.char_at(j) {
                if is_whitespace(w) {
                    j += w.len_utf8();
                } else {
                    break;
                }
            }
            let Some(c2) = self.char_at(j) else {
                return false;
            };
            // A value start after the comma means a legitimate separator.
            if matches!(c2, '}' | ']' | '-' | '{' | '[') || is_quote(c2) || c2.is_ascii_digit() {
                return false;
            }
            if c2 == '/' && matches!(self.byte_at(j + 1), Some(b'*' | b'/')) {
                return false;
            }
            if is_function_name_char_start(c2) {
                // An identifier leading to ':' is an unquoted key; anything
                // else is likely string content continuing past the comma.
                let mut k = j;
                while let Some(fc) = self.char_at(k) {
                    if is_function_name_char(fc) {
                        k += fc.len_utf8();
                    } else {
                        break;
                    }
                }
                while let Some(w) = self.char_at(k) {
                    if is_whitespace(w) {
                        k += w.len_utf8();
                    } else {
                        break;
                    }
                }
                if let Some(after_ident) = self.char_at(k) {
                    if after_ident == ':' {
                        return false;
                    }
                    if is_quote(after_ident) {
                        let mut m = k + after_ident.len_utf8();
                        while let Some(w) = self.char_at(m) {
                            if is_whitespace(w) {
                                m += w.len_utf8();
                            } else {
                                break;
                            }
                        }
                        if self.char_at(m) == Some(':') {
                            return false;
                        }
                    }
                }
                return true;
            }
            return true;
        }

        true
    }

    /// Scan forward for a quote whose right-hand context (`}`, `]`, `,` or
    /// end of text) marks it as a plausible end quote for the current string
    /// value.
    fn find_next_valid_end_quote(&self, from: usize) -> Option<usize> {
        let mut j = from;
        while let Some(c) = self.char_at(j) {
            if is_quote(c) {
                let mut k = j + c.len_utf8();
                while let Some(w) = self.char_at(k) {
                    if is_whitespace(w) {
                        k += w.len_utf8();
                    } else {
                        break;
                    }
                }
                match self.char_at(k) {
                    None => return Some(j),
                    Some('}' | ']' | ',') => return Some(j),
                    _ => {}
                }
            }
            j += c.len_utf8();
        }
        None
    }
}

/// Append `s` to `out` as a JSON string literal, escaping where required.
pub(crate) fn push_json_string(out: &mut String, s: &str, ensure_ascii: bool) {
    out.push('"');
    let mut start = 0usize;
    for (i, ch) in s.char_indices() {
        let code = ch as u32;
        let needs_escape = ch == '"' || ch == '\\' || code < 0x20 || (ensure_ascii && code > 0x7F);
        if !needs_escape {
            continue;
        }
        if i > start {
            out.push_str(&s[start..i]);
        }
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => push_unicode_escape(out, ch),
        }
        start = i + ch.len_utf8();
    }
    if start < s.len() {
        out.push_str(&s[start..]);
    }
    out.push('"');
}

/// Append `c` as `\uXXXX`, as a surrogate pair beyond the BMP.
pub(crate) fn push_unicode_escape(out: &mut String, c: char) {
    let code = c as u32;
    if code <= 0xFFFF {
        out.push_str(&format!("\\u{:04X}", code));
    } else {
        let v = code - 0x1_0000;
        let high = 0xD800 + ((v >> 10) & 0x3FF);
        let low = 0xDC00 + (v & 0x3FF);
        out.push_str(&format!("\\u{:04X}\\u{:04X}", high, low));
    }
}
