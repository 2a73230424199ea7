//! Hand-written single-pass repair parser. The parser walks the input with a
//! byte cursor that always sits on a scalar boundary and appends to a single
//! output buffer. Repairs are either plain appends, splices into the buffer
//! (see `surgery`), or speculative re-parses of a string from a saved
//! checkpoint under a stricter stop mode.

#![allow(clippy::collapsible_if)]

use crate::classify::{
    is_function_name_char, is_function_name_char_start, is_quote, is_start_of_value,
    is_unquoted_string_delimiter, is_url_char, matches_url_start,
};
use crate::error::{RepairError, RepairErrorKind};
use crate::options::Options;
use crate::repair::RepairLogEntry;
use crate::surgery::{ends_with_comma_or_newline, insert_before_last_whitespace, strip_last_occurrence};

mod array;
mod lex;
mod number;
mod object;
mod strings;

use strings::push_json_string;

pub(crate) fn repair_to_string_impl(input: &str, opts: &Options) -> Result<String, RepairError> {
    // Fast path: if input is already valid JSON, short-circuit. The repair
    // parser is the identity on valid documents as well, so this only skips
    // work, it does not change results.
    #[cfg(feature = "serde")]
    {
        if let Some(out) = valid_json_fast_path(input, opts) {
            return Ok(out);
        }
    }

    let mut parser = Parser::new(input, opts, Logger::disabled());
    parser.parse()
}

pub(crate) fn repair_with_log_impl(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    let mut parser = Parser::new(input, opts, Logger::enabled(opts.log_context_window));
    let out = parser.parse()?;
    Ok((out, parser.log.take_entries()))
}

#[cfg(feature = "serde")]
fn valid_json_fast_path(input: &str, opts: &Options) -> Option<String> {
    // Under ensure_ascii the character parser must run: it escapes string
    // content in place, keeping key order, number text and whitespace exactly
    // as written. A serde round-trip would reorder object keys and lose
    // precision on large integers.
    if opts.ensure_ascii {
        return None;
    }
    if serde_json::from_str::<serde_json::Value>(input).is_ok() {
        Some(input.to_string())
    } else {
        None
    }
}

#[derive(Default)]
pub(crate) struct Logger {
    enable: bool,
    window: usize,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    pub(crate) fn disabled() -> Self {
        Self::default()
    }

    pub(crate) fn enabled(window: usize) -> Self {
        Self {
            enable: true,
            window,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, message: &'static str, text: &str, position: usize) {
        if !self.enable {
            return;
        }
        self.entries.push(RepairLogEntry {
            position,
            message,
            context: context_snippet(text, position, self.window),
        });
    }

    pub(crate) fn take_entries(&mut self) -> Vec<RepairLogEntry> {
        std::mem::take(&mut self.entries)
    }
}

fn context_snippet(text: &str, position: usize, window: usize) -> String {
    let mut start = position.min(text.len()).saturating_sub(window);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (position + window).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    text[start..end].to_string()
}

pub(crate) struct Parser<'a> {
    text: &'a str,
    i: usize,
    out: String,
    opts: &'a Options,
    log: Logger,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str, opts: &'a Options, log: Logger) -> Self {
        Self {
            text,
            i: 0,
            out: String::with_capacity(text.len() + 16),
            opts,
            log,
        }
    }

    fn log_repair(&mut self, message: &'static str) {
        let position = self.i;
        self.log.push(message, self.text, position);
    }

    pub(crate) fn parse(&mut self) -> Result<String, RepairError> {
        self.skip_bom();
        self.parse_markdown_code_block(&["```", "[```", "{```"]);

        if !self.parse_value() {
            return Err(RepairError::new(RepairErrorKind::UnexpectedEnd, self.text.len()));
        }

        self.parse_markdown_code_block(&["```", "```]", "```}"]);

        self.parse_whitespace_and_skip_comments(true);
        let processed_comma = self.parse_character(',');
        if processed_comma {
            self.parse_whitespace_and_skip_comments(true);
        }

        // Newline delimited JSON has to be detected before the sweep of
        // redundant closing brackets below.
        if self.i < self.text.len() && self.at_start_of_value() && ends_with_comma_or_newline(&self.out)
        {
            if !processed_comma {
                self.log_repair("inserted missing comma");
                insert_before_last_whitespace(&mut self.out, ",");
            }
            self.parse_newline_delimited_json();
        } else if processed_comma {
            self.log_repair("removed trailing comma");
            strip_last_occurrence(&mut self.out, ',', false);
        }

        while let Some('}' | ']') = self.char_at(self.i) {
            self.log_repair("removed redundant closing bracket");
            self.i += 1;
            self.parse_whitespace_and_skip_comments(true);
        }

        if self.i >= self.text.len() {
            return Ok(std::mem::take(&mut self.out));
        }
        Err(self.unexpected_character())
    }

    pub(crate) fn parse_value(&mut self) -> bool {
        self.parse_whitespace_and_skip_comments(true);
        let processed = self.parse_object()
            || self.parse_array()
            || self.parse_string(false, None)
            || self.parse_number()
            || self.parse_keywords()
            || self.parse_unquoted_string(false)
            || self.parse_regex();
        self.parse_whitespace_and_skip_comments(true);
        processed
    }

    fn at_start_of_value(&self) -> bool {
        match self.char_at(self.i) {
            Some(c) => is_start_of_value(c),
            None => false,
        }
    }

    fn unexpected_character(&self) -> RepairError {
        match self.char_at(self.i) {
            Some(c) => RepairError::new(RepairErrorKind::UnexpectedChar(c), self.i),
            None => RepairError::new(RepairErrorKind::UnexpectedEnd, self.text.len()),
        }
    }

    /// Wrap a sequence of top-level values into a single array. The first
    /// value is already in the output, followed by a comma.
    fn parse_newline_delimited_json(&mut self) {
        self.log_repair("wrapped newline delimited values in an array");
        let mut initial = true;
        let mut processed_value = true;

        while processed_value {
            if !initial {
                if !self.parse_character(',') {
                    insert_before_last_whitespace(&mut self.out, ",");
                }
            } else {
                initial = false;
            }
            processed_value = self.parse_value();
        }

        strip_last_occurrence(&mut self.out, ',', false);
        self.out.insert_str(0, "[\n");
        self.out.push_str("\n]");
    }

    fn parse_markdown_code_block(&mut self, blocks: &[&str]) -> bool {
        if !self.opts.fenced_code_blocks {
            return false;
        }
        if !self.skip_markdown_code_block(blocks) {
            return false;
        }
        // Optional language specifier like ```json
        if let Some(c) = self.char_at(self.i) {
            if is_function_name_char_start(c) {
                while let Some(c) = self.char_at(self.i) {
                    if is_function_name_char(c) {
                        self.i += 1;
                    } else {
                        break;
                    }
                }
            }
        }
        self.parse_whitespace_and_skip_comments(true);
        true
    }

    fn skip_markdown_code_block(&mut self, blocks: &[&str]) -> bool {
        self.parse_whitespace(true);
        for block in blocks {
            if self.text[self.i..].starts_with(block) {
                self.i += block.len();
                return true;
            }
        }
        false
    }

    fn parse_keywords(&mut self) -> bool {
        if self.parse_keyword("true", "true")
            || self.parse_keyword("false", "false")
            || self.parse_keyword("null", "null")
        {
            return true;
        }
        if self.opts.allow_python_keywords
            && (self.parse_keyword("True", "true")
                || self.parse_keyword("False", "false")
                || self.parse_keyword("None", "null"))
        {
            self.log_repair("normalized python keyword");
            return true;
        }
        false
    }

    fn parse_keyword(&mut self, name: &str, value: &str) -> bool {
        if self.text[self.i..].starts_with(name) {
            self.out.push_str(value);
            self.i += name.len();
            true
        } else {
            false
        }
    }

    /// Parse an unquoted symbol: either a function wrapper like
    /// `callback({...})` / `ObjectId("...")`, or a bare run of text that gets
    /// quoted into a JSON string.
    pub(crate) fn parse_unquoted_string(&mut self, is_key: bool) -> bool {
        let start = self.i;

        if let Some(c) = self.char_at(self.i) {
            if is_function_name_char_start(c) {
                while let Some(c) = self.char_at(self.i) {
                    if is_function_name_char(c) {
                        self.i += c.len_utf8();
                    } else {
                        break;
                    }
                }

                let mut j = self.i;
                while self.is_ascii_ws_at(j) {
                    j += 1;
                }

                if self.byte_at(j) == Some(b'(') {
                    // Function call: keep the first argument, drop the rest.
                    self.i = j + 1;
                    self.parse_value();

                    while self.byte_at(self.i) == Some(b',') {
                        self.i += 1;
                        let saved = self.out.len();
                        self.parse_whitespace_and_skip_comments(true);
                        self.parse_value();
                        self.out.truncate(saved);
                    }

                    if self.byte_at(self.i) == Some(b')') {
                        self.i += 1;
                        if self.byte_at(self.i) == Some(b';') {
                            self.i += 1;
                        }
                    }
                    return true;
                }
            }
        }

        while let Some(c) = self.char_at(self.i) {
            if is_unquoted_string_delimiter(c) || is_quote(c) || (is_key && c == ':') {
                break;
            }
            self.i += c.len_utf8();
        }

        // An unquoted URL would otherwise stop at the first '/'.
        if self.i > 0
            && self.byte_at(self.i - 1) == Some(b':')
            && matches_url_start(self.text, start, self.i + 2)
        {
            while let Some(c) = self.char_at(self.i) {
                if is_url_char(c) {
                    self.i += c.len_utf8();
                } else {
                    break;
                }
            }
        }

        if self.i > start {
            while self.i > start && self.is_ascii_ws_at(self.i - 1) {
                self.i -= 1;
            }
            let symbol = &self.text[start..self.i];

            if self.opts.repair_undefined && symbol == "undefined" {
                self.log_repair("replaced undefined with null");
                self.out.push_str("null");
            } else {
                push_json_string(&mut self.out, symbol, self.opts.ensure_ascii);
            }

            // A dangling end quote after the symbol is consumed.
            if self.byte_at(self.i) == Some(b'"') {
                self.i += 1;
            }
            return true;
        }

        false
    }

    /// Turn a JavaScript regex literal like `/foo [a-z]_/i` into a JSON
    /// string holding the literal, slashes included.
    fn parse_regex(&mut self) -> bool {
        if self.byte_at(self.i) != Some(b'/') {
            return false;
        }
        let start = self.i;
        self.i += 1;

        let bytes = self.text.as_bytes();
        while self.i < self.text.len()
            && (bytes[self.i] != b'/' || (self.i > 0 && bytes[self.i - 1] == b'\\'))
        {
            self.i += 1;
        }
        if self.i < self.text.len() {
            self.i += 1; // closing '/'
        }

        let lit = &self.text[start..self.i];
        push_json_string(&mut self.out, lit, self.opts.ensure_ascii);
        true
    }
}
