//! Number parsing. Numbers are copied verbatim, with two repairs: a number
//! cut off after a sign, decimal point or exponent gets padded with a `0`
//! (`2.` becomes `2.0`, `2e+` becomes `2e+0`), and a leading zero turns the
//! token into a quoted string under the default policy (`0789` is not valid
//! JSON). Anything that stops looking like a number mid-way rolls back and
//! falls through to the unquoted-string recognizer.

use super::Parser;
use crate::classify::{is_delimiter_byte, is_whitespace_byte};
use crate::options::LeadingZeroPolicy;
use crate::parser::strings::push_json_string;

impl<'a> Parser<'a> {
    pub(crate) fn parse_number(&mut self) -> bool {
        let start = self.i;

        match self.byte_at(self.i) {
            Some(b'-') => {}
            Some(b) if b.is_ascii_digit() => {}
            _ => return false,
        }

        if self.byte_at(self.i) == Some(b'-') {
            self.i += 1;
            if self.at_end_of_number() {
                self.repair_number_ending_with_numeric_symbol(start);
                return true;
            }
            if !self.byte_at(self.i).is_some_and(|b| b.is_ascii_digit()) {
                self.i = start;
                return false;
            }
        }

        while self.byte_at(self.i).is_some_and(|b| b.is_ascii_digit()) {
            self.i += 1;
        }

        if self.byte_at(self.i) == Some(b'.') {
            self.i += 1;
            if self.at_end_of_number() {
                self.repair_number_ending_with_numeric_symbol(start);
                return true;
            }
            if !self.byte_at(self.i).is_some_and(|b| b.is_ascii_digit()) {
                self.i = start;
                return false;
            }
            while self.byte_at(self.i).is_some_and(|b| b.is_ascii_digit()) {
                self.i += 1;
            }
        }

        if matches!(self.byte_at(self.i), Some(b'e' | b'E')) {
            self.i += 1;
            if matches!(self.byte_at(self.i), Some(b'-' | b'+')) {
                self.i += 1;
            }
            if self.at_end_of_number() {
                self.repair_number_ending_with_numeric_symbol(start);
                return true;
            }
            if !self.byte_at(self.i).is_some_and(|b| b.is_ascii_digit()) {
                self.i = start;
                return false;
            }
            while self.byte_at(self.i).is_some_and(|b| b.is_ascii_digit()) {
                self.i += 1;
            }
        }

        if !self.at_end_of_number() {
            self.i = start;
            return false;
        }

        if self.i > start {
            let num = &self.text[start..self.i];
            let digits = num.strip_prefix('-').unwrap_or(num);
            let has_leading_zero = digits.len() > 1
                && digits.as_bytes()[0] == b'0'
                && digits.as_bytes()[1].is_ascii_digit();

            if has_leading_zero && self.opts.leading_zero_policy == LeadingZeroPolicy::QuoteAsString {
                self.log_repair("quoted number with leading zero");
                push_json_string(&mut self.out, num, self.opts.ensure_ascii);
            } else {
                self.out.push_str(num);
            }
            return true;
        }

        false
    }

    fn at_end_of_number(&self) -> bool {
        match self.byte_at(self.i) {
            None => true,
            Some(b) => is_delimiter_byte(b) || is_whitespace_byte(b),
        }
    }

    fn repair_number_ending_with_numeric_symbol(&mut self, start: usize) {
        self.log_repair("completed truncated number");
        let prefix = &self.text[start..self.i];
        self.out.push_str(prefix);
        self.out.push('0');
    }
}
