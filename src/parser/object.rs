//! Object parsing with entry-level repairs: leading and trailing commas,
//! missing commas and colons, unquoted keys, missing values, ellipsis
//! placeholders and a missing closing brace.

use super::Parser;
use crate::surgery::{insert_before_last_whitespace, strip_last_occurrence};

impl<'a> Parser<'a> {
    pub(crate) fn parse_object(&mut self) -> bool {
        if self.char_at(self.i) != Some('{') {
            return false;
        }
        self.out.push('{');
        self.i += 1;
        self.parse_whitespace_and_skip_comments(true);

        // Leading comma is dropped silently.
        if self.skip_character(',') {
            self.parse_whitespace_and_skip_comments(true);
        }

        let mut initial = true;
        while self.i < self.text.len() {
            if self.char_at(self.i) == Some('}') {
                break;
            }

            if !initial {
                if !self.parse_character(',') {
                    self.log_repair("inserted missing comma");
                    insert_before_last_whitespace(&mut self.out, ",");
                }
                self.parse_whitespace_and_skip_comments(true);
            } else {
                initial = false;
            }

            self.skip_ellipsis();

            let processed_key = self.parse_string(false, None) || self.parse_unquoted_string(true);
            if !processed_key {
                match self.char_at(self.i) {
                    Some('{' | '}' | '[' | ']') | None => {
                        // Trailing comma before the end of the object.
                        self.log_repair("removed trailing comma");
                        strip_last_occurrence(&mut self.out, ',', false);
                    }
                    _ => return false,
                }
                break;
            }

            self.parse_whitespace_and_skip_comments(true);
            let processed_colon = self.parse_character(':');
            let truncated = self.i >= self.text.len();

            if !processed_colon {
                if self.at_start_of_value() || truncated {
                    self.log_repair("inserted missing colon");
                    insert_before_last_whitespace(&mut self.out, ":");
                } else {
                    return false;
                }
            }

            if !self.parse_value() {
                if processed_colon || truncated {
                    self.log_repair("inserted null for missing value");
                    self.out.push_str("null");
                } else {
                    return false;
                }
            }
        }

        if self.char_at(self.i) == Some('}') {
            self.out.push('}');
            self.i += 1;
        } else {
            self.log_repair("inserted missing closing brace");
            insert_before_last_whitespace(&mut self.out, "}");
        }

        true
    }
}
