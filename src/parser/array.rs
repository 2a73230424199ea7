//! Array parsing, the simpler sibling of the object recognizer: leading and
//! trailing commas stripped, missing commas inserted before already-emitted
//! whitespace, ellipsis skipped, and a missing `]` repaired at end of input.

use super::Parser;
use crate::surgery::{insert_before_last_whitespace, strip_last_occurrence};

impl<'a> Parser<'a> {
    pub(crate) fn parse_array(&mut self) -> bool {
        if self.char_at(self.i) != Some('[') {
            return false;
        }
        self.out.push('[');
        self.i += 1;
        self.parse_whitespace_and_skip_comments(true);

        if self.skip_character(',') {
            self.parse_whitespace_and_skip_comments(true);
        }

        let mut initial = true;
        while self.i < self.text.len() {
            if self.char_at(self.i) == Some(']') {
                break;
            }

            if !initial {
                if !self.parse_character(',') {
                    self.log_repair("inserted missing comma");
                    insert_before_last_whitespace(&mut self.out, ",");
                }
            } else {
                initial = false;
            }

            self.skip_ellipsis();

            if !self.parse_value() {
                // A comma followed by no value.
                self.log_repair("removed trailing comma");
                strip_last_occurrence(&mut self.out, ',', false);
                break;
            }
        }

        if self.char_at(self.i) == Some(']') {
            self.out.push(']');
            self.i += 1;
        } else {
            self.log_repair("inserted missing closing bracket");
            insert_before_last_whitespace(&mut self.out, "]");
        }

        true
    }
}
