//! Small splice operations on the output buffer. Repairs frequently have to
//! land *before* whitespace that has already been emitted ("{\"a\":2 " needs
//! its comma inserted before the trailing space), so these helpers edit the
//! buffer in place rather than appending.

use crate::classify::is_whitespace_byte;

/// Insert `insert` just before the trailing ASCII whitespace run of `out`,
/// or append it when there is none.
pub(crate) fn insert_before_last_whitespace(out: &mut String, insert: &str) {
    let bytes = out.as_bytes();
    let mut idx = bytes.len();
    while idx > 0 && is_whitespace_byte(bytes[idx - 1]) {
        idx -= 1;
    }
    out.insert_str(idx, insert);
}

/// Remove the last occurrence of the single-character `needle`. With
/// `strip_remaining`, everything after it is dropped as well.
pub(crate) fn strip_last_occurrence(out: &mut String, needle: char, strip_remaining: bool) {
    if let Some(pos) = out.rfind(needle) {
        if strip_remaining {
            out.truncate(pos);
        } else {
            out.remove(pos);
        }
    }
}

/// Delete `count` bytes starting at byte offset `start`.
pub(crate) fn remove_at_index(out: &mut String, start: usize, count: usize) {
    if start >= out.len() {
        return;
    }
    let end = (start + count).min(out.len());
    out.replace_range(start..end, "");
}

/// True when `s` ends with a comma or a newline followed only by
/// space/tab/CR, i.e. the regex `[,\n][ \t\r]*$`.
pub(crate) fn ends_with_comma_or_newline(s: &str) -> bool {
    let trimmed = s.trim_end_matches([' ', '\t', '\r']);
    trimmed.ends_with(',') || trimmed.ends_with('\n')
}
