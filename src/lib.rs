//! Repair invalid JSON documents.
//!
//! The entry point is [`repair`]: it takes a text that is supposed to be a
//! JSON document but may deviate from the grammar in the ways common to LLM
//! output, hand-written config, relaxed JavaScript object literals, MongoDB
//! shell dumps, JSONP responses and truncated payloads, and returns a valid
//! JSON text representing the same data.
//!
//! ```
//! let repaired = jsonmend::repair("{name: 'John', age: 30}").unwrap();
//! assert_eq!(repaired, r#"{"name": "John", "age": 30}"#);
//! ```
//!
//! The following issues can be fixed:
//! - add missing quotes around keys and values
//! - add missing commas, colons and closing brackets
//! - repair truncated JSON
//! - replace single and special quote characters with double quotes
//! - normalize special whitespace characters
//! - replace Python constants (`None`, `True`, `False`)
//! - strip trailing commas, comments, ellipsis, fenced code blocks,
//!   JSONP notation and MongoDB data types
//! - concatenate strings split with `+`
//! - turn newline delimited JSON into a single array
//!
//! Inputs that are already valid JSON come back unchanged, whitespace
//! included.

mod classify;
pub mod cli;
pub mod error;
pub mod options;
mod parser;
mod repair;
mod surgery;

pub use error::{RepairError, RepairErrorKind};
pub use options::{LeadingZeroPolicy, Options};
pub use repair::RepairLogEntry;

use std::io::Write;

/// Repair a potentially invalid JSON string into a valid JSON string, using
/// default [`Options`].
pub fn repair(input: &str) -> Result<String, RepairError> {
    repair::repair_to_string(input, &Options::default())
}

/// Like [`repair`], but panics when the document cannot be repaired. For
/// callers that treat an unrepairable document as a programming error.
pub fn must_repair(input: &str) -> String {
    match repair(input) {
        Ok(out) => out,
        Err(err) => panic!("{}", err),
    }
}

/// Repair a potentially invalid JSON string with explicit [`Options`].
pub fn repair_with_options(input: &str, opts: &Options) -> Result<String, RepairError> {
    repair::repair_to_string(input, opts)
}

/// Repair a potentially invalid JSON string and write the result into an
/// `io::Write`. This avoids an extra copy when the caller streams to a sink.
pub fn repair_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), RepairError> {
    let out = repair::repair_to_string(input, opts)?;
    writer
        .write_all(out.as_bytes())
        .map_err(|e| RepairError::new(RepairErrorKind::Parse(format!("io write error: {}", e)), 0))
}

#[cfg(feature = "serde")]
/// Repair and then parse into a `serde_json::Value`.
pub fn repair_to_value(input: &str, opts: &Options) -> Result<serde_json::Value, RepairError> {
    let out = repair::repair_to_string(input, opts)?;
    serde_json::from_str(&out).map_err(|e| RepairError::from_serde("parse", e))
}

/// Repair a potentially invalid JSON string and return both the result and a
/// log of the rewrites that were applied.
pub fn repair_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    repair::repair_to_string_with_log(input, opts)
}

#[cfg(test)]
mod tests;
