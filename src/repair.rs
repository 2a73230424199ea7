use crate::error::RepairError;
use crate::options::Options;

/// One rewrite applied while repairing a document. `context` holds the input
/// text surrounding `position`, sized by `Options::log_context_window`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
    pub context: String,
}

pub(crate) fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    crate::parser::repair_to_string_impl(input, opts)
}

pub(crate) fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    // Logging bypasses the valid-input fast path so entries reflect the
    // actual parse.
    crate::parser::repair_with_log_impl(input, opts)
}
