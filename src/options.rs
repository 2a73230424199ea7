#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum LeadingZeroPolicy {
    /// Quote numbers with leading zeros as strings, like "007".
    QuoteAsString,
    /// Keep numbers with leading zeros as-is (non-strict JSON, but pragmatic).
    KeepAsNumber,
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Skip a Markdown fenced code block like ```json ... ``` around the JSON.
    pub fenced_code_blocks: bool,
    /// Accept and normalize Python-style keywords True/False/None.
    pub allow_python_keywords: bool,
    /// Convert the JavaScript value `undefined` into `null`.
    pub repair_undefined: bool,
    /// Policy for numbers with leading zeros like 007.
    pub leading_zero_policy: LeadingZeroPolicy,
    /// Treat `#` as a line comment (in addition to // and /* */) when not
    /// inside strings.
    pub tolerate_hash_comments: bool,
    /// When true, escape non-ASCII characters in strings as \uXXXX.
    pub ensure_ascii: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many characters are captured on both sides of the position.
    pub log_context_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fenced_code_blocks: true,
            allow_python_keywords: true,
            repair_undefined: true,
            leading_zero_policy: LeadingZeroPolicy::QuoteAsString,
            tolerate_hash_comments: false,
            ensure_ascii: false,
            log_context_window: 10,
        }
    }
}
