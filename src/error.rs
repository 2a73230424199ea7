use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairErrorKind {
    /// The input ran out before a value could even be begun.
    UnexpectedEnd,
    /// Input remained after the best-effort repair and could not be folded
    /// into the document.
    UnexpectedChar(char),
    /// Wrapped error from an outer convenience (I/O, serde).
    Parse(String),
}

/// Error returned when a document cannot be repaired. `position` is a
/// zero-based byte offset into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairError {
    pub kind: RepairErrorKind,
    pub position: usize,
}

impl RepairError {
    pub fn new(kind: RepairErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    #[cfg(feature = "serde")]
    pub fn from_serde(what: &str, err: serde_json::Error) -> Self {
        Self {
            kind: RepairErrorKind::Parse(format!("serde_json {} error: {}", what, err)),
            position: 0,
        }
    }
}

impl fmt::Display for RepairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RepairErrorKind::UnexpectedEnd => {
                write!(f, "Unexpected end of json string at position {}", self.position)
            }
            RepairErrorKind::UnexpectedChar(c) => {
                write!(f, "Unexpected character {:?} at position {}", c, self.position)
            }
            RepairErrorKind::Parse(msg) => write!(f, "{} at position {}", msg, self.position),
        }
    }
}

impl std::error::Error for RepairError {}
