//! Load reports and errors.

use std::fmt;
use std::path::PathBuf;

use crate::shipment::ValidationError;

/// A line whose text could not be turned into record fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 5 fields, found {found}")]
    MissingFields { found: usize },

    #[error("field '{field}' is not an integer: '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    #[error("unterminated quoted field")]
    UnterminatedQuote,

    #[error("malformed line: {0}")]
    Malformed(String),
}

/// Why a line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// One skipped input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the source.
    pub line: u64,
    pub reason: RejectReason,
}

impl fmt::Display for RejectedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Outcome of a batch load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records inserted into the heap.
    pub inserted: usize,
    /// Lines skipped, in input order.
    pub rejected: Vec<RejectedLine>,
    /// Whether a header line was detected and skipped.
    pub header_skipped: bool,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Failure that ends a load before the input is exhausted.
///
/// Records inserted before the failure stay in the heap.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading input: {0}")]
    Read(#[from] std::io::Error),
}
