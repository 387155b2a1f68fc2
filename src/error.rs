// src/error.rs
//
// Two layers of errors:
// - CoreError: the four failure kinds of the extraction/aggregation pipeline.
//   Core functions return it directly so callers can match on the kind.
// - RunError: everything the outer shell can hit (fetch, disk, export), with
//   CoreError carried through transparently.

use thiserror::Error;

use crate::column::FieldKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Selector matched nothing, only the header row, or did not parse.
    #[error("extraction failed for {field} (selector `{selector}`): {reason}")]
    Extraction {
        field: FieldKind,
        selector: String,
        reason: String,
    },

    /// A fragment could not be converted to its column type.
    #[error("bad {field} value at row {row}: {fragment:?} ({reason})")]
    Format {
        field: FieldKind,
        row: usize,
        fragment: String,
        reason: String,
    },

    /// Columns of unequal length at assembly time.
    #[error("column {field} has {found} values, expected {expected}")]
    Alignment {
        field: FieldKind,
        expected: usize,
        found: usize,
    },

    #[error("insufficient data for {operation}: {reason}")]
    InsufficientData {
        operation: &'static str,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RunError {
    /// The core failure behind this error, if any.
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            RunError::Core(e) => Some(e),
            _ => None,
        }
    }
}
