// src/extract.rs
//! Field extractor.
//!
//! The reviews page marks every cell of a column with the same class, and the
//! column's own label cell carries that class too. So for every selector the
//! first match is the header and the rest are data, one per row:
//! `matches == data rows + HEADER_ROWS`.

use tracing::debug;

use crate::column::FieldKind;
use crate::core::html::MarkupDocument;
use crate::error::CoreError;

/// Leading matches per selector that are column labels, not data.
pub const HEADER_ROWS: usize = 1;

/// Text of one matched element, tagged with its field and 0-based data row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFragment {
    pub field: FieldKind,
    pub index: usize,
    pub text: String,
}

/// Extract the data fragments of `field` using `selector`.
/// Fails when the selector is invalid, matches nothing, or matches only the header.
pub fn extract<D: MarkupDocument + ?Sized>(
    doc: &D,
    field: FieldKind,
    selector: &str,
) -> Result<Vec<RawFragment>, CoreError> {
    let fail = |reason: String| CoreError::Extraction {
        field,
        selector: s!(selector),
        reason,
    };

    let matches = doc.find_all(selector).map_err(|e| fail(e.reason))?;
    debug!(%field, selector, matches = matches.len(), "selector matched");

    match matches.len() {
        0 => return Err(fail(s!("no elements matched"))),
        n if n <= HEADER_ROWS => return Err(fail(s!("only the header row matched, no data rows"))),
        _ => {}
    }

    Ok(matches
        .into_iter()
        .skip(HEADER_ROWS)
        .enumerate()
        .map(|(index, text)| RawFragment { field, index, text })
        .collect())
}
