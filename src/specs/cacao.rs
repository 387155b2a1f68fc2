// src/specs/cacao.rs
//! Spec for the chocolate-bar ratings page.
//!
//! Every column is a run of cells sharing one class (`Rating`, `CocoaPercent`,
//! `Company`, `CompanyLocation`, `Origin`), first cell being the label. Each
//! selector is extracted and typed on its own, then the columns are zipped
//! into rows by `Table::assemble`.

use tracing::{debug, info};

use crate::column::build_column;
use crate::config::options::SelectorSet;
use crate::core::html::MarkupDocument;
use crate::error::CoreError;
use crate::extract::extract;
use crate::table::Table;

pub fn extract_table<D: MarkupDocument + ?Sized>(
    doc: &D,
    selectors: &SelectorSet,
) -> Result<Table, CoreError> {
    let mut columns = Vec::with_capacity(5);
    for (field, selector) in selectors.iter() {
        let fragments = extract(doc, field, selector)?;
        let column = build_column(&fragments, field)?;
        debug!(%field, rows = column.len(), "column built");
        columns.push(column);
    }

    let table = Table::assemble(columns)?;
    info!(rows = table.len(), "record table assembled");
    Ok(table)
}
