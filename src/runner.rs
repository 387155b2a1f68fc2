// src/runner.rs
//
// One run, start to finish:
//   load document -> parse -> cacao page (extract, type, assemble)
//   -> report -> optional export.
// Nothing is retried and nothing is kept between runs.

use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::{AppOptions, Source},
    core::{html::HtmlDocument, net},
    error::RunError,
    file::export_table,
    report::Report,
    specs,
    table::Table,
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub table: Table,
    pub report: Report,
    pub exported: Option<PathBuf>,
}

/// Raw document bytes from the configured source.
pub fn load_source(source: &Source) -> Result<Vec<u8>, RunError> {
    match source {
        Source::Url(url) => net::http_get(url),
        Source::File(path) => {
            info!(path = %path.display(), "reading document");
            Ok(std::fs::read(path)?)
        }
    }
}

/// Everything after the bytes are in hand. Network-free; used by tests.
pub fn run_on_bytes(bytes: &[u8], opts: &AppOptions) -> Result<RunSummary, RunError> {
    let doc = HtmlDocument::from_bytes(bytes);
    let table = specs::cacao::extract_table(&doc, &opts.pipeline.selectors)?;
    let report = Report::build(&table, &opts.pipeline.report)?;

    let exported = match &opts.export {
        Some(export) => Some(export_table(export, &table)?),
        None => None,
    };

    Ok(RunSummary { table, report, exported })
}

pub fn run(opts: &AppOptions) -> Result<RunSummary, RunError> {
    info!(source = %opts.pipeline.source, "run started");
    let bytes = load_source(&opts.pipeline.source)?;
    run_on_bytes(&bytes, opts)
}
