// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::column::FieldKind;
use crate::file::looks_like_dir_hint;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub pipeline: PipelineOptions,
    /// `None` = no table export this run.
    pub export: Option<ExportOptions>,
    pub output: OutputKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputKind {
    #[default]
    Text,
    Json,
}

/* ---------------- Pipeline ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(s!(DEFAULT_SOURCE_URL))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(u) => write!(f, "{u}"),
            Source::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// One CSS selector per extracted column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorSet {
    pub rating: String,
    pub cocoa: String,
    pub company: String,
    pub location: String,
    pub origin: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            rating: s!(RATING_SELECTOR),
            cocoa: s!(COCOA_SELECTOR),
            company: s!(COMPANY_SELECTOR),
            location: s!(LOCATION_SELECTOR),
            origin: s!(ORIGIN_SELECTOR),
        }
    }
}

impl SelectorSet {
    pub fn get(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::Rating => &self.rating,
            FieldKind::CocoaPercentage => &self.cocoa,
            FieldKind::Company => &self.company,
            FieldKind::CompanyLocation => &self.location,
            FieldKind::BarOrigin => &self.origin,
        }
    }

    /// Selectors in canonical column order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &str)> + '_ {
        FieldKind::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Size of every ranking (means and top bars).
    pub top_n: usize,
    /// Location for the per-location top bars; `None` skips that section.
    pub focus_location: Option<String>,
    pub histogram_bins: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            focus_location: Some(s!(DEFAULT_FOCUS_LOCATION)),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PipelineOptions {
    pub source: Source,
    pub selectors: SelectorSet,
    pub report: ReportOptions,
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl ExportOptions {
    /// Default output path; call `set_path` to change it.
    pub fn new(format: ExportFormat, include_headers: bool) -> Self {
        Self { format, include_headers, out_path: OutputPath::default() }
    }

    /// Final file path. A user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.ext {
            Some(e) => e.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        self.out_path.dir.join(join!(stem, ".", &ext))
    }

    /// Split user text into dir + stem (+ extension, if one was typed).
    /// A trailing separator keeps the default file name inside that directory.
    pub fn set_path(&mut self, text: &str) {
        let text = text.trim();
        if looks_like_dir_hint(text) {
            self.out_path = OutputPath { dir: PathBuf::from(text), ..OutputPath::default() };
            return;
        }
        let p = Path::new(text);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
