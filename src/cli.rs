// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::consts::{
    COCOA_SELECTOR, COMPANY_SELECTOR, DEFAULT_FOCUS_LOCATION, DEFAULT_HISTOGRAM_BINS,
    DEFAULT_SOURCE_URL, DEFAULT_TOP_N, LOCATION_SELECTOR, ORIGIN_SELECTOR, RATING_SELECTOR,
};
use crate::config::options::{
    AppOptions, ExportFormat, ExportOptions, OutputKind, PipelineOptions, ReportOptions,
    SelectorSet, Source,
};
use crate::aggregate::MAX_HISTOGRAM_BINS;
use crate::runner;

#[derive(Parser, Debug)]
#[command(
    name = "choco_scrape",
    version,
    about = "Scrape chocolate-bar ratings from HTML and report rankings, trend and distribution"
)]
pub struct Cli {
    /// Page to fetch
    #[arg(long, default_value = DEFAULT_SOURCE_URL, conflicts_with = "file")]
    pub url: String,

    /// Read the page from a local file instead of fetching it
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Size of every ranking
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Location for the per-location top bars
    #[arg(long, default_value = DEFAULT_FOCUS_LOCATION, conflicts_with = "no_location")]
    pub location: String,

    /// Skip the per-location top bars
    #[arg(long)]
    pub no_location: bool,

    /// Rating histogram bins (1-1000)
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS, value_parser = parse_bins)]
    pub bins: usize,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Export the record table to this file (or directory, with a trailing '/')
    #[arg(short = 'o', long)]
    pub export: Option<String>,

    /// Export format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Write a header row in the export
    #[arg(long)]
    pub include_headers: bool,

    #[arg(long, default_value = RATING_SELECTOR)]
    pub rating_selector: String,
    #[arg(long, default_value = COCOA_SELECTOR)]
    pub cocoa_selector: String,
    #[arg(long, default_value = COMPANY_SELECTOR)]
    pub company_selector: String,
    #[arg(long, default_value = LOCATION_SELECTOR)]
    pub location_selector: String,
    #[arg(long, default_value = ORIGIN_SELECTOR)]
    pub origin_selector: String,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

fn parse_bins(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(s!("must be at least 1")),
        Ok(n) if n > MAX_HISTOGRAM_BINS => Err(format!("must be at most {MAX_HISTOGRAM_BINS}")),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub fn into_options(self) -> AppOptions {
        let source = match self.file {
            Some(path) => Source::File(path),
            None => Source::Url(self.url),
        };

        let export = self.export.map(|text| {
            let mut e = ExportOptions::new(self.format.into(), self.include_headers);
            e.set_path(&text);
            e
        });

        AppOptions {
            pipeline: PipelineOptions {
                source,
                selectors: SelectorSet {
                    rating: self.rating_selector,
                    cocoa: self.cocoa_selector,
                    company: self.company_selector,
                    location: self.location_selector,
                    origin: self.origin_selector,
                },
                report: ReportOptions {
                    top_n: self.top,
                    focus_location: (!self.no_location).then_some(self.location),
                    histogram_bins: self.bins,
                },
            },
            export,
            output: if self.json { OutputKind::Json } else { OutputKind::Text },
        }
    }
}

/// Parse args, run once, print the report to stdout.
pub fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let opts = cli.into_options();
    let summary = runner::run(&opts)?;

    match opts.output {
        OutputKind::Json => println!("{}", serde_json::to_string_pretty(&summary.report)?),
        OutputKind::Text => print!("{}", summary.report),
    }
    if let Some(path) = &summary.exported {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}
