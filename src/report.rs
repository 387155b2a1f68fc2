// src/report.rs
//
// Everything a front end needs to draw the dashboard, as plain data:
// histogram bins, ranked means, top bars, the trend line, location shares.
// Drawing is someone else's job; `Display` gives a terminal rendering and
// `Serialize` gives JSON.

use std::fmt;

use serde::Serialize;

use crate::aggregate::{self, GroupMean, GroupShare, HistogramBin, LinearFit};
use crate::column::KeyField;
use crate::config::options::ReportOptions;
use crate::error::CoreError;
use crate::table::{Record, Table};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FocusLocation {
    pub location: String,
    pub top_bars: Vec<Record>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trend {
    pub fit: LinearFit,
    /// Two points spanning the observed cocoa range.
    pub line: [(f64, f64); 2],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub rows: usize,
    pub rating_histogram: Vec<HistogramBin>,
    pub top_companies: Vec<GroupMean>,
    pub top_locations: Vec<GroupMean>,
    pub top_bars: Vec<Record>,
    pub focus: Option<FocusLocation>,
    pub trend: Trend,
    pub location_shares: Vec<GroupShare>,
}

impl Report {
    /// Run every aggregate the dashboard shows. Any failure aborts the report.
    pub fn build(table: &Table, opts: &ReportOptions) -> Result<Report, CoreError> {
        let n = opts.top_n;
        let owned = |rows: Vec<&Record>| rows.into_iter().cloned().collect::<Vec<_>>();

        let fit = aggregate::linear_fit(table)?;
        let line = aggregate::trend_line(table, &fit).ok_or_else(|| CoreError::InsufficientData {
            operation: "trend line",
            reason: s!("table is empty"),
        })?;

        Ok(Report {
            rows: table.len(),
            rating_histogram: aggregate::rating_histogram(table, opts.histogram_bins)?,
            top_companies: aggregate::mean_rating_by(table, KeyField::Company, n),
            top_locations: aggregate::mean_rating_by(table, KeyField::CompanyLocation, n),
            top_bars: owned(aggregate::top_n_by_rating(table, n, None)),
            focus: opts.focus_location.as_ref().map(|loc| FocusLocation {
                location: loc.clone(),
                top_bars: owned(aggregate::top_n_by_rating(table, n, Some(loc.as_str()))),
            }),
            trend: Trend { fit, line },
            location_shares: aggregate::share_by(table, KeyField::CompanyLocation),
        })
    }
}

/* ---------------- Terminal rendering ---------------- */

const BAR_WIDTH: usize = 40;

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

fn write_means(f: &mut fmt::Formatter<'_>, title: &str, means: &[GroupMean]) -> fmt::Result {
    writeln!(f, "\n{title}")?;
    writeln!(f, "{:>3} | {:<28} | {:>5} | {:>4}", "#", "Name", "Mean", "Bars")?;
    writeln!(f, "{}", "-".repeat(50))?;
    for (i, g) in means.iter().enumerate() {
        writeln!(f, "{:>3} | {:<28} | {:>5.2} | {:>4}", i + 1, truncate(&g.key, 28), g.mean, g.count)?;
    }
    Ok(())
}

fn write_bars(f: &mut fmt::Formatter<'_>, title: &str, bars: &[Record]) -> fmt::Result {
    writeln!(f, "\n{title}")?;
    if bars.is_empty() {
        return writeln!(f, "  (no bars)");
    }
    writeln!(
        f,
        "{:>3} | {:>6} | {:>5} | {:<24} | {:<16} | {:<24}",
        "#", "Rating", "Cocoa", "Company", "Location", "Origin"
    )?;
    writeln!(f, "{}", "-".repeat(95))?;
    for (i, r) in bars.iter().enumerate() {
        writeln!(
            f,
            "{:>3} | {:>6.2} | {:>4}% | {:<24} | {:<16} | {:<24}",
            i + 1,
            r.rating,
            r.cocoa_percent,
            truncate(&r.company, 24),
            truncate(&r.company_location, 16),
            truncate(&r.bar_origin, 24),
        )?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} bars reviewed", self.rows)?;

        writeln!(f, "\nRatings of chocolate bars")?;
        let peak = self.rating_histogram.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        for b in &self.rating_histogram {
            let len = b.count * BAR_WIDTH / peak;
            writeln!(f, "  {:>4.2}-{:<4.2} {:>5} {}", b.lower, b.upper, b.count, "#".repeat(len))?;
        }

        write_means(f, "Top companies by mean rating", &self.top_companies)?;
        write_means(f, "Top company locations by mean rating", &self.top_locations)?;
        write_bars(f, "Top bars", &self.top_bars)?;
        if let Some(focus) = &self.focus {
            write_bars(f, &format!("Top bars from {}", focus.location), &focus.top_bars)?;
        }

        let t = &self.trend;
        writeln!(f, "\nRating vs cocoa percentage")?;
        writeln!(f, "  rating = {:.5} * cocoa + {:.5}", t.fit.slope, t.fit.intercept)?;
        writeln!(
            f,
            "  trend {:.0}% -> {:.2}, {:.0}% -> {:.2}",
            t.line[0].0, t.line[0].1, t.line[1].0, t.line[1].1
        )?;

        writeln!(f, "\nLocations of chocolate bars")?;
        for s in &self.location_shares {
            writeln!(f, "  {:<24} {:>5} {:>4.0}%", truncate(&s.key, 24), s.count, s.percent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(rating: f64, cocoa: f64, company: &str, loc: &str) -> Record {
        Record {
            rating,
            cocoa_percent: cocoa,
            company: s!(company),
            company_location: s!(loc),
            bar_origin: s!("Somewhere"),
        }
    }

    fn table() -> Table {
        Table::from_records(vec![
            rec(3.0, 50.0, "Alpha", "Brazil"),
            rec(4.0, 70.0, "Beta", "France"),
            rec(3.5, 60.0, "Gamma", "Brazil"),
        ])
    }

    #[test]
    fn report_gathers_every_section() {
        let r = Report::build(&table(), &ReportOptions::default()).unwrap();
        assert_eq!(r.rows, 3);
        assert_eq!(r.top_companies[0].key, "Beta");
        assert_eq!(r.top_locations[0].key, "France");
        assert_eq!(r.top_bars.len(), 3);
        let focus = r.focus.as_ref().unwrap();
        assert_eq!(focus.location, "Brazil");
        assert_eq!(focus.top_bars.iter().map(|b| b.company.as_str()).collect::<Vec<_>>(), vec!["Gamma", "Alpha"]);
        assert_eq!(r.location_shares[0].key, "Brazil");
        assert_eq!(r.rating_histogram.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn no_focus_location_skips_section() {
        let opts = ReportOptions { focus_location: None, ..ReportOptions::default() };
        let r = Report::build(&table(), &opts).unwrap();
        assert!(r.focus.is_none());
    }

    #[test]
    fn single_row_cannot_be_reported() {
        let t = Table::from_records(vec![rec(3.0, 50.0, "Alpha", "Brazil")]);
        assert!(matches!(
            Report::build(&t, &ReportOptions::default()),
            Err(CoreError::InsufficientData { .. })
        ));
    }

    #[test]
    fn text_rendering_mentions_sections() {
        let text = Report::build(&table(), &ReportOptions::default()).unwrap().to_string();
        assert!(text.contains("3 bars reviewed"));
        assert!(text.contains("Top bars from Brazil"));
        assert!(text.contains("rating = 0.05000 * cocoa"));
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("Chocolate Makers", 10), "Chocola...");
        assert_eq!(truncate("Short", 10), "Short");
    }
}
