// src/aggregate.rs
//! Aggregate queries over a `Table`.
//!
//! Every function here only reads the table and returns fresh owned data (or
//! borrows of its rows). Grouping keeps first-encounter order, and all sorts are
//! stable, so equal values always come out in table order and repeated calls
//! give identical results.

use std::collections::HashMap;

use serde::Serialize;

use crate::column::KeyField;
use crate::error::CoreError;
use crate::table::{Record, Table};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupMean {
    pub key: String,
    pub mean: f64,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupShare {
    pub key: String,
    pub count: usize,
    /// 0-100
    pub percent: f64,
}

/// `rating = slope * cocoa_percent + intercept`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, cocoa_percent: f64) -> f64 {
        self.slope * cocoa_percent + self.intercept
    }
}

/// `[lower, upper)`; the last bin is closed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/* ---------------- Grouping ---------------- */

/// Group row indices by key, groups in first-seen order.
fn group_rows<'t>(table: &'t Table, key: KeyField) -> Vec<(&'t str, Vec<&'t Record>)> {
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Record>)> = Vec::new();
    for rec in table {
        let k = rec.key(key);
        let i = *slot.entry(k).or_insert_with(|| {
            groups.push((k, Vec::new()));
            groups.len() - 1
        });
        groups[i].1.push(rec);
    }
    groups
}

/// Mean rating per key, highest first, at most `n` groups.
pub fn mean_rating_by(table: &Table, key: KeyField, n: usize) -> Vec<GroupMean> {
    let mut means: Vec<GroupMean> = group_rows(table, key)
        .into_iter()
        .map(|(k, recs)| GroupMean {
            key: s!(k),
            mean: recs.iter().map(|r| r.rating).sum::<f64>() / recs.len() as f64,
            count: recs.len(),
        })
        .collect();

    means.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    means.truncate(n);
    means
}

/// Rows per key, most frequent first.
pub fn count_by(table: &Table, key: KeyField) -> Vec<GroupCount> {
    let mut counts: Vec<GroupCount> = group_rows(table, key)
        .into_iter()
        .map(|(k, recs)| GroupCount { key: s!(k), count: recs.len() })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// `count_by` plus each group's share of all rows.
pub fn share_by(table: &Table, key: KeyField) -> Vec<GroupShare> {
    let total = table.len();
    count_by(table, key)
        .into_iter()
        .map(|g| GroupShare {
            percent: if total == 0 { 0.0 } else { g.count as f64 * 100.0 / total as f64 },
            key: g.key,
            count: g.count,
        })
        .collect()
}

/* ---------------- Ranking ---------------- */

/// Top `n` rows by rating, optionally only those whose location equals `location`.
pub fn top_n_by_rating<'t>(table: &'t Table, n: usize, location: Option<&str>) -> Vec<&'t Record> {
    let mut rows: Vec<&Record> = table
        .iter()
        .filter(|r| location.is_none_or(|loc| r.company_location == loc))
        .collect();
    rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rows.truncate(n);
    rows
}

/* ---------------- Trend ---------------- */

/// Least-squares line of rating against cocoa percentage.
pub fn linear_fit(table: &Table) -> Result<LinearFit, CoreError> {
    let insufficient = |reason: String| CoreError::InsufficientData { operation: "linear fit", reason };

    let n = table.len();
    if n < 2 {
        return Err(insufficient(format!("need at least 2 rows, got {n}")));
    }

    let first_x = table.rows()[0].cocoa_percent;
    if table.iter().all(|r| r.cocoa_percent == first_x) {
        return Err(insufficient(format!("every row has cocoa percentage {first_x}")));
    }

    let nf = n as f64;
    let mean_x = table.iter().map(|r| r.cocoa_percent).sum::<f64>() / nf;
    let mean_y = table.iter().map(|r| r.rating).sum::<f64>() / nf;

    let (sxx, sxy) = table.iter().fold((0.0, 0.0), |(sxx, sxy), r| {
        let dx = r.cocoa_percent - mean_x;
        (sxx + dx * dx, sxy + dx * (r.rating - mean_y))
    });
    if sxx == 0.0 {
        return Err(insufficient(s!("cocoa percentage has zero variance")));
    }

    let slope = sxy / sxx;
    Ok(LinearFit { slope, intercept: mean_y - slope * mean_x })
}

/// End points of the fitted line across the observed cocoa range.
pub fn trend_line(table: &Table, fit: &LinearFit) -> Option<[(f64, f64); 2]> {
    let (lo, hi) = min_max(table.iter().map(|r| r.cocoa_percent))?;
    Some([(lo, fit.predict(lo)), (hi, fit.predict(hi))])
}

/* ---------------- Distribution ---------------- */

/// Upper bound on histogram bins.
pub const MAX_HISTOGRAM_BINS: usize = 1000;

/// Equal-width rating histogram over `[min, max]`. When every rating is the same
/// the range is widened to `value ± 0.5`.
pub fn rating_histogram(table: &Table, bins: usize) -> Result<Vec<HistogramBin>, CoreError> {
    let Some((mut lo, mut hi)) = min_max(table.iter().map(|r| r.rating)) else {
        return Err(CoreError::InsufficientData {
            operation: "rating histogram",
            reason: s!("table is empty"),
        });
    };
    if bins > MAX_HISTOGRAM_BINS {
        return Err(CoreError::InsufficientData {
            operation: "rating histogram",
            reason: format!("{bins} bins exceeds the limit of {MAX_HISTOGRAM_BINS}"),
        });
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let bins = bins.max(1);
    let width = (hi - lo) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for r in table {
        let i = (((r.rating - lo) / width) as usize).min(bins - 1);
        out[i].count += 1;
    }
    Ok(out)
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, x| match acc {
        None => Some((x, x)),
        Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
    })
}
