// src/table.rs
//
// Record table.
//
// Columns are extracted independently, so the only thing tying row i of the
// rating column to row i of the company column is extraction order. `assemble`
// is the single place rows get built, and it refuses unequal lengths.
// Local reorderings within one column cannot be detected here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::column::{Column, FieldKind, KeyField};
use crate::error::CoreError;

/// One chocolate bar review.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    pub rating: f64,
    pub cocoa_percent: f64,
    pub company: String,
    pub company_location: String,
    pub bar_origin: String,
}

impl Record {
    pub fn key(&self, key: KeyField) -> &str {
        match key {
            KeyField::Company => &self.company,
            KeyField::CompanyLocation => &self.company_location,
            KeyField::BarOrigin => &self.bar_origin,
        }
    }

    /// Cells in canonical column order, for export.
    pub fn to_cells(&self) -> [String; 5] {
        [
            self.rating.to_string(),
            self.cocoa_percent.to_string(),
            self.company.clone(),
            self.company_location.clone(),
            self.bar_origin.clone(),
        ]
    }
}

/// Rows in document order. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    rows: Vec<Record>,
}

impl Table {
    /// Zip five columns into rows.
    ///
    /// Every column must be present and all must have the same length. The
    /// expected length is the most common one (ties go to the earlier field);
    /// the first field in canonical order that differs is reported. A missing
    /// column counts as length 0. A later column of the same kind replaces an
    /// earlier one.
    pub fn assemble(columns: impl IntoIterator<Item = Column>) -> Result<Table, CoreError> {
        let mut by_kind: BTreeMap<FieldKind, Column> = BTreeMap::new();
        for col in columns {
            by_kind.insert(col.kind(), col);
        }

        let lens: Vec<(FieldKind, usize)> = FieldKind::ALL
            .iter()
            .map(|k| (*k, by_kind.get(k).map_or(0, Column::len)))
            .collect();
        let expected = modal_len(&lens);
        if let Some(&(field, found)) = lens.iter().find(|(_, n)| *n != expected) {
            return Err(CoreError::Alignment { field, expected, found });
        }

        let mut take = |k: FieldKind| by_kind.remove(&k);
        let (
            Some(Column::Rating(ratings)),
            Some(Column::CocoaPercentage(cocoa)),
            Some(Column::Company(companies)),
            Some(Column::CompanyLocation(locations)),
            Some(Column::BarOrigin(origins)),
        ) = (
            take(FieldKind::Rating),
            take(FieldKind::CocoaPercentage),
            take(FieldKind::Company),
            take(FieldKind::CompanyLocation),
            take(FieldKind::BarOrigin),
        )
        else {
            unreachable!("every kind was length-checked above")
        };

        let rows = ratings
            .into_iter()
            .zip(cocoa)
            .zip(companies)
            .zip(locations)
            .zip(origins)
            .map(|((((rating, cocoa_percent), company), company_location), bar_origin)| Record {
                rating,
                cocoa_percent,
                company,
                company_location,
                bar_origin,
            })
            .collect();

        Ok(Table { rows })
    }

    /// Build directly from records (tests, fixtures, other sources).
    pub fn from_records(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Record] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.rows.iter() }

    pub fn headers() -> [&'static str; 5] {
        FieldKind::ALL.map(|k| k.header())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter { self.rows.iter() }
}

/// Most common length; ties go to whichever appears first in `lens`.
fn modal_len(lens: &[(FieldKind, usize)]) -> usize {
    let mut best = (0usize, 0usize); // (len, votes)
    for (_, n) in lens {
        let votes = lens.iter().filter(|(_, m)| m == n).count();
        if votes > best.1 {
            best = (*n, votes);
        }
    }
    best.0
}
