// src/column.rs
//! Typed column builder.
//!
//! Each extracted fragment is converted on its own (`convert`), and a whole
//! field's fragments become one `Column`. Conversion is pure: one output per
//! input, same order, no partial columns on failure.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::core::sanitize::strip_unit_suffix;
use crate::error::CoreError;
use crate::extract::RawFragment;

/// The five columns of the reviews table, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FieldKind {
    Rating,
    CocoaPercentage,
    Company,
    CompanyLocation,
    BarOrigin,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Rating,
        FieldKind::CocoaPercentage,
        FieldKind::Company,
        FieldKind::CompanyLocation,
        FieldKind::BarOrigin,
    ];

    /// Column header used for export.
    pub fn header(&self) -> &'static str {
        match self {
            FieldKind::Rating => "Rating",
            FieldKind::CocoaPercentage => "CocoaPercentage",
            FieldKind::Company => "Company",
            FieldKind::CompanyLocation => "CompanyLocation",
            FieldKind::BarOrigin => "BarOrigin",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// String columns that can be used as grouping keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum KeyField {
    Company,
    CompanyLocation,
    BarOrigin,
}

impl From<KeyField> for FieldKind {
    fn from(k: KeyField) -> Self {
        match k {
            KeyField::Company => FieldKind::Company,
            KeyField::CompanyLocation => FieldKind::CompanyLocation,
            KeyField::BarOrigin => FieldKind::BarOrigin,
        }
    }
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldKind::from(*self).fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypedField {
    Rating(f64),
    CocoaPercentage(f64),
    Company(String),
    CompanyLocation(String),
    BarOrigin(String),
}

impl TypedField {
    pub fn kind(&self) -> FieldKind {
        match self {
            TypedField::Rating(_) => FieldKind::Rating,
            TypedField::CocoaPercentage(_) => FieldKind::CocoaPercentage,
            TypedField::Company(_) => FieldKind::Company,
            TypedField::CompanyLocation(_) => FieldKind::CompanyLocation,
            TypedField::BarOrigin(_) => FieldKind::BarOrigin,
        }
    }
}

/// One typed column. Lengths are checked only at table assembly.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Rating(Vec<f64>),
    CocoaPercentage(Vec<f64>),
    Company(Vec<String>),
    CompanyLocation(Vec<String>),
    BarOrigin(Vec<String>),
}

impl Column {
    pub fn kind(&self) -> FieldKind {
        match self {
            Column::Rating(_) => FieldKind::Rating,
            Column::CocoaPercentage(_) => FieldKind::CocoaPercentage,
            Column::Company(_) => FieldKind::Company,
            Column::CompanyLocation(_) => FieldKind::CompanyLocation,
            Column::BarOrigin(_) => FieldKind::BarOrigin,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Rating(v) | Column::CocoaPercentage(v) => v.len(),
            Column::Company(v) | Column::CompanyLocation(v) | Column::BarOrigin(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    fn empty(kind: FieldKind, capacity: usize) -> Self {
        match kind {
            FieldKind::Rating => Column::Rating(Vec::with_capacity(capacity)),
            FieldKind::CocoaPercentage => Column::CocoaPercentage(Vec::with_capacity(capacity)),
            FieldKind::Company => Column::Company(Vec::with_capacity(capacity)),
            FieldKind::CompanyLocation => Column::CompanyLocation(Vec::with_capacity(capacity)),
            FieldKind::BarOrigin => Column::BarOrigin(Vec::with_capacity(capacity)),
        }
    }

    /// Append a value of this column's kind. Callers guarantee the kinds match.
    fn push(&mut self, value: TypedField) {
        match (self, value) {
            (Column::Rating(v), TypedField::Rating(x))
            | (Column::CocoaPercentage(v), TypedField::CocoaPercentage(x)) => v.push(x),
            (Column::Company(v), TypedField::Company(x))
            | (Column::CompanyLocation(v), TypedField::CompanyLocation(x))
            | (Column::BarOrigin(v), TypedField::BarOrigin(x)) => v.push(x),
            (col, val) => unreachable!("{} value pushed into {} column", val.kind(), col.kind()),
        }
    }
}

/* ---------------- Conversion ---------------- */

const RATING_MIN: f64 = 1.0;
const RATING_MAX: f64 = 5.0;

/// Convert one fragment into a value of `kind`.
pub fn convert(fragment: &RawFragment, kind: FieldKind) -> Result<TypedField, CoreError> {
    let fail = |reason: &str| CoreError::Format {
        field: kind,
        row: fragment.index,
        fragment: fragment.text.clone(),
        reason: s!(reason),
    };

    if fragment.field != kind {
        return Err(fail(&format!("fragment belongs to {}", fragment.field)));
    }

    let text = fragment.text.as_str();
    match kind {
        FieldKind::Rating => {
            let x = parse_number(text.trim()).ok_or_else(|| fail("not a number"))?;
            if !(RATING_MIN..=RATING_MAX).contains(&x) {
                warn!(row = fragment.index, rating = x, "rating outside 1-5");
            }
            Ok(TypedField::Rating(x))
        }
        FieldKind::CocoaPercentage => {
            let digits = strip_unit_suffix(text, '%').ok_or_else(|| fail("missing `%` suffix"))?;
            let x = parse_number(digits).ok_or_else(|| fail("not a number"))?;
            if !(0.0..=100.0).contains(&x) {
                return Err(fail("percentage outside 0-100"));
            }
            Ok(TypedField::CocoaPercentage(x))
        }
        FieldKind::Company => required(text).map(TypedField::Company).ok_or_else(|| fail("empty")),
        FieldKind::CompanyLocation => {
            required(text).map(TypedField::CompanyLocation).ok_or_else(|| fail("empty"))
        }
        FieldKind::BarOrigin => Ok(TypedField::BarOrigin(s!(text.trim()))),
    }
}

/// Convert a field's fragments into one column, in order.
pub fn build_column(fragments: &[RawFragment], kind: FieldKind) -> Result<Column, CoreError> {
    let mut col = Column::empty(kind, fragments.len());
    for frag in fragments {
        col.push(convert(frag, kind)?);
    }
    Ok(col)
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Trimmed, non-empty. Inner whitespace is left as the page has it.
fn required(s: &str) -> Option<String> {
    let v = s.trim();
    (!v.is_empty()).then(|| s!(v))
}
