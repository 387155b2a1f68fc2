// tests/table_assembly.rs
//
// Typed columns built from fragments, then zipped into a table.
//
use choco_scrape::column::{build_column, Column, FieldKind};
use choco_scrape::error::CoreError;
use choco_scrape::extract::RawFragment;
use choco_scrape::table::Table;

fn fragments(field: FieldKind, texts: &[&str]) -> Vec<RawFragment> {
    texts
        .iter()
        .enumerate()
        .map(|(index, t)| RawFragment { field, index, text: t.to_string() })
        .collect()
}

fn column(field: FieldKind, n: usize) -> Column {
    let texts: Vec<String> = (0..n)
        .map(|i| match field {
            FieldKind::Rating => format!("{}", 1 + i % 5),
            FieldKind::CocoaPercentage => format!("{}%", 50 + i),
            _ => format!("{field} {i}"),
        })
        .collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    build_column(&fragments(field, &refs), field).unwrap()
}

fn columns(lens: [usize; 5]) -> Vec<Column> {
    FieldKind::ALL.iter().zip(lens).map(|(f, n)| column(*f, n)).collect()
}

#[test]
fn cocoa_fragment_with_percent_is_a_number() {
    let col = build_column(&fragments(FieldKind::CocoaPercentage, &["70%"]), FieldKind::CocoaPercentage).unwrap();
    assert_eq!(col, Column::CocoaPercentage(vec![70.0]));
}

#[test]
fn cocoa_fragment_without_percent_is_a_format_error() {
    let err = build_column(&fragments(FieldKind::CocoaPercentage, &["70"]), FieldKind::CocoaPercentage).unwrap_err();
    assert!(matches!(err, CoreError::Format { field: FieldKind::CocoaPercentage, row: 0, .. }));
}

#[test]
fn five_equal_columns_make_five_records() {
    let table = Table::assemble(columns([5, 5, 5, 5, 5])).unwrap();
    assert_eq!(table.len(), 5);
    for (i, r) in table.iter().enumerate() {
        assert_eq!(r.company, format!("Company {i}"));
        assert_eq!(r.company_location, format!("CompanyLocation {i}"));
        assert_eq!(r.cocoa_percent, 50.0 + i as f64);
    }
}

#[test]
fn short_column_names_itself_and_both_lengths() {
    let err = Table::assemble(columns([5, 5, 5, 5, 4])).unwrap_err();
    assert_eq!(err, CoreError::Alignment { field: FieldKind::BarOrigin, expected: 5, found: 4 });
    let msg = err.to_string();
    assert!(msg.contains("BarOrigin") && msg.contains('4') && msg.contains('5'), "{msg}");
}

#[test]
fn any_odd_column_is_reported() {
    for odd in 0..5 {
        let mut lens = [6; 5];
        lens[odd] = 2;
        let err = Table::assemble(columns(lens)).unwrap_err();
        assert_eq!(err, CoreError::Alignment { field: FieldKind::ALL[odd], expected: 6, found: 2 });
    }
}

#[test]
fn column_order_does_not_matter() {
    let mut cols = columns([3; 5]);
    cols.reverse();
    let table = Table::assemble(cols).unwrap();
    assert_eq!(table.rows()[2].company, "Company 2");
    assert_eq!(table.rows()[2].rating, 3.0);
}
