// src/export.rs
//
// Table export as CSV/TSV. Rows go out in table order, cells in canonical
// column order; the header row is optional.

use std::io::Write;

use csv::WriterBuilder;

use crate::config::options::ExportFormat;
use crate::error::RunError;
use crate::table::Table;

/// Write every record of `table` to `w`.
pub fn write_table<W: Write>(
    w: W,
    table: &Table,
    format: ExportFormat,
    include_headers: bool,
) -> Result<(), RunError> {
    let mut out = WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false)
        .from_writer(w);

    if include_headers {
        out.write_record(Table::headers())?;
    }
    for rec in table {
        out.write_record(rec.to_cells())?;
    }
    out.flush()?;
    Ok(())
}

/// Whole export as a string (clipboard, stdout, tests).
pub fn to_export_string(
    table: &Table,
    format: ExportFormat,
    include_headers: bool,
) -> Result<String, RunError> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, table, format, include_headers)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Record;

    fn table() -> Table {
        Table::from_records(vec![
            Record {
                rating: 3.75,
                cocoa_percent: 63.0,
                company: s!("A. Morin"),
                company_location: s!("France"),
                bar_origin: s!("Bali (west), Sukrama"),
            },
            Record {
                rating: 2.5,
                cocoa_percent: 70.5,
                company: s!("Say \"Cocoa\""),
                company_location: s!("U.S.A."),
                bar_origin: s!(),
            },
        ])
    }

    #[test]
    fn csv_quotes_separators_and_quotes() {
        let s = to_export_string(&table(), ExportFormat::Csv, true).unwrap();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], "Rating,CocoaPercentage,Company,CompanyLocation,BarOrigin");
        assert_eq!(lines[1], "3.75,63,A. Morin,France,\"Bali (west), Sukrama\"");
        assert_eq!(lines[2], "2.5,70.5,\"Say \"\"Cocoa\"\"\",U.S.A.,");
    }

    #[test]
    fn tsv_without_headers() {
        let s = to_export_string(&table(), ExportFormat::Tsv, false).unwrap();
        assert_eq!(s.lines().next(), Some("3.75\t63\tA. Morin\tFrance\tBali (west), Sukrama"));
        assert_eq!(s.lines().count(), 2);
    }
}
