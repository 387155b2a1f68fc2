// tests/pipeline_e2e.rs
//
// Whole run on the saved sample page, no network.
//
use std::fs;
use std::path::PathBuf;

use choco_scrape::config::options::{AppOptions, ExportFormat, ExportOptions};
use choco_scrape::error::{CoreError, RunError};
use choco_scrape::runner::run_on_bytes;

const SAMPLE: &str = include_str!("fixtures/cacao_sample.html");

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("choco_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn sample_page_report() {
    let summary = run_on_bytes(SAMPLE.as_bytes(), &AppOptions::default()).unwrap();
    let r = &summary.report;

    assert_eq!(r.rows, 12);
    assert_eq!(summary.table.rows()[5].company, "Akesson's (Pralus)");
    assert_eq!(summary.table.rows()[8].company, "Baianí");

    let companies: Vec<&str> = r.top_companies.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(
        companies,
        vec!["Amedei", "Akesson's (Pralus)", "Arete", "Baianí", "AMMA", "A. Morin", "Aequare (Gianduja)", "Hotel Chocolat"]
    );

    let locations: Vec<&str> = r.top_locations.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(locations, vec!["Italy", "Switzerland", "U.S.A.", "Brazil", "France", "Ecuador", "U.K."]);

    let top3: Vec<(&str, f64)> = r.top_bars.iter().take(3).map(|b| (b.bar_origin.as_str(), b.rating)).collect();
    assert_eq!(top3, vec![("Chuao", 5.0), ("Porcelana", 4.0), ("Agua Grande", 3.75)]);

    let focus = r.focus.as_ref().unwrap();
    let brazil: Vec<&str> = focus.top_bars.iter().map(|b| b.bar_origin.as_str()).collect();
    assert_eq!(brazil, vec!["Monte Alegre, D. Badero", "Bahia", "Catongo"]);

    let shares: Vec<(&str, usize)> = r.location_shares.iter().map(|s| (s.key.as_str(), s.count)).collect();
    assert_eq!(&shares[..3], &[("France", 3), ("Brazil", 3), ("Italy", 2)]);
    assert_eq!(shares.iter().map(|s| s.1).sum::<usize>(), 12);

    assert_eq!(r.rating_histogram.len(), 10);
    assert_eq!(r.rating_histogram.iter().map(|b| b.count).sum::<usize>(), 12);
    assert_eq!(r.trend.line[0].0, 50.0);
    assert_eq!(r.trend.line[1].0, 75.0);
}

#[test]
fn report_serializes_to_json() {
    let summary = run_on_bytes(SAMPLE.as_bytes(), &AppOptions::default()).unwrap();
    let json = serde_json::to_value(&summary.report).unwrap();
    assert_eq!(json["rows"], 12);
    assert_eq!(json["top_companies"][0]["key"], "Amedei");
    assert!(json["trend"]["fit"]["slope"].is_number());
}

#[test]
fn export_writes_csv_with_headers() {
    let dir = tmp_dir("export");
    let mut export = ExportOptions::new(ExportFormat::Csv, true);
    export.set_path(dir.join("bars").to_str().unwrap());

    let opts = AppOptions { export: Some(export), ..AppOptions::default() };
    let summary = run_on_bytes(SAMPLE.as_bytes(), &opts).unwrap();

    let path = summary.exported.unwrap();
    assert!(path.to_string_lossy().ends_with("bars.csv"));
    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "Rating,CocoaPercentage,Company,CompanyLocation,BarOrigin");
    assert_eq!(lines[1], "3.75,63,A. Morin,France,Agua Grande");
}

#[test]
fn user_extension_survives_format() {
    let dir = tmp_dir("ext");
    let mut export = ExportOptions::new(ExportFormat::Tsv, false);
    export.set_path(dir.join("bars.txt").to_str().unwrap());
    assert!(export.out_path().to_string_lossy().ends_with("bars.txt"));
}

#[test]
fn malformed_page_yields_no_table() {
    let broken = SAMPLE.replacen(">63%<", ">63<", 1);
    let err = run_on_bytes(broken.as_bytes(), &AppOptions::default()).unwrap_err();
    match err.as_core() {
        Some(CoreError::Format { row, fragment, .. }) => {
            assert_eq!(*row, 0);
            assert_eq!(fragment, "63");
        }
        _ => panic!("expected a format error, got {err:?}"),
    }
    assert!(matches!(err, RunError::Core(_)));
}
