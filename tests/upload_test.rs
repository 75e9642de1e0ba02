//! ファイル読み込みテスト

use gtm_dashboard::uploader;
use gtm_dashboard_common::export::excel_core::generate_workbook_buffer;
use gtm_dashboard_common::{parse_csv, CellValue, DashboardData, ObjectionPalette};
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

const DEALS_CSV: &str = "\
Account,Owner,Status,Amount,Objection
Acme,Dana,Open,\"$120,000\",Objection::Pricing
Globex,Lee,Won,80000,
";

#[test]
fn test_load_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("deals.csv");
    std::fs::write(&path, DEALS_CSV).unwrap();

    let dataset = uploader::load_file(&path).expect("読み込み失敗");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.columns()[0], "Account");
    assert_eq!(dataset.records()[0].get("Amount"), Some(&CellValue::Number(120_000.0)));
}

#[test]
fn test_load_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("deals.json");
    std::fs::write(&path, r#"[{"Account": "Acme", "Amount": 10}]"#).unwrap();

    let dataset = uploader::load_file(&path).expect("読み込み失敗");
    assert_eq!(dataset.len(), 1);
}

/// xlsx は先頭シート（Records）を読む
#[test]
fn test_load_xlsx_first_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("deals.xlsx");

    let source = parse_csv(DEALS_CSV).expect("パース失敗");
    let bytes = generate_workbook_buffer(
        &source,
        &DashboardData::from_dataset(&source),
        &ObjectionPalette::default(),
        "$",
    )
    .expect("Excel生成失敗");
    std::fs::write(&path, bytes).unwrap();

    let dataset = uploader::load_file(&path).expect("読み込み失敗");
    assert_eq!(dataset.columns(), source.columns());
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records()[1].get("Account"), Some(&CellValue::Text("Globex".into())));
    assert_eq!(dataset.records()[1].get("Amount"), Some(&CellValue::Number(80_000.0)));
}

#[test]
fn test_load_csv_duplicate_headers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.csv");
    std::fs::write(&path, "Account,Note,Note\nAcme,first,second\n").unwrap();

    let dataset = uploader::load_file(&path).expect("読み込み失敗");
    assert_eq!(dataset.columns(), ["Account", "Note", "Note 2"]);
    assert_eq!(dataset.row_cells(0), vec!["Acme", "first", "second"]);
}

/// xlsx の重複ヘッダも別列として残る
#[test]
fn test_load_xlsx_duplicate_headers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, text) in ["Account", "Note", "Note"].iter().enumerate() {
        sheet.write_string(0, col as u16, *text).unwrap();
    }
    for (col, text) in ["Acme", "first", "second"].iter().enumerate() {
        sheet.write_string(1, col as u16, *text).unwrap();
    }
    workbook.save(&path).expect("Excel生成失敗");

    let dataset = uploader::load_file(&path).expect("読み込み失敗");
    assert_eq!(dataset.columns(), ["Account", "Note", "Note 2"]);
    assert_eq!(dataset.records()[0].get("Note"), Some(&CellValue::Text("first".into())));
    assert_eq!(dataset.records()[0].get("Note 2"), Some(&CellValue::Text("second".into())));
}
