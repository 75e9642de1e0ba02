//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use gtm_dashboard::error::DashboardError;
use gtm_dashboard::uploader;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = uploader::load_file(Path::new("/nonexistent/path/deals.csv"));
    assert!(matches!(result, Err(DashboardError::FileNotFound(_))));
}

/// 未対応の拡張子
#[test]
fn test_load_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("deals.pdf");
    std::fs::write(&path, "%PDF-1.7").unwrap();

    let result = uploader::load_file(&path);
    assert!(matches!(result, Err(DashboardError::UnsupportedFormat(ext)) if ext == "pdf"));
}

/// ヘッダのみのCSV
#[test]
fn test_load_header_only_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "Account,Amount\n").unwrap();

    let result = uploader::load_file(&path);
    assert!(matches!(result, Err(DashboardError::NoData(_))));
}

/// DashboardErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        DashboardError::Config("テスト設定エラー".to_string()),
        DashboardError::FileNotFound("deals.csv".to_string()),
        DashboardError::UnsupportedFormat("pdf".to_string()),
        DashboardError::NoData("https://example.test".to_string()),
        DashboardError::ExcelGeneration("Excel生成エラー".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DashboardError = io_err.into();

    assert!(matches!(err, DashboardError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: DashboardError = json_err.into();

    assert!(matches!(err, DashboardError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = gtm_dashboard_common::Error::Fetch("HTTP 404".to_string());
    let err: DashboardError = common_err.into();

    assert!(matches!(err, DashboardError::Data(_)));
    assert_eq!(format!("{}", err), "Fetch failed: HTTP 404");
}
