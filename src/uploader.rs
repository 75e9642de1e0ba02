//! ローカルファイル読み込み
//!
//! csv / tsv / json は共通パーサー、xlsx / xls / ods は calamine で読む

use crate::error::{DashboardError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use gtm_dashboard_common::parser::{file_extension, parse_cell, parse_upload, unique_headers};
use gtm_dashboard_common::{CellValue, Dataset, Error, Record};
use std::path::Path;

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// ファイルを読み込んで Dataset にする
pub fn load_file(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(DashboardError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let is_workbook = file_extension(&file_name)
        .map(|ext| WORKBOOK_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);

    let dataset = if is_workbook {
        read_workbook(path)?
    } else {
        let text = std::fs::read_to_string(path)?;
        parse_upload(&file_name, &text).map_err(|e| match e {
            Error::UnsupportedFormat(ext) => DashboardError::UnsupportedFormat(ext),
            Error::NoData => DashboardError::NoData(path.display().to_string()),
            other => DashboardError::Data(other),
        })?
    };

    if dataset.is_empty() {
        return Err(DashboardError::NoData(path.display().to_string()));
    }

    log::info!("loaded {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// 先頭シートを読む（1行目はヘッダ）
fn read_workbook(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| DashboardError::NoData(path.display().to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Dataset::default());
    };

    let columns = unique_headers(header.iter().map(|cell| cell.to_string()));

    let mut records = Vec::new();
    for row in rows {
        let mut record = Record::new();
        for (column, cell) in columns.iter().zip(row.iter()) {
            record = record.with(column.clone(), workbook_cell(cell));
        }
        if !record.is_blank() {
            records.push(record);
        }
    }

    log::debug!("sheet '{}': {} rows", sheet_name, records.len());
    Ok(Dataset::new(columns, records))
}

fn workbook_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => parse_cell(s),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Text(other.to_string()),
    }
}
