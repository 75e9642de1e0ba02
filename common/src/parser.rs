//! 取込データパーサー
//!
//! 公開シートのエクスポート（CSV / opensheet形式JSON）や
//! アップロードファイルを Dataset に変換する

use crate::error::{Error, Result};
use crate::record::{CellValue, Dataset, Record};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "1200", "-3.5", "$1,200.50", "35%"
    static ref NUMERIC_CELL: Regex =
        Regex::new(r"^(?P<sign>[-+])?\$?(?P<num>\d[\d,]*(?:\.\d+)?|\.\d+)(?P<pct>%)?$").unwrap();
}

/// セル文字列を型付きの値に変換
///
/// - 空白のみ → Empty
/// - true/false（大文字小文字無視）→ Bool
/// - 数値・通貨・パーセント表記 → Number（パーセントは100で割る）
/// - それ以外 → Text（前後の空白を除去）
pub fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }

    if let Some(caps) = NUMERIC_CELL.captures(trimmed) {
        let digits = caps["num"].replace(',', "");
        if let Ok(mut value) = digits.parse::<f64>() {
            if caps.name("sign").map(|m| m.as_str()) == Some("-") {
                value = -value;
            }
            if caps.name("pct").is_some() {
                value /= 100.0;
            }
            return CellValue::Number(value);
        }
    }

    CellValue::Text(trimmed.to_string())
}

/// ヘッダ行を列名にする
///
/// 空欄は "Column N"、重複は "Note 2" のように番号を付けて一意にする
pub fn unique_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut columns: Vec<String> = Vec::new();
    for (i, header) in raw.into_iter().enumerate() {
        let header = header.as_ref().trim();
        let base = if header.is_empty() {
            format!("Column {}", i + 1)
        } else {
            header.to_string()
        };

        let mut name = base.clone();
        let mut n = 2;
        while columns.contains(&name) {
            name = format!("{} {}", base, n);
            n += 1;
        }
        columns.push(name);
    }
    columns
}

/// 区切り文字付きテキストをパース（1行目はヘッダ）
pub fn parse_delimited(text: &str, delimiter: u8) -> Result<Dataset> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let columns = unique_headers(reader.headers()?.iter());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (column, raw) in columns.iter().zip(row.iter()) {
            record.insert(column.clone(), parse_cell(raw));
        }
        if !record.is_blank() {
            records.push(record);
        }
    }

    log::debug!("parsed {} rows x {} columns", records.len(), columns.len());
    Ok(Dataset::new(columns, records))
}

/// CSVをパース
pub fn parse_csv(text: &str) -> Result<Dataset> {
    parse_delimited(text, b',')
}

/// JSON配列（行オブジェクトの配列）をパース
///
/// 列順は各行で最初に現れた順に積み上げる
pub fn parse_json(text: &str) -> Result<Dataset> {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> = serde_json::from_str(text.trim())?;

    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let mut record = Record::new();
        for (column, value) in row {
            if !columns.contains(&column) {
                columns.push(column.clone());
            }
            record.insert(column, json_cell(value));
        }
        if !record.is_blank() {
            records.push(record);
        }
    }

    Ok(Dataset::new(columns, records))
}

fn json_cell(value: serde_json::Value) -> CellValue {
    use serde_json::Value;
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Bool(b),
        Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Empty),
        Value::String(s) => parse_cell(&s),
        other => CellValue::Text(other.to_string()),
    }
}

/// リモートレスポンスをパース
///
/// `[` で始まればJSON配列、それ以外はCSVとして扱う
pub fn parse_payload(body: &str) -> Result<Dataset> {
    let trimmed = body.trim_start_matches('\u{feff}').trim_start();
    if trimmed.starts_with('[') {
        parse_json(trimmed)
    } else if trimmed.starts_with('<') {
        // 非公開シートはHTMLのログイン画面が返る
        Err(Error::Parse("received HTML instead of sheet data".into()))
    } else {
        parse_csv(trimmed)
    }
}

/// アップロードファイルの拡張子
pub fn file_extension(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// アップロードされたテキストファイルをパース
///
/// 対応形式: csv / tsv / json。0行の場合は NoData
pub fn parse_upload(file_name: &str, contents: &str) -> Result<Dataset> {
    let dataset = match file_extension(file_name).as_deref() {
        Some("csv") => parse_csv(contents)?,
        Some("tsv") => parse_delimited(contents, b'\t')?,
        Some("json") => parse_json(contents)?,
        Some(other) => return Err(Error::UnsupportedFormat(other.to_string())),
        None => return Err(Error::UnsupportedFormat(file_name.to_string())),
    };

    if dataset.is_empty() {
        return Err(Error::NoData);
    }
    Ok(dataset)
}
