//! 取込データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - CellValue: セル1個分の値
//! - Record: 1行分（列名 → 値）
//! - Dataset: ヘッダ順序を保持したレコード集合（読込後は不変）

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// セル値
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// 空でなければ表示用文字列を返す
    pub fn as_display(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// 1行分のレコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: CellValue) -> Self {
        self.fields.insert(column.into(), value);
        self
    }

    pub(crate) fn insert(&mut self, column: String, value: CellValue) {
        self.fields.insert(column, value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields.get(column)
    }

    /// 表記ゆれを無視して列を探す（最初に見つかった非空セル）
    pub fn lookup(&self, aliases: &[&str]) -> Option<&CellValue> {
        aliases.iter().find_map(|alias| {
            self.fields
                .iter()
                .find(|(column, value)| normalize_header(column) == *alias && !value.is_empty())
                .map(|(_, value)| value)
        })
    }

    pub fn is_blank(&self) -> bool {
        self.fields.values().all(CellValue::is_empty)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// 列名を比較用に正規化（小文字化、英数字以外を除去）
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// 読込済みデータセット
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 列順に並べたセル表示文字列
    pub fn row_cells(&self, index: usize) -> Vec<String> {
        let Some(record) = self.records.get(index) else {
            return Vec::new();
        };
        self.columns
            .iter()
            .map(|c| record.get(c).map(ToString::to_string).unwrap_or_default())
            .collect()
    }
}

impl Serialize for Dataset {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}
