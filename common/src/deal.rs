//! 商談レコード（型付きスキーマ）
//!
//! 任意列の Record から、ダッシュボードが参照する列だけを取り出す。
//! 必須: account / 任意: それ以外

use crate::record::{CellValue, Record};
use serde::{Deserialize, Serialize};

const ACCOUNT: &[&str] = &["account", "accountname", "company"];
const OWNER: &[&str] = &["owner", "ae", "accountexecutive"];
const STAGE: &[&str] = &["stage", "dealstage"];
const STATUS: &[&str] = &["status", "outcome"];
const AMOUNT: &[&str] = &["amount", "dealvalue", "arr"];
const OBJECTION: &[&str] = &["objection", "objectiontype"];
const RED_FLAG: &[&str] = &["redflag", "risk"];
const MARKET_CONTEXT: &[&str] = &["marketcontext"];

/// 商談ステータス
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    #[default]
    Open,
    Won,
    Lost,
}

impl DealStatus {
    /// 未知の値は Open 扱い
    pub fn parse(value: &str) -> Self {
        let lower = value.trim().to_lowercase();
        match lower.as_str() {
            "won" | "closed won" | "closedwon" | "win" => DealStatus::Won,
            "lost" | "closed lost" | "closedlost" | "loss" => DealStatus::Lost,
            _ => DealStatus::Open,
        }
    }
}

/// 商談1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecord {
    pub account: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub status: DealStatus,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub objection: Option<String>,
    #[serde(default)]
    pub red_flag: Option<String>,
    #[serde(default)]
    pub market_context: Option<String>,
}

impl DealRecord {
    /// Record から変換。account が無ければ None
    pub fn from_record(record: &Record) -> Option<Self> {
        let text = |aliases: &[&str]| record.lookup(aliases).and_then(CellValue::as_display);

        let account = text(ACCOUNT)?;
        Some(Self {
            account,
            owner: text(OWNER),
            stage: text(STAGE),
            status: text(STATUS).map(|s| DealStatus::parse(&s)).unwrap_or_default(),
            amount: record.lookup(AMOUNT).and_then(CellValue::as_number),
            objection: text(OBJECTION),
            red_flag: text(RED_FLAG),
            market_context: text(MARKET_CONTEXT),
        })
    }
}

/// データセット全体を変換し、変換できなかった行数も返す
pub fn project_deals(records: &[Record]) -> (Vec<DealRecord>, usize) {
    let mut deals = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for (i, record) in records.iter().enumerate() {
        match DealRecord::from_record(record) {
            Some(deal) => deals.push(deal),
            None => {
                log::debug!("row {} has no account column, skipped", i + 1);
                skipped += 1;
            }
        }
    }
    (deals, skipped)
}
