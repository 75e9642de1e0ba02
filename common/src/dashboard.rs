//! ダッシュボード集計
//!
//! Dataset からカード表示に必要な値をまとめて作る。
//! データ未読込のときはサンプル値を使う。

use crate::cards::{count_objections, HeroMetrics, ObjectionTypeEntry};
use crate::deal::project_deals;
use crate::record::Dataset;
use serde::Serialize;

/// マーケットコンテキストの最大件数
pub const MARKET_CONTEXT_LIMIT: usize = 4;

/// データの出所
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum DataOrigin {
    Sample,
    Sheet(String),
    Upload(String),
}

impl DataOrigin {
    pub fn describe(&self) -> String {
        match self {
            DataOrigin::Sample => "sample data".to_string(),
            DataOrigin::Sheet(url) => format!("sheet {}", url),
            DataOrigin::Upload(name) => format!("upload {}", name),
        }
    }
}

/// カードに渡す値一式
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub hero: HeroMetrics,
    pub market_context: Vec<String>,
    pub red_flags: Vec<String>,
    pub objections: Vec<ObjectionTypeEntry>,
    /// account が無く集計対象外になった行数
    pub skipped_rows: usize,
}

impl DashboardData {
    pub fn sample() -> Self {
        Self {
            hero: HeroMetrics::sample(),
            market_context: vec![
                "Series C funding closed last quarter; hiring across sales and CS.".into(),
                "Salesforce, Snowflake and Segment in production.".into(),
                "Regulatory review of data residency scheduled for Q3.".into(),
                "Evaluating two incumbents on renewal; pricing pressure expected.".into(),
            ],
            red_flags: vec![
                "Acme Corp: economic buyer has not attended the last two calls".into(),
                "Globex: procurement introduced a competing vendor late in cycle".into(),
            ],
            objections: vec![
                ObjectionTypeEntry::new("Objection::Pricing", 12.0),
                ObjectionTypeEntry::new("Objection::Timing", 8.0),
                ObjectionTypeEntry::new("Objection::Competition", 6.0),
                ObjectionTypeEntry::new("Objection::Security Review", 3.0),
            ],
            skipped_rows: 0,
        }
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        let (deals, skipped_rows) = project_deals(dataset.records());

        let mut market_context: Vec<String> = Vec::new();
        for text in deals.iter().filter_map(|d| d.market_context.as_ref()) {
            if market_context.len() == MARKET_CONTEXT_LIMIT {
                break;
            }
            if !market_context.contains(text) {
                market_context.push(text.clone());
            }
        }

        let red_flags = deals
            .iter()
            .filter_map(|d| d.red_flag.as_ref().map(|flag| format!("{}: {}", d.account, flag)))
            .collect();

        if skipped_rows > 0 {
            log::warn!("{} rows without an account column were ignored", skipped_rows);
        }

        Self {
            hero: HeroMetrics::from_deals(&deals),
            market_context,
            red_flags,
            objections: count_objections(&deals),
            skipped_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_csv;

    const DEALS_CSV: &str = "\
Account,Status,Amount,Objection,Red Flag,Market Context
Acme,Open,120000,Objection::Pricing,Champion went quiet,Hiring spree
Globex,Won,80000,,,Hiring spree
Initech,Lost,40000,Objection::Timing,,Moved to AWS
,Open,999,,,
Umbrella,Open,$30K,Objection::Pricing,Budget frozen,
";

    #[test]
    fn test_from_dataset() {
        let dataset = parse_csv(DEALS_CSV).expect("パース失敗");
        let data = DashboardData::from_dataset(&dataset);

        assert_eq!(data.skipped_rows, 1);
        assert_eq!(data.hero.pipeline_value, 120_000.0);
        assert_eq!(data.hero.active_deals, 2);
        assert_eq!(data.hero.closed_won_value, 80_000.0);
        assert_eq!(data.market_context, vec!["Hiring spree", "Moved to AWS"]);
        assert_eq!(
            data.red_flags,
            vec!["Acme: Champion went quiet", "Umbrella: Budget frozen"]
        );
        assert_eq!(data.objections[0], ObjectionTypeEntry::new("Objection::Pricing", 2.0));
        assert_eq!(data.objections[1], ObjectionTypeEntry::new("Objection::Timing", 1.0));
    }

    #[test]
    fn test_market_context_capped() {
        let mut csv = String::from("Account,Market Context\n");
        for i in 0..6 {
            csv.push_str(&format!("A{},note {}\n", i, i));
        }
        let data = DashboardData::from_dataset(&parse_csv(&csv).expect("パース失敗"));
        assert_eq!(data.market_context.len(), MARKET_CONTEXT_LIMIT);
        assert_eq!(data.market_context[3], "note 3");
    }

    #[test]
    fn test_sample_has_every_card() {
        let data = DashboardData::sample();
        assert_eq!(data.market_context.len(), 4);
        assert!(!data.red_flags.is_empty());
        assert!(!data.objections.is_empty());
    }

    #[test]
    fn test_origin_describe() {
        assert_eq!(DataOrigin::Sample.describe(), "sample data");
        assert_eq!(DataOrigin::Upload("q3.csv".into()).describe(), "upload q3.csv");
    }
}
