//! ヒーローメトリクス（数値4項目）

use crate::deal::{DealRecord, DealStatus};
use serde::{Deserialize, Serialize};

/// 上段に並べる4指標
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroMetrics {
    /// オープン商談の金額合計
    pub pipeline_value: f64,
    /// 受注金額合計
    pub closed_won_value: f64,
    /// 受注率（0.0〜1.0）
    pub win_rate: f64,
    /// オープン商談数
    pub active_deals: u32,
}

/// 表示用の1項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
}

impl HeroMetrics {
    /// 未接続時のサンプル値
    pub fn sample() -> Self {
        Self {
            pipeline_value: 2_480_000.0,
            closed_won_value: 865_000.0,
            win_rate: 0.32,
            active_deals: 47,
        }
    }

    pub fn from_deals(deals: &[DealRecord]) -> Self {
        let mut metrics = Self::default();
        let (mut won, mut lost) = (0u32, 0u32);

        for deal in deals {
            let amount = deal.amount.unwrap_or(0.0);
            match deal.status {
                DealStatus::Open => {
                    metrics.pipeline_value += amount;
                    metrics.active_deals += 1;
                }
                DealStatus::Won => {
                    metrics.closed_won_value += amount;
                    won += 1;
                }
                DealStatus::Lost => lost += 1,
            }
        }

        if won + lost > 0 {
            metrics.win_rate = f64::from(won) / f64::from(won + lost);
        }
        metrics
    }

    /// 整形のみ（計算はしない）
    pub fn tiles(&self, currency: &str) -> [MetricTile; 4] {
        [
            MetricTile {
                label: "Pipeline",
                value: format_currency(self.pipeline_value, currency),
            },
            MetricTile {
                label: "Closed Won",
                value: format_currency(self.closed_won_value, currency),
            },
            MetricTile {
                label: "Win Rate",
                value: format_percent(self.win_rate),
            },
            MetricTile {
                label: "Active Deals",
                value: self.active_deals.to_string(),
            },
        ]
    }
}

/// 金額の短縮表記（$2.5M, $865K, $950）
pub fn format_currency(value: f64, currency: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}{}{:.1}M", sign, currency, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{}{:.0}K", sign, currency, abs / 1_000.0)
    } else {
        format!("{}{}{:.0}", sign, currency, abs)
    }
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(status: DealStatus, amount: Option<f64>) -> DealRecord {
        DealRecord {
            account: "Acme".to_string(),
            status,
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2_480_000.0, "$"), "$2.5M");
        assert_eq!(format_currency(865_000.0, "$"), "$865K");
        assert_eq!(format_currency(950.0, "$"), "$950");
        assert_eq!(format_currency(-1_600.0, "€"), "-€2K");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.32), "32%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_from_deals() {
        let deals = vec![
            deal(DealStatus::Open, Some(100_000.0)),
            deal(DealStatus::Open, None),
            deal(DealStatus::Won, Some(50_000.0)),
            deal(DealStatus::Lost, Some(10_000.0)),
            deal(DealStatus::Lost, None),
            deal(DealStatus::Won, Some(25_000.0)),
        ];
        let metrics = HeroMetrics::from_deals(&deals);

        assert_eq!(metrics.pipeline_value, 100_000.0);
        assert_eq!(metrics.closed_won_value, 75_000.0);
        assert_eq!(metrics.active_deals, 2);
        assert!((metrics.win_rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_deals_without_closed() {
        let metrics = HeroMetrics::from_deals(&[deal(DealStatus::Open, Some(1.0))]);
        assert_eq!(metrics.win_rate, 0.0);
    }

    #[test]
    fn test_sample_tiles() {
        let tiles = HeroMetrics::sample().tiles("$");
        let values: Vec<&str> = tiles.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["$2.5M", "$865K", "32%", "47"]);
        assert_eq!(tiles[0].label, "Pipeline");
    }
}
