//! 失注理由（オブジェクション）内訳
//!
//! 生データの名前は "Objection::Pricing" のように接頭辞付き。
//! 表示と色引きは接頭辞を外した名前で行う。

use crate::deal::DealRecord;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 生データ側の接頭辞
pub const OBJECTION_PREFIX: &str = "Objection::";
/// 色未定義時に使うキー
pub const FALLBACK_KEY: &str = "Other";
const FALLBACK_COLOR: &str = "#94a3b8";

/// 集計済みの1項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectionTypeEntry {
    pub name: String,
    pub value: f64,
}

impl ObjectionTypeEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// 名前 → 色
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectionPalette {
    colors: HashMap<String, String>,
}

impl Default for ObjectionPalette {
    fn default() -> Self {
        let mut colors = HashMap::new();
        colors.insert("Pricing".into(), "#ef4444".into());
        colors.insert("Timing".into(), "#f59e0b".into());
        colors.insert("Competition".into(), "#8b5cf6".into());
        colors.insert("Authority".into(), "#3b82f6".into());
        colors.insert("Need".into(), "#10b981".into());
        colors.insert(FALLBACK_KEY.into(), FALLBACK_COLOR.into());
        Self { colors }
    }
}

impl ObjectionPalette {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, label: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(label.into(), color.into());
    }

    /// ラベルの色。無ければ Other の色
    pub fn color_for(&self, label: &str) -> &str {
        self.colors
            .get(label)
            .or_else(|| self.colors.get(FALLBACK_KEY))
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }
}

/// 表示用の棒1本
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectionBar {
    pub label: String,
    pub value: f64,
    pub color: String,
    /// 最大値に対する割合（0.0〜1.0）
    pub ratio: f64,
}

/// 接頭辞を外した表示名
pub fn strip_objection_prefix(name: &str) -> &str {
    name.strip_prefix(OBJECTION_PREFIX).unwrap_or(name).trim()
}

/// 入力順のまま棒グラフ用データへ変換（並べ替えない）
pub fn objection_bars(entries: &[ObjectionTypeEntry], palette: &ObjectionPalette) -> Vec<ObjectionBar> {
    let max = entries.iter().map(|e| e.value).fold(0.0_f64, f64::max);

    entries
        .iter()
        .map(|entry| {
            let label = strip_objection_prefix(&entry.name);
            ObjectionBar {
                label: label.to_string(),
                value: entry.value,
                color: palette.color_for(label).to_string(),
                ratio: if max > 0.0 { entry.value / max } else { 0.0 },
            }
        })
        .collect()
}

/// 商談のオブジェクション列を件数集計（初出順）
pub fn count_objections(deals: &[DealRecord]) -> Vec<ObjectionTypeEntry> {
    let mut entries: Vec<ObjectionTypeEntry> = Vec::new();
    for name in deals.iter().filter_map(|d| d.objection.as_deref()) {
        if let Some(pos) = entries.iter().position(|e| e.name == name) {
            entries[pos].value += 1.0;
        } else {
            entries.push(ObjectionTypeEntry::new(name, 1.0));
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_objection_prefix("Objection::Pricing"), "Pricing");
        assert_eq!(strip_objection_prefix("Pricing"), "Pricing");
        assert_eq!(strip_objection_prefix("Objection:: Timing "), "Timing");
    }

    #[test]
    fn test_unmapped_label_uses_other_color() {
        let mut palette = ObjectionPalette::from_json(r##"{"Timing": "#111111", "Other": "#999999"}"##)
            .expect("パース失敗");
        let bars = objection_bars(&[ObjectionTypeEntry::new("Objection::Pricing", 4.0)], &palette);
        assert_eq!(bars[0].label, "Pricing");
        assert_eq!(bars[0].color, "#999999");

        palette.insert("Pricing", "#ff0000");
        let bars = objection_bars(&[ObjectionTypeEntry::new("Objection::Pricing", 4.0)], &palette);
        assert_eq!(bars[0].color, "#ff0000");
    }

    #[test]
    fn test_palette_without_other_key() {
        let palette = ObjectionPalette::from_json("{}").expect("パース失敗");
        assert_eq!(palette.color_for("Pricing"), FALLBACK_COLOR);
    }

    #[test]
    fn test_bars_keep_arrival_order() {
        let entries = vec![
            ObjectionTypeEntry::new("Objection::Timing", 2.0),
            ObjectionTypeEntry::new("Objection::Pricing", 8.0),
            ObjectionTypeEntry::new("Objection::Need", 4.0),
        ];
        let bars = objection_bars(&entries, &ObjectionPalette::default());
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Timing", "Pricing", "Need"]);
        assert_eq!(bars[0].ratio, 0.25);
        assert_eq!(bars[1].ratio, 1.0);
    }

    #[test]
    fn test_bars_all_zero() {
        let bars = objection_bars(&[ObjectionTypeEntry::new("X", 0.0)], &ObjectionPalette::default());
        assert_eq!(bars[0].ratio, 0.0);
    }

    #[test]
    fn test_count_objections_first_seen_order() {
        let deal = |objection: Option<&str>| DealRecord {
            account: "Acme".into(),
            objection: objection.map(str::to_string),
            ..Default::default()
        };
        let deals = vec![
            deal(Some("Objection::Timing")),
            deal(Some("Objection::Pricing")),
            deal(None),
            deal(Some("Objection::Timing")),
        ];
        let counts = count_objections(&deals);
        assert_eq!(
            counts,
            vec![
                ObjectionTypeEntry::new("Objection::Timing", 2.0),
                ObjectionTypeEntry::new("Objection::Pricing", 1.0),
            ]
        );
    }
}
