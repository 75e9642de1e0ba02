//! マーケットコンテキスト
//!
//! 入力文字列を位置で3つの固定スロットに割り当てる。
//! スロット: 加速要因=0, 技術スタック=1, 競合=3（2番目は使わない）

/// スロット種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketCategory {
    Acceleration,
    TechStack,
    Competitive,
}

impl MarketCategory {
    pub const ALL: [MarketCategory; 3] = [
        MarketCategory::Acceleration,
        MarketCategory::TechStack,
        MarketCategory::Competitive,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MarketCategory::Acceleration => "Acceleration Signals",
            MarketCategory::TechStack => "Tech Stack",
            MarketCategory::Competitive => "Competitive Landscape",
        }
    }

    /// 入力配列のどの位置を読むか
    pub fn source_index(&self) -> usize {
        match self {
            MarketCategory::Acceleration => 0,
            MarketCategory::TechStack => 1,
            MarketCategory::Competitive => 3,
        }
    }

    pub fn default_description(&self) -> &'static str {
        match self {
            MarketCategory::Acceleration => "Buying signals and expansion triggers will appear here.",
            MarketCategory::TechStack => "Known tools and integrations in the account's stack.",
            MarketCategory::Competitive => "Competing vendors and incumbent solutions.",
        }
    }
}

/// 表示用スロット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSlot {
    pub category: MarketCategory,
    pub description: String,
    /// 入力から埋まったか（既定文なら false）
    pub provided: bool,
}

pub fn market_slots(items: &[String]) -> [MarketSlot; 3] {
    MarketCategory::ALL.map(|category| {
        match items.get(category.source_index()).filter(|s| !s.trim().is_empty()) {
            Some(text) => MarketSlot {
                category,
                description: text.clone(),
                provided: true,
            },
            None => MarketSlot {
                category,
                description: category.default_description().to_string(),
                provided: false,
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_index_two_is_skipped() {
        let slots = market_slots(&strings(&["A", "B", "C", "D"]));
        let descriptions: Vec<&str> = slots.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, vec!["A", "B", "D"]);
        assert!(slots.iter().all(|s| s.provided));
    }

    #[test]
    fn test_defaults_when_absent() {
        let slots = market_slots(&strings(&["A", "B", "C"]));
        assert_eq!(slots[0].description, "A");
        assert_eq!(slots[1].description, "B");
        assert_eq!(slots[2].category, MarketCategory::Competitive);
        assert_eq!(slots[2].description, MarketCategory::Competitive.default_description());
        assert!(!slots[2].provided);
    }

    #[test]
    fn test_empty_input() {
        let slots = market_slots(&[]);
        for (slot, category) in slots.iter().zip(MarketCategory::ALL) {
            assert_eq!(slot.category, category);
            assert_eq!(slot.description, category.default_description());
        }
    }

    #[test]
    fn test_blank_string_uses_default() {
        let slots = market_slots(&strings(&["  ", "B"]));
        assert!(!slots[0].provided);
        assert!(slots[1].provided);
    }
}
