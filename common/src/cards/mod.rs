//! ダッシュボードのカード表示モデル
//!
//! いずれも読込済みデータ（またはサンプル）から表示用の値を作るだけで、状態は持たない

pub mod alerts;
pub mod hero;
pub mod market;
pub mod objections;

pub use alerts::{AlertBanner, NO_ALERTS_MESSAGE};
pub use hero::{format_currency, format_percent, HeroMetrics, MetricTile};
pub use market::{market_slots, MarketCategory, MarketSlot};
pub use objections::{
    count_objections, objection_bars, strip_objection_prefix, ObjectionBar, ObjectionPalette,
    ObjectionTypeEntry, OBJECTION_PREFIX,
};
