//! ダッシュボードのカード群

pub mod hero_metrics;
pub mod market_context;
pub mod objection_breakdown;
pub mod strategic_alerts;
