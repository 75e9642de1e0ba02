//! GTM Dashboard Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod cards;
pub mod controls;
pub mod dashboard;
pub mod deal;
pub mod error;
pub mod export;
pub mod loader;
pub mod parser;
pub mod record;

pub use cards::{
    market_slots, objection_bars, strip_objection_prefix, AlertBanner, HeroMetrics, MarketCategory,
    MarketSlot, ObjectionBar, ObjectionPalette, ObjectionTypeEntry,
};
pub use controls::{DashboardControls, DashboardView, ViewMode};
pub use dashboard::{DashboardData, DataOrigin};
pub use deal::{DealRecord, DealStatus};
pub use error::{Error, Result};
pub use loader::{
    DataLoader, LoadOutcome, LoadingFlag, Notice, NoticeLevel, Notifier, RecordSource, DEFAULT_SHEET_URL,
};
pub use parser::{parse_csv, parse_json, parse_payload, parse_upload};
pub use record::{CellValue, Dataset, Record};
