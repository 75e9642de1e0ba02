//! エクスポート（CLI/WASM共通）

#[cfg(feature = "excel")]
pub mod excel_core;
