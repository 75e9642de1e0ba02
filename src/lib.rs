//! GTM Dashboard CLI
//!
//! 公開シート・ローカルファイルを読み込み、ダッシュボードの表示とExcel出力を行う

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod report;
pub mod uploader;
