use crate::error::{DashboardError, Result};
use gtm_dashboard_common::{ObjectionPalette, DEFAULT_SHEET_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// シートURLを上書きする環境変数
pub const SHEET_URL_ENV: &str = "GTM_SHEET_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet_url: Option<String>,
    pub timeout_seconds: u64,
    pub currency_symbol: String,
    /// オブジェクション色の上書き（JSONファイル）
    pub palette_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_url: None,
            timeout_seconds: 30,
            currency_symbol: "$".into(),
            palette_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DashboardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("gtm-dashboard").join("config.json"))
    }

    /// 環境変数 → 設定ファイル → 既定URL の順
    pub fn sheet_url(&self) -> String {
        if let Ok(url) = std::env::var(SHEET_URL_ENV) {
            if !url.trim().is_empty() {
                return url;
            }
        }

        self.sheet_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SHEET_URL.to_string())
    }

    pub fn set_sheet_url(&mut self, url: String) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(DashboardError::Config(format!("URLが不正です: {}", url)));
        }
        self.sheet_url = Some(url);
        Ok(())
    }

    /// オブジェクション色。palette_path 未設定なら既定色
    pub fn palette(&self) -> Result<ObjectionPalette> {
        match &self.palette_path {
            Some(path) => {
                if !path.exists() {
                    return Err(DashboardError::FileNotFound(path.display().to_string()));
                }
                let content = std::fs::read_to_string(path)?;
                Ok(ObjectionPalette::from_json(&content)?)
            }
            None => Ok(ObjectionPalette::default()),
        }
    }
}
