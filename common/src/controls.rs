//! ダッシュボード表示切替
//!
//! I/Oを持たない表示状態のみ。データ自体は変更しない。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ダッシュボードの表示対象
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardView {
    /// Account Executive 向け
    #[default]
    #[serde(rename = "AE")]
    Ae,
    /// Customer Lifecycle Insights
    #[serde(rename = "CL_Insight")]
    ClInsight,
}

impl DashboardView {
    pub const ALL: [DashboardView; 2] = [DashboardView::Ae, DashboardView::ClInsight];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardView::Ae => "AE",
            DashboardView::ClInsight => "CL_Insight",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Ae => "AE Dashboard",
            DashboardView::ClInsight => "CL Insights",
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ae" => Ok(DashboardView::Ae),
            "cl_insight" | "cl" | "insight" => Ok(DashboardView::ClInsight),
            _ => Err(format!("unknown view: {} (ae / cl-insight)", s)),
        }
    }
}

/// 一覧の描画方法（AE表示時のみ有効）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Cards => "cards",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "cards" | "card" => Ok(ViewMode::Cards),
            _ => Err(format!("unknown view mode: {} (table / cards)", s)),
        }
    }
}

/// 表示状態一式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardControls {
    pub view: DashboardView,
    pub mode: ViewMode,
    pub developer_mode: bool,
}

impl DashboardControls {
    pub fn select_view(&mut self, view: DashboardView) {
        self.view = view;
    }

    pub fn toggle_view_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn toggle_developer_mode(&mut self) {
        self.developer_mode = !self.developer_mode;
    }

    /// 表示切替ボタンはAE表示のときだけ出す
    pub fn view_mode_toggle_visible(&self) -> bool {
        view_mode_toggle_visible(self.view)
    }
}

pub fn view_mode_toggle_visible(view: DashboardView) -> bool {
    view == DashboardView::Ae
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let controls = DashboardControls::default();
        assert_eq!(controls.view, DashboardView::Ae);
        assert_eq!(controls.mode, ViewMode::Table);
        assert!(!controls.developer_mode);
    }

    #[test]
    fn test_toggle_hidden_outside_ae_regardless_of_mode() {
        for mode in [ViewMode::Table, ViewMode::Cards] {
            let mut controls = DashboardControls {
                mode,
                ..Default::default()
            };
            assert!(controls.view_mode_toggle_visible());

            controls.select_view(DashboardView::ClInsight);
            assert!(!controls.view_mode_toggle_visible());

            controls.select_view(DashboardView::Ae);
            assert!(controls.view_mode_toggle_visible());
            assert_eq!(controls.mode, mode);
        }
    }

    #[test]
    fn test_independent_toggles() {
        let mut controls = DashboardControls::default();
        controls.toggle_view_mode();
        controls.toggle_developer_mode();
        assert_eq!(controls.mode, ViewMode::Cards);
        assert!(controls.developer_mode);
        assert_eq!(controls.view, DashboardView::Ae);

        controls.toggle_view_mode();
        controls.toggle_developer_mode();
        assert_eq!(controls.mode, ViewMode::Table);
        assert!(!controls.developer_mode);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("AE".parse::<DashboardView>(), Ok(DashboardView::Ae));
        assert_eq!("cl-insight".parse::<DashboardView>(), Ok(DashboardView::ClInsight));
        assert_eq!("CL_Insight".parse::<DashboardView>(), Ok(DashboardView::ClInsight));
        assert!("sales".parse::<DashboardView>().is_err());
        assert_eq!("Cards".parse::<ViewMode>(), Ok(ViewMode::Cards));
    }
}
