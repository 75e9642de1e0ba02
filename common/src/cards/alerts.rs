//! 戦略アラートバナー

/// 空のときに出す文言
pub const NO_ALERTS_MESSAGE: &str = "No critical alerts";

/// バナーの表示状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertBanner {
    Loading,
    Empty,
    /// 入力順のまま
    Alerts(Vec<String>),
}

impl AlertBanner {
    pub fn new(loading: bool, red_flags: &[String]) -> Self {
        if loading {
            AlertBanner::Loading
        } else if red_flags.is_empty() {
            AlertBanner::Empty
        } else {
            AlertBanner::Alerts(red_flags.to_vec())
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            AlertBanner::Loading => Some("Loading alerts..."),
            AlertBanner::Empty => Some(NO_ALERTS_MESSAGE),
            AlertBanner::Alerts(_) => None,
        }
    }
}
