//! データローダー（CLI/WASM共通）
//!
//! 取得元（RecordSource）からデータセットを取り出し、
//! 読込中フラグの管理とユーザー通知を行う。

use crate::error::{Error, Result};
use crate::record::Dataset;

/// 既定の公開シートURL
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vQ8gtm-dashboard-demo/pub?gid=0&single=true&output=csv";

/// 取得失敗時の通知タイトル
pub const FETCH_FAILED_TITLE: &str = "Failed to fetch data";
/// 0件時の通知タイトル
pub const NO_DATA_TITLE: &str = "No data found";
/// 読込成功時の通知タイトル
pub const LOADED_TITLE: &str = "Data loaded";

/// リモート取得元
///
/// WASMでは gloo、CLIでは reqwest で実装する
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn fetch(&self, url: &str) -> Result<Dataset>;
}

/// 通知レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// ユーザー向け通知（トースト）
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// 読込成功（origin は取得元の説明）
    pub fn loaded(count: usize, origin: &str) -> Self {
        Self::info(LOADED_TITLE, format!("{} rows from {}", count, origin))
    }

    pub fn no_data() -> Self {
        Self::error(NO_DATA_TITLE, "The spreadsheet returned no rows. Try uploading a file instead.")
    }

    pub fn fetch_failed(error: &Error) -> Self {
        Self::error(FETCH_FAILED_TITLE, error.to_string())
    }
}

/// 通知の送り先
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<F: Fn(Notice)> Notifier for F {
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}

/// 読込中フラグ
pub trait LoadingFlag {
    fn set_loading(&self, loading: bool);
}

impl<F: Fn(bool)> LoadingFlag for F {
    fn set_loading(&self, loading: bool) {
        self(loading)
    }
}

/// スコープを抜けると必ず loading=false に戻す
struct LoadingGuard<'a, L: LoadingFlag + ?Sized> {
    flag: &'a L,
}

impl<'a, L: LoadingFlag + ?Sized> LoadingGuard<'a, L> {
    fn engage(flag: &'a L) -> Self {
        flag.set_loading(true);
        Self { flag }
    }
}

impl<L: LoadingFlag + ?Sized> Drop for LoadingGuard<'_, L> {
    fn drop(&mut self) {
        self.flag.set_loading(false);
    }
}

/// 読込結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    NoData,
    Failed,
}

/// データローダー
pub struct DataLoader<S> {
    source: S,
    sheet_url: String,
}

impl<S: RecordSource> DataLoader<S> {
    pub fn new(source: S) -> Self {
        Self::with_url(source, DEFAULT_SHEET_URL)
    }

    pub fn with_url(source: S, sheet_url: impl Into<String>) -> Self {
        Self {
            source,
            sheet_url: sheet_url.into(),
        }
    }

    pub fn sheet_url(&self) -> &str {
        &self.sheet_url
    }

    /// シートを取得して on_loaded に渡す
    ///
    /// 0件・失敗時は通知のみで on_loaded は呼ばない。
    /// どの経路でも終了時に loading=false になる。
    pub async fn fetch_sheet<L, N, F>(&self, loading: &L, notifier: &N, on_loaded: F) -> LoadOutcome
    where
        L: LoadingFlag + ?Sized,
        N: Notifier + ?Sized,
        F: FnOnce(Dataset),
    {
        let _guard = LoadingGuard::engage(loading);
        log::info!("fetching sheet: {}", self.sheet_url);

        match self.source.fetch(&self.sheet_url).await {
            Ok(dataset) if dataset.is_empty() => {
                log::warn!("sheet returned no rows");
                notifier.notify(Notice::no_data());
                LoadOutcome::NoData
            }
            Ok(dataset) => {
                let count = dataset.len();
                log::info!("loaded {} rows", count);
                on_loaded(dataset);
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                log::error!("sheet fetch failed: {}", e);
                notifier.notify(Notice::fetch_failed(&e));
                LoadOutcome::Failed
            }
        }
    }

    /// アップロード結果をそのまま渡す（エラーはアップロード側で通知済み）
    pub fn accept_upload<F>(&self, dataset: Dataset, on_loaded: F) -> LoadOutcome
    where
        F: FnOnce(Dataset),
    {
        let count = dataset.len();
        log::info!("accepted upload with {} rows", count);
        on_loaded(dataset);
        LoadOutcome::Loaded(count)
    }
}
