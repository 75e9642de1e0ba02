//! 公開シート取得（reqwest）

use crate::error::Result;
use gtm_dashboard_common::{
    parser::parse_payload, DataLoader, Dataset, Error, LoadOutcome, Notice, NoticeLevel, RecordSource,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// HTTPでシートを取得する RecordSource
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gtm-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl RecordSource for HttpSource {
    async fn fetch(&self, url: &str) -> gtm_dashboard_common::Result<Dataset> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("HTTP {}", status)));
        }

        let body = response.text().await.map_err(|e| Error::Fetch(e.to_string()))?;
        log::debug!("received {} bytes from {}", body.len(), url);
        parse_payload(&body)
    }
}

/// 通知をターミナルに出す
pub fn print_notice(notice: Notice) {
    match notice.level {
        NoticeLevel::Info => println!("✔ {}: {}", notice.title, notice.description),
        NoticeLevel::Error => eprintln!("✖ {}: {}", notice.title, notice.description),
    }
}

/// 読込中フラグをスピナーで表示
pub struct Spinner {
    bar: RefCell<Option<ProgressBar>>,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            bar: RefCell::new(None),
            message: message.into(),
        }
    }

    pub fn set(&self, loading: bool) {
        let mut bar = self.bar.borrow_mut();
        if loading {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message(self.message.clone());
            spinner.enable_steady_tick(Duration::from_millis(100));
            *bar = Some(spinner);
        } else if let Some(spinner) = bar.take() {
            spinner.finish_and_clear();
        }
    }
}

/// シートを取得。0件・失敗は通知済みで None
pub async fn fetch_sheet(url: &str, timeout: Duration) -> Result<Option<Dataset>> {
    let loader = DataLoader::with_url(HttpSource::new(timeout)?, url);
    let spinner = Spinner::new(format!("Fetching {}", url));
    let mut loaded = None;

    let outcome = loader
        .fetch_sheet(&|loading| spinner.set(loading), &print_notice, |dataset| {
            loaded = Some(dataset)
        })
        .await;

    if let LoadOutcome::Loaded(count) = outcome {
        print_notice(Notice::loaded(count, url));
    }
    Ok(loaded)
}
