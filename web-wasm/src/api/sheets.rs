//! 公開シートの取得（gloo-net）

use gloo::net::http::Request;
use gtm_dashboard_common::{parse_payload, Dataset, Error, RecordSource, Result};

/// ブラウザの fetch で公開シートを読む
pub struct SheetSource;

impl RecordSource for SheetSource {
    async fn fetch(&self, url: &str) -> Result<Dataset> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        if !response.ok() {
            return Err(Error::Fetch(status_message(response.status(), &response.status_text())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;
        log::debug!("sheet response: {} bytes", body.len());

        parse_payload(&body)
    }
}

fn status_message(status: u16, text: &str) -> String {
    if text.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {} {}", status, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(status_message(404, "Not Found"), "HTTP 404 Not Found");
        assert_eq!(status_message(500, ""), "HTTP 500");
    }
}
