//! Published spreadsheet exports over plain HTTP GET.
//!
//! Exports change whenever someone edits the sheet, so every request asks
//! intermediaries to skip their caches. No auth headers are sent.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{CACHE_CONTROL, PRAGMA};

use crate::sheets::{FetchError, SheetSource};

pub struct HttpSheetSource {
    client: reqwest::Client,
}

impl HttpSheetSource {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpSheetSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_csv(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Sheet response status: {} ({})", response.status(), url);

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Sheet export error: {} - {}", status, body);
            return Err(FetchError::Status { status, body });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}
