//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::state::Page;
use crate::core::transform::TransformSettings;
use crate::sheets::{FetchError, SheetSource};

/// An in-memory sheet source keyed by URL. Unknown URLs fail with a
/// network error.
#[derive(Default)]
pub struct StaticSheetSource {
    responses: HashMap<String, Result<String, FetchError>>,
}

impl StaticSheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_error(mut self, url: &str, error: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }
}

#[async_trait]
impl SheetSource for StaticSheetSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_csv(&self, url: &str) -> Result<String, FetchError> {
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Network(format!("no route to {url}"))))
    }
}

/// Creates a test Page with fixed URLs and a 40px marquee row.
pub fn test_page() -> Page {
    Page::new(
        "http://sheets.test/metrics.csv".to_string(),
        "http://sheets.test/names.csv".to_string(),
        "http://sheets.test/universities.csv".to_string(),
        TransformSettings::default(),
        40,
    )
}
