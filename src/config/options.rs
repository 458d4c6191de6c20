// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Everything one run needs to know. The binary only ever uses `default()`;
/// tests point `base_url` elsewhere and shrink the target/delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub page_size: u32,
    pub target: usize,
    pub page_delay: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub out_dir: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            page_size: PAGE_SIZE,
            target: TARGET_GAMES,
            page_delay: Duration::from_millis(PAGE_DELAY_MS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ScrapeOptions {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Search results for zero-based `page_index`, most popular first.
    pub fn listing_url(&self, page_index: u32) -> String {
        let start = u64::from(page_index) * u64::from(self.page_size);
        format!(
            "{}/search/results/?query&start={}&count={}&sort_by={}",
            self.base(),
            start,
            self.page_size,
            SORT_BY
        )
    }

    pub fn detail_url(&self, app_id: &str) -> String {
        format!("{}/app/{}/", self.base(), app_id)
    }
}
