// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use steam_scrape::config::options::ScrapeOptions;
use steam_scrape::core::Fetch;
use steam_scrape::{Result, ScrapeError};

pub const BASE: &str = "http://store.test";

pub const DETAIL_FULL: &str = include_str!("../fixtures/detail_full.html");
pub const DETAIL_DEMO: &str = include_str!("../fixtures/detail_demo.html");
pub const DETAIL_DLC: &str = include_str!("../fixtures/detail_dlc.html");

/// URL → body map; anything unmapped is a fetch error. Records every GET.
#[derive(Default)]
pub struct FakeStore {
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeStore {
    pub fn with(mut self, url: String, body: impl Into<String>) -> Self {
        self.pages.insert(url, body.into());
        self
    }

    pub fn requested(&self, url: &str) -> bool {
        self.requests.borrow().iter().any(|u| u == url)
    }
}

impl Fetch for FakeStore {
    fn get(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| ScrapeError::Fetch {
            url: url.to_string(),
            reason: "not found".to_string(),
        })
    }
}

pub fn opts(name: &str, target: usize) -> ScrapeOptions {
    ScrapeOptions {
        base_url: BASE.to_string(),
        target,
        page_delay: Duration::ZERO,
        out_dir: tmp_dir(name),
        ..ScrapeOptions::default()
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("steam_scrape_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// A results page with one row per id, the way the store renders it.
pub fn listing_page(ids: &[u32]) -> String {
    let mut rows = String::new();
    for id in ids {
        rows.push_str(&format!(
            r#"<a href="https://store.steampowered.com/app/{id}/Game_{id}/?snr=1_7_7_7000_150_1"
                  data-ds-appid="{id}" class="search_result_row ds_collapse_flag">
                 <div class="col search_name ellipsis"><span class="title">Game {id}</span></div>
               </a>"#
        ));
    }
    format!(r#"<html><body><div id="search_resultsRows">{rows}</div></body></html>"#)
}

pub fn empty_listing() -> String {
    listing_page(&[])
}
