// src/specs/listing.rs
//! Scraping *spec* for the search results page.
//!
//! `/search/results/?query&start=N&count=20&sort_by=Popularity_DESC` renders
//! one `a.search_result_row` per product under `#search_resultsRows`.
//! Each row carries the app id in `data-ds-appid`, the store link in `href`
//! and the display name in `.title`.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::config::consts::BASE_URL;
use crate::core::html::{attr, selector, text_of};

static ROWS: LazyLock<Selector> =
    LazyLock::new(|| selector("#search_resultsRows .search_result_row"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".title"));

/// Owned copy of one summary node; the parsed document doesn't outlive
/// the listing fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingEntry {
    pub app_id_attr: Option<String>,
    pub href: Option<String>,
    pub title: Option<String>,
}

impl ListingEntry {
    /// Catalog id: the `data-ds-appid` attribute, else parsed out of the link.
    pub fn identifier(&self) -> Option<String> {
        self.app_id_attr
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or_else(|| self.href.as_deref().and_then(app_id_from_link))
    }

    pub fn display_name(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// Summary nodes in page order. Empty when the results container is missing
/// or has no rows.
pub fn parse_listing(html: &str) -> Vec<ListingEntry> {
    let doc = Html::parse_document(html);

    doc.select(&ROWS)
        .map(|row| ListingEntry {
            app_id_attr: attr(row, "data-ds-appid").map(str::to_string),
            href: attr(row, "href").map(str::to_string),
            title: row.select(&TITLE).next().map(text_of),
        })
        .collect()
}

/// `https://store.steampowered.com/app/730/CounterStrike_2/?snr=…` → `730`.
/// Takes the segment after `app`; without one, the last non-empty segment.
/// Relative links resolve against the store root.
pub fn app_id_from_link(href: &str) -> Option<String> {
    let root = Url::parse(BASE_URL).ok()?;
    let url = root.join(href.trim()).ok()?;
    let segs: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

    let id = match segs.iter().position(|s| *s == "app") {
        Some(i) => segs.get(i + 1).copied(),
        None => segs.last().copied(),
    }?;
    Some(s!(id))
}
