// src/scrape/scrape.rs
use std::thread;

use crate::{
    config::options::ScrapeOptions,
    core::Fetch,
    progress::Progress,
    record::{GameDetails, GameRecord},
    specs::{
        detail::{self, DetailOutcome},
        listing::{self, ListingEntry},
    },
};

/// Counters the runner reports once the loop ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub pages: u32,
    /// DLC detail pages left out.
    pub dlc: usize,
    /// Listing rows with no derivable app id.
    pub no_id: usize,
}

/// One listing page. `None` when the page couldn't be fetched; an empty vec
/// when it was fetched but listed nothing. Both end paging.
pub fn fetch_listing(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    page_index: u32,
) -> Option<Vec<ListingEntry>> {
    let url = opts.listing_url(page_index);
    match fetcher.get(&url) {
        Ok(body) => {
            let entries = listing::parse_listing(&body);
            if entries.is_empty() {
                logf!(page = page_index + 1, "No games found on this page");
            }
            Some(entries)
        }
        Err(e) => {
            loge!(page = page_index + 1, %url, error = %e, "Error fetching games from page");
            None
        }
    }
}

/// One detail page. A failed fetch never propagates: it becomes the full
/// sentinel record so the run carries on.
pub fn fetch_details(fetcher: &dyn Fetch, url: &str) -> DetailOutcome {
    match fetcher.get(url) {
        Ok(body) => detail::parse_details(&body),
        Err(e) => {
            loge!(%url, error = %e, "Error fetching details");
            DetailOutcome::Details(GameDetails::unknown())
        }
    }
}

/// Page through listings until `opts.target` records are collected or a
/// page comes back empty/unavailable. DLC and id-less rows don't count.
pub fn collect_games(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> (Vec<GameRecord>, CollectStats) {
    let mut records: Vec<GameRecord> = Vec::new();
    let mut stats = CollectStats::default();
    let mut page_index: u32 = 0;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.target);
    }

    while records.len() < opts.target {
        if let Some(p) = progress.as_deref_mut() {
            p.page(page_index);
        }

        let entries = match fetch_listing(fetcher, opts, page_index) {
            Some(entries) if !entries.is_empty() => entries,
            _ => {
                logf!("No more games found or error fetching page");
                if let Some(p) = progress.as_deref_mut() {
                    p.log("No more games found.");
                }
                break;
            }
        };
        stats.pages += 1;

        for entry in &entries {
            if records.len() >= opts.target {
                break;
            }

            let Some(id) = entry.identifier() else {
                logw!(href = ?entry.href, "Listing row without app id; skipped");
                stats.no_id += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped("?");
                }
                continue;
            };
            let name = entry.display_name().map(str::to_string);
            let url = opts.detail_url(&id);

            match fetch_details(fetcher, &url) {
                DetailOutcome::Skip => {
                    logd!(%id, "DLC; skipped");
                    stats.dlc += 1;
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_skipped(&id);
                    }
                }
                DetailOutcome::Details(details) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&id, records.len() + 1);
                    }
                    records.push(GameRecord::new(name, id, details));
                }
            }
        }

        logf!(page = page_index + 1, collected = records.len(), "Page done");
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page_index, records.len());
        }
        page_index += 1;

        if records.len() < opts.target && !opts.page_delay.is_zero() {
            thread::sleep(opts.page_delay);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(records.len());
    }

    (records, stats)
}
