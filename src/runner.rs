// src/runner.rs
use std::path::PathBuf;

use chrono::Local;

use crate::{
    config::options::ScrapeOptions,
    core::{Fetch, HttpFetcher},
    error::Result,
    file,
    progress::Progress,
    scrape,
};

/// Summary of what was produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub pages: u32,
    pub dlc: usize,
    pub no_id: usize,
    pub written: Option<PathBuf>,
}

/// Top-level runner over the live store.
pub fn run(opts: &ScrapeOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(opts)?;
    run_with(&fetcher, opts, progress)
}

/// Collect, then write once. The file timestamp is taken after the last
/// fetch, so it reflects run completion.
pub fn run_with(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let (records, stats) = scrape::collect_games(fetcher, opts, progress);

    let written = file::write_records(&opts.out_dir, &records, &Local::now())?;
    match &written {
        Some(path) => logf!(records = records.len(), path = %path.display(), "Data saved"),
        None => logf!("No data to save"),
    }
    logd!(pages = stats.pages, dlc = stats.dlc, no_id = stats.no_id, "Run counters");

    Ok(RunSummary {
        records: records.len(),
        pages: stats.pages,
        dlc: stats.dlc,
        no_id: stats.no_id,
        written,
    })
}
