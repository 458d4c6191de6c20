// src/cli.rs
use crate::config::{consts::DEFAULT_LOG_FILTER, options::ScrapeOptions};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Running commentary on stdout; diagnostics go to stderr via `tracing`.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn page(&mut self, page_index: u32) {
        println!("Fetching page {}...", page_index + 1);
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn page_done(&mut self, _page_index: u32, collected: usize) {
        println!("Collected {collected} games so far.");
    }
}

/// No flags, no config: the whole run is driven by the built-in defaults.
pub fn run() -> Result<RunSummary> {
    crate::log::init(DEFAULT_LOG_FILTER);

    let opts = ScrapeOptions::default();
    let mut progress = ConsoleProgress;
    let summary = runner::run(&opts, Some(&mut progress))?;

    match &summary.written {
        Some(path) => println!("Data saved to {}", path.display()),
        None => println!("No data to save."),
    }
    Ok(summary)
}
