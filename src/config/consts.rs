// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://store.steampowered.com";
pub const USER_AGENT: &str = concat!("steam_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Listing
pub const PAGE_SIZE: u32 = 20;
pub const SORT_BY: &str = "Popularity_DESC";

// Scrape
pub const TARGET_GAMES: usize = 3000;
pub const PAGE_DELAY_MS: u64 = 1000; // be polite

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const FILE_PREFIX: &str = "steam_games";
pub const FILE_TIMESTAMP_FMT: &str = "%Y-%m-%d_%H-%M-%S";
pub const UNKNOWN: &str = "N/A";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";
