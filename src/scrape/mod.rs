// src/scrape/mod.rs
mod scrape;

pub use scrape::{collect_games, fetch_details, fetch_listing, CollectStats};
