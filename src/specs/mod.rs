// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications for the Steam store. Each spec
//! focuses on a single page and encodes *where the ground truth lives in the
//! HTML* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched bodies (`/search/results/`,
//!   `/app/{id}/`). No networking: callers hand in a `&str`.
//! - **Selector choice & fallbacks** (e.g. the demo-button price location vs
//!   the regular purchase block).
//! - **Tolerant field extraction**: every field parser is independent and
//!   infallible, returning its value or that field's sentinel.
//!
//! ## What does **not** live here
//! - Fetching, paging, throttling (`scrape`).
//! - Output formatting (`record`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner::run → scrape::collect_games → scrape::fetch_listing → specs::listing::parse_listing
//!                                     ↘ scrape::fetch_details → specs::detail::parse_details
//!             → file::write_records
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured fixtures
//!   (`tests/fixtures/*.html`).
pub mod detail;
pub mod listing;
