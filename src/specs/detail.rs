// src/specs/detail.rs
//! Scraping *spec* for a game's detail page (`/app/{id}/`).
//!
//! Every field has its own parser taking the parsed document and returning
//! the value or that field's sentinel. No parser can fail the record; a
//! missing node only degrades its own field.
//!
//! Only the DLC marker short-circuits: DLC pages yield `DetailOutcome::Skip`
//! and nothing else is read.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use scraper::{Html, Selector};

use crate::core::html::{attr, first, has, selector, text_after_first_break, text_of};
use crate::core::sanitize::clean_price;
use crate::record::GameDetails;

const ICON_DLC: &str = "https://store.akamai.steamstatic.com/public/images/v6/ico/ico_dlc.png";
const ICON_CART: &str = "https://store.akamai.steamstatic.com/public/images/v6/ico/ico_cart.png";
const ICON_SINGLE_PLAYER: &str =
    "https://store.akamai.steamstatic.com/public/images/v6/ico/ico_singlePlayer.png";

/// Any of these anywhere in the price text means the game costs nothing.
pub const FREE_MARKERS: [&str; 3] = ["Free To Play", "Free", "Play for Free!"];

/// `21 Aug, 2012` is the store's day-first form; `Aug 21, 2012` shows up
/// under US locales.
const DATE_FORMATS: [&str; 2] = ["%d %b, %Y", "%b %d, %Y"];

fn category_icon(src: &str) -> Selector {
    Selector::parse(&format!(r#"img.category_icon[src="{src}"]"#))
        .unwrap_or_else(|e| panic!("invalid category icon selector for {src}: {e}"))
}

static DLC_ICON: LazyLock<Selector> = LazyLock::new(|| category_icon(ICON_DLC));
static CART_ICON: LazyLock<Selector> = LazyLock::new(|| category_icon(ICON_CART));
static SINGLE_PLAYER_ICON: LazyLock<Selector> =
    LazyLock::new(|| category_icon(ICON_SINGLE_PLAYER));

static RELEASE_DATE: LazyLock<Selector> = LazyLock::new(|| selector(".release_date .date"));
static DEMO_BUTTON: LazyLock<Selector> = LazyLock::new(|| selector("#demoGameBtn.btn_addtocart"));
static PURCHASE_PRICE: LazyLock<Selector> =
    LazyLock::new(|| selector(".game_purchase_price.price"));
static GENRE_PANEL: LazyLock<Selector> = LazyLock::new(|| selector("span[data-panel]"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static REVIEW_ROW: LazyLock<Selector> = LazyLock::new(|| selector(".user_reviews_summary_row"));
static AWARDS: LazyLock<Selector> = LazyLock::new(|| selector("#AwardsDefault"));
static LINUX_TAB: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"div.sysreq_tab[data-os="linux"]"#));
static REVIEWS_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector("#game_area_reviews"));

static PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)%").unwrap_or_else(|e| panic!("invalid percent pattern: {e}"))
});

#[derive(Clone, Debug, PartialEq)]
pub enum DetailOutcome {
    /// DLC page; not a game, never recorded.
    Skip,
    Details(GameDetails),
}

pub fn parse_details(html: &str) -> DetailOutcome {
    extract_details(&Html::parse_document(html))
}

pub fn extract_details(doc: &Html) -> DetailOutcome {
    if is_dlc(doc) {
        return DetailOutcome::Skip;
    }

    DetailOutcome::Details(GameDetails {
        release_year: release_year(doc),
        price: price(doc),
        genre: genre(doc),
        positive_review_pct: positive_review_pct(doc),
        has_in_game_purchases: has_in_game_purchases(doc),
        has_awards: has_awards(doc),
        has_linux_support: has_linux_support(doc),
        is_single_player: is_single_player(doc),
        rating: rating(doc),
    })
}

pub fn is_dlc(doc: &Html) -> bool {
    has(doc, &DLC_ICON)
}

/* ---------- release date ---------- */

pub fn release_year(doc: &Html) -> Option<i32> {
    first(doc, &RELEASE_DATE).and_then(|el| parse_release_year(&text_of(el)))
}

pub fn parse_release_year(text: &str) -> Option<i32> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(|d| d.year())
}

/* ---------- price ---------- */

/// With a demo button on the page the price element's text belongs to the
/// demo, so its `data-price-final` attribute is read instead. The attribute
/// value goes through the same text rules, unscaled.
pub fn price(doc: &Html) -> Option<f64> {
    let el = first(doc, &PURCHASE_PRICE)?;
    if has(doc, &DEMO_BUTTON) {
        return attr(el, "data-price-final").and_then(parse_price_text);
    }
    parse_price_text(&text_of(el))
}

pub fn is_free(text: &str) -> bool {
    FREE_MARKERS.iter().any(|m| text.contains(m))
}

pub fn parse_price_text(text: &str) -> Option<f64> {
    if is_free(text) {
        return Some(0.0);
    }
    let cleaned = clean_price(text);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0)
}

/* ---------- genre ---------- */

pub fn genre(doc: &Html) -> Option<String> {
    let panel = first(doc, &GENRE_PANEL)?;
    panel
        .select(&ANCHOR)
        .next()
        .map(text_of)
        .filter(|g| !g.is_empty())
}

/* ---------- reviews ---------- */

pub fn positive_review_pct(doc: &Html) -> Option<u32> {
    first(doc, &REVIEW_ROW)
        .and_then(|el| attr(el, "data-tooltip-html"))
        .and_then(parse_review_percentage)
}

/// `73% of the 1,234 user reviews for this game are positive.` → 73
pub fn parse_review_percentage(tooltip: &str) -> Option<u32> {
    PERCENT
        .captures(tooltip)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|pct| *pct <= 100)
}

/* ---------- flags ---------- */

pub fn has_in_game_purchases(doc: &Html) -> bool {
    has(doc, &CART_ICON)
}

pub fn has_awards(doc: &Html) -> bool {
    has(doc, &AWARDS)
}

pub fn has_linux_support(doc: &Html) -> bool {
    has(doc, &LINUX_TAB)
}

pub fn is_single_player(doc: &Html) -> bool {
    has(doc, &SINGLE_PLAYER_ICON)
}

/* ---------- rating ---------- */

/// Critic score from the reviews block. Unlike the fields above this falls
/// back to 0, not "unknown".
pub fn rating(doc: &Html) -> f64 {
    first(doc, &REVIEWS_BLOCK)
        .and_then(text_after_first_break)
        .and_then(|t| parse_rating_fragment(&t))
        .unwrap_or(0.0)
}

/// `8.5/10 — Very Positive` → 8.5
pub fn parse_rating_fragment(text: &str) -> Option<f64> {
    text.split('/').next()?.trim().parse::<f64>().ok()
}
