// src/record.rs
//
// The one entity this crate produces, plus its fixed CSV shape.
//
// Sentinels are not uniform across fields: release/price/genre/review use
// "unknown" (`None`, written as `N/A`), while the four flags and the rating
// fall back to 0. Both conventions are kept per field.

use std::fmt::Display;

use crate::config::consts::UNKNOWN;

pub const HEADERS: [&str; 11] = [
    "Game Name",
    "Game ID",
    "Release Date",
    "Price",
    "Genre",
    "Positive Reviews Percentage",
    "In Game Purchases",
    "Awards",
    "Linux Support",
    "Single Player",
    "GM rating",
];

/// Attributes read off a game's detail page.
#[derive(Clone, Debug, PartialEq)]
pub struct GameDetails {
    pub release_year: Option<i32>,
    pub price: Option<f64>,
    pub genre: Option<String>,
    pub positive_review_pct: Option<u32>,
    pub has_in_game_purchases: bool,
    pub has_awards: bool,
    pub has_linux_support: bool,
    pub is_single_player: bool,
    /// 0.0 when missing or unparseable, never "unknown".
    pub rating: f64,
}

impl GameDetails {
    /// Full sentinel form, used when the detail page couldn't be fetched.
    pub fn unknown() -> Self {
        Self {
            release_year: None,
            price: None,
            genre: None,
            positive_review_pct: None,
            has_in_game_purchases: false,
            has_awards: false,
            has_linux_support: false,
            is_single_player: false,
            rating: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub name: Option<String>,
    pub id: String,
    pub details: GameDetails,
}

impl GameRecord {
    pub fn new(name: Option<String>, id: String, details: GameDetails) -> Self {
        Self { name, id, details }
    }

    /// One output row, in `HEADERS` order.
    pub fn to_row(&self) -> [String; 11] {
        let d = &self.details;
        [
            or_unknown(&self.name),
            self.id.clone(),
            or_unknown(&d.release_year),
            d.price.map(decimal).unwrap_or_else(|| s!(UNKNOWN)),
            or_unknown(&d.genre),
            or_unknown(&d.positive_review_pct),
            flag(d.has_in_game_purchases),
            flag(d.has_awards),
            flag(d.has_linux_support),
            flag(d.is_single_player),
            decimal(d.rating),
        ]
    }
}

fn or_unknown<T: Display>(v: &Option<T>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => s!(UNKNOWN),
    }
}

fn flag(b: bool) -> String {
    s!(if b { "1" } else { "0" })
}

/// Decimals keep one fractional digit when whole ("0.0", "20.0", "8.5").
fn decimal(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}
