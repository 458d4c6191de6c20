// src/core/html.rs
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

static BR: LazyLock<Selector> = LazyLock::new(|| selector("br"));

/// Parse a CSS selector that is a compile-time constant of this crate.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

pub fn first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

pub fn has(doc: &Html, sel: &Selector) -> bool {
    first(doc, sel).is_some()
}

/// All descendant text of `el`, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Text following the first `<br>` inside `block`, up to the next `<br>`.
/// Sibling elements in between contribute their text. `None` when the block
/// has no `<br>` or nothing but whitespace follows it.
pub fn text_after_first_break(block: ElementRef<'_>) -> Option<String> {
    let br = block.select(&BR).next()?;

    let mut out = String::new();
    for node in br.next_siblings() {
        if let Some(text) = node.value().as_text() {
            out.push_str(text);
        } else if let Some(el) = ElementRef::wrap(node) {
            if el.value().name().eq_ignore_ascii_case("br") {
                break;
            }
            out.extend(el.text());
        }
    }

    let out = normalize_ws(&out);
    if out.is_empty() { None } else { Some(out) }
}
