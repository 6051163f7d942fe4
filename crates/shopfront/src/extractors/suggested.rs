// ABOUTME: Suggested product cards: name, blurb, image and the unparsed price with its currency.
// ABOUTME: Unlike the primary product the price stays a string with only the glyph removed.

use scraper::{ElementRef, Html};

use crate::currency::{currency_code, split_glyph};
use crate::options::Options;
use crate::query::{attr_or, find_all, find_one, select_text};
use crate::result::SuggestedProduct;

/// Extracts every suggested product card in document order.
pub fn extract_suggested(doc: &Html, opts: &Options) -> Vec<SuggestedProduct> {
    find_all(doc, ".suggested .items article")
        .into_iter()
        .map(|card| suggested_card(card, opts))
        .collect()
}

fn suggested_card(card: ElementRef<'_>, opts: &Options) -> SuggestedProduct {
    let price_text = select_text(card, "b", "");
    let (price, currency) = match split_glyph(&price_text) {
        Some((glyph, rest)) => (rest.to_string(), currency_code(&glyph.to_string())),
        None => (String::new(), String::new()),
    };

    SuggestedProduct {
        name: select_text(card, "h3", ""),
        description: select_text(card, "p", ""),
        image: opts.resolve_url(&attr_or(find_one(card, "img"), "src", "")),
        price,
        currency,
    }
}
