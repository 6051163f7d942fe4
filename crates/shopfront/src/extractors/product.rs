// ABOUTME: Primary product extraction: identity, like state, tags, price, properties, description, images.
// ABOUTME: Every part degrades to a documented default; malformed prices read as 0.

//! Product extraction.
//!
//! Page template expectations:
//! - `.product[data-id]` carries the id and `.product h1` the name.
//! - `.product .preview .like.active` marks a liked product.
//! - `.about .price` holds the current price as its own text and the old
//!   price in its first child element, both as `<glyph><number>`.
//! - `.about .tags` holds tag chips styled `green`, `red` or `blue`.
//! - `.about .properties li` rows hold a key element followed by a value element.
//! - `.about .description` holds rich text.
//! - `.preview nav img` lists the gallery.

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Node};

use crate::currency::{currency_code, parse_price, split_glyph};
use crate::extractors::sanitize::sanitized_inner_html;
use crate::options::Options;
use crate::query::{attr_or, find_all, find_one, select_text, text};
use crate::result::{ImageRef, PriceInfo, Product, TagKind, TagSet};

/// Product id used when the container declares none.
pub const FALLBACK_PRODUCT_ID: &str = "product1";

const LIKED_CLASS: &str = "active";

/// Tag chip style classes and the category each one marks.
pub const TAG_STYLES: [(&str, TagKind); 3] = [
    ("green", TagKind::Category),
    ("red", TagKind::Discount),
    ("blue", TagKind::Label),
];

/// Extracts the primary product.
pub fn extract_product(doc: &Html, opts: &Options) -> Product {
    let id = find_one(doc, ".product")
        .and_then(|el| el.value().attr("data-id"))
        .filter(|id| !id.is_empty())
        .unwrap_or(opts.fallback_product_id.as_str())
        .to_string();

    let is_liked = find_one(doc, ".product .preview .like")
        .map(|el| el.value().classes().any(|c| c == LIKED_CLASS))
        .unwrap_or(false);

    let product = Product {
        id,
        name: select_text(doc, ".product h1", ""),
        is_liked,
        tags: extract_tags(doc),
        price: extract_price(doc, opts),
        properties: extract_properties(doc),
        description: find_one(doc, ".about .description")
            .map(sanitized_inner_html)
            .unwrap_or_default(),
        images: extract_images(doc, opts),
    };

    tracing::debug!(
        id = %product.id,
        properties = product.properties.len(),
        images = product.images.len(),
        "extracted product"
    );
    product
}

/// Reads the price block into a [`PriceInfo`].
///
/// A missing or empty block yields a zero price in the fallback currency.
pub fn extract_price(doc: &Html, opts: &Options) -> PriceInfo {
    let fallback_glyph = opts.fallback_currency_glyph.to_string();
    let block = match find_one(doc, ".about .price") {
        Some(block) if block.has_children() => block,
        _ => return PriceInfo::new(0.0, 0.0, currency_code(&fallback_glyph)),
    };

    let price_text = own_text(block);
    let old_price_text = text(block.children().find_map(ElementRef::wrap), "");

    let glyph = split_glyph(&price_text)
        .map(|(glyph, _)| glyph.to_string())
        .unwrap_or(fallback_glyph);

    PriceInfo::new(
        parse_price(&price_text),
        parse_price(&old_price_text),
        currency_code(&glyph),
    )
}

/// First non-blank text node directly under `element`, trimmed.
fn own_text(element: ElementRef<'_>) -> String {
    element
        .children()
        .find_map(|node| match node.value() {
            Node::Text(t) if !t.trim().is_empty() => Some(t.trim().to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Collects tag texts for each style binding, in document order.
pub fn extract_tags(doc: &Html) -> TagSet {
    let mut tags = TagSet::default();
    for (class, kind) in TAG_STYLES {
        let css = format!(".about .tags .{}", class);
        let slot = tags.get_mut(kind);
        for tag in find_all(doc, &css) {
            slot.push(text(Some(tag), ""));
        }
    }
    tags
}

/// Builds the key/value property map from the two-column rows.
///
/// Rows with an empty key are skipped; a repeated key overwrites the earlier
/// value and keeps the earlier position.
pub fn extract_properties(doc: &Html) -> IndexMap<String, String> {
    let mut properties = IndexMap::new();
    for row in find_all(doc, ".about .properties li") {
        let mut cells = row.children().filter_map(ElementRef::wrap);
        let key = text(cells.next(), "");
        if key.is_empty() {
            continue;
        }
        let value = text(cells.next(), "");
        properties.insert(key, value);
    }
    properties
}

/// Lists the gallery images in document order.
pub fn extract_images(doc: &Html, opts: &Options) -> Vec<ImageRef> {
    find_all(doc, ".preview nav img")
        .into_iter()
        .map(|img| {
            let preview = opts.resolve_url(&attr_or(Some(img), "src", ""));
            let full = match img.value().attr("data-src").filter(|s| !s.is_empty()) {
                Some(src) => opts.resolve_url(src),
                None => preview.clone(),
            };
            ImageRef {
                preview,
                full,
                alt: attr_or(Some(img), "alt", ""),
            }
        })
        .collect()
}
