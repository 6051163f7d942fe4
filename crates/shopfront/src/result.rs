// ABOUTME: ExtractionResult and the records it aggregates: page metadata, product, suggestions, reviews.
// ABOUTME: Serialized with camelCase keys; every field has a default so partial pages still produce a record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Discount percent reported when there is no old price.
pub const NO_DISCOUNT_PERCENT: &str = "0%";

/// Everything extracted from one product page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExtractionResult {
    pub meta: PageMetadata,
    pub product: Product,
    pub suggested: Vec<SuggestedProduct>,
    pub reviews: Vec<Review>,
}

impl ExtractionResult {
    /// Serializes the result as JSON, pretty-printed when `pretty` is set.
    ///
    /// The derived records always serialize; the `Result` carries serde_json's
    /// error through the crate error type for callers that propagate with `?`.
    pub fn to_json(&self, pretty: bool) -> Result<String, ExtractError> {
        let out = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        out.map_err(|e| ExtractError::serialize("to_json", Some(e.into())))
    }

    /// Returns true if nothing identifying was found on the page.
    pub fn is_empty(&self) -> bool {
        self.meta.title.is_empty()
            && self.product.name.is_empty()
            && self.suggested.is_empty()
            && self.reviews.is_empty()
    }
}

/// Document-level metadata from the head section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub language: String,
    pub open_graph: OpenGraph,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OpenGraph {
    pub title: String,
    pub image: String,
    #[serde(rename = "type")]
    pub og_type: String,
}

/// Current and previous price with the derived discount.
///
/// Build through [`PriceInfo::new`] so the discount fields always agree with
/// the two amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    pub price: f64,
    /// `0` means there is no discount.
    pub old_price: f64,
    pub discount_value: f64,
    pub discount_percent: String,
    pub currency: String,
}

impl PriceInfo {
    pub fn new(price: f64, old_price: f64, currency: impl Into<String>) -> Self {
        let (discount_value, discount_percent) = if old_price != 0.0 {
            (
                old_price - price,
                format!("{}%", format_fixed2(100.0 - (price / old_price) * 100.0)),
            )
        } else {
            (0.0, NO_DISCOUNT_PERCENT.to_string())
        };
        Self {
            price,
            old_price,
            discount_value,
            discount_percent,
            currency: currency.into(),
        }
    }
}

impl Default for PriceInfo {
    fn default() -> Self {
        Self::new(0.0, 0.0, "")
    }
}

/// Formats `value` with two decimals, rounding exact ties away from zero.
///
/// `{:.2}` alone rounds ties to even, so `28.125` would print as `28.12`.
/// A double sits exactly halfway between two hundredths only when it is an
/// odd multiple of 1/8, which `value * 8.0` detects without rounding error.
pub fn format_fixed2(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let eighths = value * 8.0;
    let is_tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_tie || eighths.abs() >= 9.0e15 {
        return format!("{:.2}", value);
    }
    let hundredths = (value.abs() * 100.0).ceil() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100)
}

/// Tag texts grouped by category. All three categories are always present.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TagSet {
    pub category: Vec<String>,
    pub discount: Vec<String>,
    pub label: Vec<String>,
}

/// The category a product tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Category,
    Discount,
    Label,
}

impl TagSet {
    pub fn get(&self, kind: TagKind) -> &[String] {
        match kind {
            TagKind::Category => &self.category,
            TagKind::Discount => &self.discount,
            TagKind::Label => &self.label,
        }
    }

    pub fn get_mut(&mut self, kind: TagKind) -> &mut Vec<String> {
        match kind {
            TagKind::Category => &mut self.category,
            TagKind::Discount => &mut self.discount,
            TagKind::Label => &mut self.label,
        }
    }
}

/// One gallery image.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ImageRef {
    pub preview: String,
    /// High-resolution source, or `preview` when none is declared.
    pub full: String,
    pub alt: String,
}

/// The primary product on the page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub is_liked: bool,
    pub tags: TagSet,
    #[serde(flatten)]
    pub price: PriceInfo,
    pub properties: IndexMap<String, String>,
    /// Description markup with every attribute removed.
    pub description: String,
    pub images: Vec<ImageRef>,
}

impl Product {
    /// Returns true if an old price was found.
    pub fn has_discount(&self) -> bool {
        self.price.old_price != 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SuggestedProduct {
    pub name: String,
    pub description: String,
    pub image: String,
    /// Price text without its currency glyph; not parsed.
    pub price: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Review {
    /// Number of filled rating marks.
    pub rating: u32,
    pub author: ReviewAuthor,
    pub title: String,
    pub description: String,
    /// Date text with `/` separators replaced by `.`.
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReviewAuthor {
    pub avatar: String,
    pub name: String,
}
