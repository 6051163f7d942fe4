// ABOUTME: Main library entry point for the shopfront product page extractor.
// ABOUTME: Re-exports the public API: Extractor, ExtractorBuilder, Options, ExtractionResult and its records.

//! Shopfront - structured data extraction for e-commerce product pages.
//!
//! Given an already-parsed product page, this crate produces one
//! [`ExtractionResult`] holding page metadata, the product with its price,
//! tags, properties, sanitized description and gallery, the suggested
//! products and the reviews. Extraction is synchronous, read-only and total:
//! missing fragments resolve to documented defaults.
//!
//! # Example
//!
//! ```
//! use scraper::Html;
//!
//! let doc = Html::parse_document(
//!     r#"<html><head><title>Runner — Shop</title></head>
//!     <body><div class="about"><div class="price">$120 <s>$150</s></div></div></body></html>"#,
//! );
//! let result = shopfront::extract(&doc);
//! assert_eq!(result.meta.title, "Runner");
//! assert_eq!(result.product.price.discount_percent, "20.00%");
//! ```

pub mod compiled;
pub mod currency;
pub mod error;
pub mod extractor;
pub mod extractors;
pub mod options;
pub mod query;
pub mod result;

pub use crate::currency::currency_code;
pub use crate::error::{ErrorCode, ExtractError};
pub use crate::extractor::{extract, Extractor};
pub use crate::options::{ExtractorBuilder, Options};
pub use crate::result::{
    ExtractionResult, ImageRef, OpenGraph, PageMetadata, PriceInfo, Product, Review,
    ReviewAuthor, SuggestedProduct, TagKind, TagSet,
};
