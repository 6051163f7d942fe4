// ABOUTME: Extraction rules for the four parts of a product page.
// ABOUTME: Each rule reads the document independently and returns a fully-defaulted record.

//! Extraction rules.
//!
//! Submodules:
//! - `meta`: page title, description, keywords, language and Open Graph fields.
//! - `product`: the primary product, including price, tags and properties.
//! - `sanitize`: attribute-stripping serializer used for the product description.
//! - `suggested`: suggested product cards.
//! - `reviews`: review cards.

pub mod meta;
pub mod product;
pub mod reviews;
pub mod sanitize;
pub mod suggested;
