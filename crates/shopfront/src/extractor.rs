// ABOUTME: Extractor runs the four extraction rules against one document and merges their output.
// ABOUTME: Holds only immutable options, so one instance can serve many documents and threads.

use scraper::Html;

use crate::extractors::meta::extract_meta;
use crate::extractors::product::extract_product;
use crate::extractors::reviews::extract_reviews;
use crate::extractors::suggested::extract_suggested;
use crate::options::{ExtractorBuilder, Options};
use crate::result::ExtractionResult;

/// Product page extractor.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    opts: Options,
}

impl Extractor {
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Extracts the full record from an already-parsed document.
    ///
    /// Never fails: absent or malformed fragments resolve to their defaults.
    /// Repeated calls on the same document return equal results.
    pub fn extract(&self, doc: &Html) -> ExtractionResult {
        let result = ExtractionResult {
            meta: extract_meta(doc, &self.opts),
            product: extract_product(doc, &self.opts),
            suggested: extract_suggested(doc, &self.opts),
            reviews: extract_reviews(doc, &self.opts),
        };
        tracing::debug!(
            title = %result.meta.title,
            suggested = result.suggested.len(),
            reviews = result.reviews.len(),
            "extracted product page"
        );
        result
    }

    /// Parses `html` as a full document and extracts from it.
    pub fn extract_html(&self, html: &str) -> ExtractionResult {
        let doc = Html::parse_document(html);
        self.extract(&doc)
    }
}

/// Extracts from `doc` using default options.
pub fn extract(doc: &Html) -> ExtractionResult {
    Extractor::default().extract(doc)
}
