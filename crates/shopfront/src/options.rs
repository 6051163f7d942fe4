// ABOUTME: Configuration options for the extractor including Options and ExtractorBuilder.
// ABOUTME: ExtractorBuilder provides a fluent API for constructing Extractor instances with custom settings.

use url::Url;

use crate::currency::FALLBACK_CURRENCY_GLYPH;
use crate::error::ExtractError;
use crate::extractor::Extractor;
use crate::extractors::meta::{DEFAULT_LANGUAGE, TITLE_SEPARATOR};
use crate::extractors::product::FALLBACK_PRODUCT_ID;

/// Configuration options for the extractor.
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL used to resolve relative image sources. Sources are kept
    /// verbatim when unset.
    pub base_url: Option<Url>,
    pub title_separator: String,
    pub fallback_product_id: String,
    pub fallback_currency_glyph: char,
    pub default_language: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: None,
            title_separator: TITLE_SEPARATOR.to_string(),
            fallback_product_id: FALLBACK_PRODUCT_ID.to_string(),
            fallback_currency_glyph: FALLBACK_CURRENCY_GLYPH,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Options {
    /// Resolves an image source against `base_url`.
    ///
    /// Empty sources stay empty; unresolvable ones are returned unchanged.
    pub fn resolve_url(&self, src: &str) -> String {
        let src = src.trim();
        if src.is_empty() {
            return String::new();
        }
        match &self.base_url {
            Some(base) => match base.join(src) {
                Ok(resolved) => resolved.to_string(),
                Err(_) => src.to_string(),
            },
            None => src.to_string(),
        }
    }
}

/// Builder for constructing Extractor instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ExtractorBuilder {
    opts: Options,
}

impl ExtractorBuilder {
    /// Create a new ExtractorBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the base URL for resolving relative image sources.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, ExtractError> {
        let url = Url::parse(base_url).map_err(|e| {
            ExtractError::invalid_url(
                "base_url",
                Some(anyhow::anyhow!("invalid base URL {:?}: {}", base_url, e)),
            )
        })?;
        self.opts.base_url = Some(url);
        Ok(self)
    }

    /// Set the separator that splits the site name off page titles.
    pub fn title_separator(mut self, separator: impl Into<String>) -> Self {
        self.opts.title_separator = separator.into();
        self
    }

    /// Set the product id used when the page declares none.
    pub fn fallback_product_id(mut self, id: impl Into<String>) -> Self {
        self.opts.fallback_product_id = id.into();
        self
    }

    /// Set the currency glyph assumed when the price block is missing.
    pub fn fallback_currency_glyph(mut self, glyph: char) -> Self {
        self.opts.fallback_currency_glyph = glyph;
        self
    }

    /// Set the language reported when the document declares none.
    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.opts.default_language = language.into();
        self
    }

    /// Build the Extractor with the configured options.
    pub fn build(self) -> Extractor {
        Extractor::new(self.opts)
    }
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
