// ABOUTME: Pre-compiled CSS selector cache shared by the query primitives.
// ABOUTME: Selectors are parsed once per process; invalid selectors are cached as None.

//! Selector caching for repeated DOM queries.
//!
//! Every extraction run issues the same fixed set of selectors, so parsing
//! them once and sharing the compiled form keeps repeated runs cheap.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use scraper::Selector;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Arc<Selector>>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `Some(selector)` if the selector is valid, `None` if invalid.
pub fn get_or_compile(css: &str) -> Option<Arc<Selector>> {
    {
        let cache = SELECTOR_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok().map(Arc::new);
    let mut cache = SELECTOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    // Another thread may have inserted while we were parsing.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector_is_cached() {
        let first = get_or_compile(".about .price").expect("valid selector");
        let second = get_or_compile(".about .price").expect("valid selector");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_invalid_selector_returns_none() {
        assert!(get_or_compile("[[[invalid").is_none());
        assert!(get_or_compile("[[[invalid").is_none());
    }

    #[test]
    fn test_selector_list_compiles() {
        assert!(get_or_compile("h3, h4, h5, h6").is_some());
    }
}
