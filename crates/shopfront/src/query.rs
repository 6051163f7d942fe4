// ABOUTME: Query primitives shared by every extraction rule: scoped lookups, text and meta reads.
// ABOUTME: All primitives are total; absence resolves to a caller-supplied default.

//! Query primitives.
//!
//! Key behaviors:
//! - Lookups are scoped to either the whole document or an element; element
//!   scopes match descendants only.
//! - Invalid selectors behave as "no match".
//! - Text reads return the trimmed text content, or the default when the
//!   element is absent or its content is empty.
//! - A failing transform is logged and the untransformed text is kept.

use scraper::{ElementRef, Html, Selector};

use crate::compiled::get_or_compile;

/// A root that selectors can be evaluated against.
pub trait Scope<'a>: Copy {
    fn select_all(self, selector: &Selector) -> Vec<ElementRef<'a>>;
    fn select_first(self, selector: &Selector) -> Option<ElementRef<'a>>;
}

impl<'a> Scope<'a> for &'a Html {
    fn select_all(self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }

    fn select_first(self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }
}

impl<'a> Scope<'a> for ElementRef<'a> {
    fn select_all(self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }

    fn select_first(self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }
}

/// Returns the first element matching `css` inside `scope`.
pub fn find_one<'a, S: Scope<'a>>(scope: S, css: &str) -> Option<ElementRef<'a>> {
    let selector = get_or_compile(css)?;
    scope.select_first(&selector)
}

/// Returns every element matching `css` inside `scope`, in document order.
pub fn find_all<'a, S: Scope<'a>>(scope: S, css: &str) -> Vec<ElementRef<'a>> {
    match get_or_compile(css) {
        Some(selector) => scope.select_all(&selector),
        None => Vec::new(),
    }
}

/// Trimmed text content of an element, `None` when absent or empty.
fn content_of(element: Option<ElementRef<'_>>) -> Option<String> {
    let element = element?;
    let text = element.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads the trimmed text of `element`, falling back to `default`.
pub fn text(element: Option<ElementRef<'_>>, default: &str) -> String {
    content_of(element).unwrap_or_else(|| default.to_string())
}

/// Reads the trimmed text of `element` and post-processes it with `transform`.
///
/// The default is returned untouched when there is no content. If the
/// transform fails the error is logged and the trimmed text is returned.
pub fn text_with<F>(element: Option<ElementRef<'_>>, default: &str, transform: F) -> String
where
    F: Fn(&str) -> anyhow::Result<String>,
{
    let Some(content) = content_of(element) else {
        return default.to_string();
    };
    match transform(&content) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, text = %content, "text transform failed; keeping raw text");
            content
        }
    }
}

/// Selector form of [`text`].
pub fn select_text<'a, S: Scope<'a>>(scope: S, css: &str, default: &str) -> String {
    text(find_one(scope, css), default)
}

/// Selector form of [`text_with`].
pub fn select_text_with<'a, S, F>(scope: S, css: &str, default: &str, transform: F) -> String
where
    S: Scope<'a>,
    F: Fn(&str) -> anyhow::Result<String>,
{
    text_with(find_one(scope, css), default, transform)
}

/// Raw attribute value of `element`, or `default` when absent.
pub fn attr_or(element: Option<ElementRef<'_>>, attr: &str, default: &str) -> String {
    element
        .and_then(|el| el.value().attr(attr))
        .unwrap_or(default)
        .to_string()
}

/// `content` attribute of the first `meta[name=..]` element, or empty.
pub fn meta_by_name(doc: &Html, name: &str) -> String {
    let css = format!("meta[name=\"{}\"]", name);
    attr_or(find_one(doc, &css), "content", "")
}

/// `content` attribute of the first `meta[property="og:.."]` element, or empty.
pub fn meta_by_og_property(doc: &Html, property: &str) -> String {
    let css = format!("meta[property=\"og:{}\"]", property);
    attr_or(find_one(doc, &css), "content", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>  Sample  </title>
            <meta name="description" content="Short blurb">
            <meta name="description" content="Second blurb">
            <meta property="og:type" content="product">
            <meta property="og:empty">
        </head>
        <body>
            <section class="card">
                <h3>  Inside card </h3>
                <p></p>
                <span class="date">01/02/2024</span>
            </section>
            <h3>Outside card</h3>
            <ul><li>One</li><li>Two</li><li>Three</li></ul>
        </body>
        </html>
    "#;

    fn parse_html() -> Html {
        Html::parse_document(SAMPLE_HTML)
    }

    #[test]
    fn test_find_one_returns_first_in_document_order() {
        let doc = parse_html();
        let h3 = find_one(&doc, "h3").expect("h3 present");
        assert_eq!(text(Some(h3), ""), "Inside card");
    }

    #[test]
    fn test_find_one_scoped_to_element() {
        let doc = parse_html();
        let card = find_one(&doc, ".card").expect("card present");
        assert!(find_one(card, "li").is_none());
        assert_eq!(select_text(card, "h3", ""), "Inside card");
    }

    #[test]
    fn test_element_scope_excludes_itself() {
        let doc = parse_html();
        let card = find_one(&doc, ".card").expect("card present");
        assert!(find_one(card, "section").is_none());
    }

    #[test]
    fn test_find_all_preserves_order() {
        let doc = parse_html();
        let items: Vec<String> = find_all(&doc, "li")
            .into_iter()
            .map(|li| text(Some(li), ""))
            .collect();
        assert_eq!(items, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_find_all_invalid_selector_is_empty() {
        let doc = parse_html();
        assert!(find_all(&doc, "[[[invalid").is_empty());
        assert!(find_one(&doc, "[[[invalid").is_none());
    }

    #[test]
    fn test_text_default_for_missing_and_empty() {
        let doc = parse_html();
        assert_eq!(select_text(&doc, ".missing", "n/a"), "n/a");
        assert_eq!(select_text(&doc, ".card p", "n/a"), "n/a");
        assert_eq!(select_text(&doc, "title", ""), "Sample");
    }

    #[test]
    fn test_text_with_applies_transform() {
        let doc = parse_html();
        let date = select_text_with(&doc, ".date", "", |t| Ok(t.replace('/', ".")));
        assert_eq!(date, "01.02.2024");
    }

    #[test]
    fn test_text_with_skips_transform_for_default() {
        let doc = parse_html();
        let value = select_text_with(&doc, ".missing", "fallback", |t| Ok(t.to_uppercase()));
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_text_with_failing_transform_keeps_raw_text() {
        let doc = parse_html();
        let value = select_text_with(&doc, ".date", "", |_| {
            Err(anyhow::anyhow!("cannot process"))
        });
        assert_eq!(value, "01/02/2024");
    }

    #[test]
    fn test_meta_by_name_first_match() {
        let doc = parse_html();
        assert_eq!(meta_by_name(&doc, "description"), "Short blurb");
        assert_eq!(meta_by_name(&doc, "keywords"), "");
    }

    #[test]
    fn test_meta_by_og_property() {
        let doc = parse_html();
        assert_eq!(meta_by_og_property(&doc, "type"), "product");
        assert_eq!(meta_by_og_property(&doc, "image"), "");
        assert_eq!(meta_by_og_property(&doc, "empty"), "");
    }

    #[test]
    fn test_attr_or_default() {
        let doc = parse_html();
        let card = find_one(&doc, ".card");
        assert_eq!(attr_or(card, "class", ""), "card");
        assert_eq!(attr_or(card, "data-id", "none"), "none");
        assert_eq!(attr_or(None, "class", "none"), "none");
    }
}
