// ABOUTME: Page metadata extraction: title, description, keywords, language and Open Graph fields.
// ABOUTME: Titles are cut at the first separator so the site name is dropped.

use scraper::Html;

use crate::options::Options;
use crate::query::{meta_by_name, meta_by_og_property, select_text_with};
use crate::result::{OpenGraph, PageMetadata};

/// Separator between the page title and the site name.
pub const TITLE_SEPARATOR: &str = "—";

/// Language reported when `<html lang>` is missing or empty.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Keeps the part of `title` before the first `separator`, trimmed.
pub fn process_title(title: &str, separator: &str) -> String {
    if separator.is_empty() {
        return title.trim().to_string();
    }
    title
        .split(separator)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Splits a comma-separated keyword list, dropping empty tokens.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts the page metadata block.
pub fn extract_meta(doc: &Html, opts: &Options) -> PageMetadata {
    let separator = opts.title_separator.as_str();

    let title = select_text_with(doc, "title", "", |t| Ok(process_title(t, separator)));
    let language = doc
        .root_element()
        .value()
        .attr("lang")
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .unwrap_or(opts.default_language.as_str())
        .to_string();

    PageMetadata {
        title,
        description: meta_by_name(doc, "description"),
        keywords: split_keywords(&meta_by_name(doc, "keywords")),
        language,
        open_graph: OpenGraph {
            title: process_title(&meta_by_og_property(doc, "title"), separator),
            image: meta_by_og_property(doc, "image"),
            og_type: meta_by_og_property(doc, "type"),
        },
    }
}
