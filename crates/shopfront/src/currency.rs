// ABOUTME: Currency glyph mapping and price-literal parsing.
// ABOUTME: Glyphs map to ISO-like codes; amounts parse with leading-number semantics, malformed input is 0.

use once_cell::sync::Lazy;
use regex::Regex;

/// Glyph assumed when the price block is missing entirely.
///
/// Kept for compatibility with existing consumers of this page template; it is
/// a hardcoded locale default rather than something derived from the page.
pub const FALLBACK_CURRENCY_GLYPH: char = '₽';

const CURRENCY_CODES: &[(&str, &str)] = &[("$", "USD"), ("€", "EUR"), ("₽", "RUB")];

// Longest leading decimal literal, as accepted by a lenient float parse.
static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

/// Maps a currency glyph to its code. Unknown glyphs pass through unchanged.
pub fn currency_code(glyph: &str) -> String {
    CURRENCY_CODES
        .iter()
        .find(|(symbol, _)| *symbol == glyph)
        .map(|(_, code)| *code)
        .unwrap_or(glyph)
        .to_string()
}

/// Splits raw price text into its leading glyph and the remainder.
///
/// Returns `None` for empty text.
pub fn split_glyph(text: &str) -> Option<(char, &str)> {
    let mut chars = text.chars();
    let glyph = chars.next()?;
    Some((glyph, chars.as_str()))
}

/// Parses the leading decimal number of `text`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12.5 pcs"`
/// yields `12.5`. Text with no leading number yields `0.0`.
pub fn parse_amount(text: &str) -> f64 {
    LEADING_NUMBER_RE
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses `<glyph><number>` price text into its amount, ignoring the glyph.
pub fn parse_price(text: &str) -> f64 {
    split_glyph(text)
        .map(|(_, rest)| parse_amount(rest))
        .unwrap_or(0.0)
}
