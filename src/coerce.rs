//! Lenient scalar coercion for tag content.
//!
//! Card tags are free text. Dimensions and durations are read the way
//! browsers read them: leading numeric prefix, `NaN` when there is none.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Optional sign followed by ASCII digits at the start of the text.
static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("INT_PREFIX regex"));

/// Longest decimal float literal at the start of the text.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").expect("FLOAT_PREFIX regex")
});

/// Parse the leading base-10 integer of `text`, `NaN` if there is none.
///
/// ```
/// use twitter_cards::coerce::parse_int;
///
/// assert_eq!(parse_int(Some(" 480px")), 480.0);
/// assert!(parse_int(Some("wide")).is_nan());
/// assert!(parse_int(None).is_nan());
/// ```
#[must_use]
pub fn parse_int(text: Option<&str>) -> f64 {
    text.and_then(|t| INT_PREFIX.find(t.trim_start()))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parse the leading decimal number of `text`, `NaN` if there is none.
#[must_use]
pub fn parse_float(text: Option<&str>) -> f64 {
    let Some(m) = text.and_then(|t| FLOAT_PREFIX.find(t.trim_start())) else {
        return f64::NAN;
    };
    let literal = m.as_str();
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

/// Boolean flags are set only by the literal text `true`.
#[must_use]
pub fn parse_flag(text: Option<&str>) -> bool {
    text == Some("true")
}

/// Keep at most `limit` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
