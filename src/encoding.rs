//! Character encoding detection for byte input.
//!
//! Pages handed to the card parser may arrive as raw bytes. The charset is
//! taken from a byte-order mark, then from the document's own meta
//! declarations, and defaults to UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Match `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#).expect("valid regex")
});

/// Charset declared in the first kilobyte of `html`, or UTF-8.
///
/// The `http-equiv` form is only consulted when no `<meta charset>` names a
/// usable encoding.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE]
        .into_iter()
        .filter_map(|re| re.captures(&head)?.get(1))
        .find_map(|label| declared_encoding(label.as_str()))
        .unwrap_or(UTF_8)
}

// A page that could declare its charset in ASCII is not UTF-16, and
// labels mapped to the replacement encoding are ignored.
fn declared_encoding(label: &str) -> Option<&'static Encoding> {
    let encoding = Encoding::for_label_no_replacement(label.as_bytes())?;
    if encoding == UTF_16LE || encoding == UTF_16BE {
        return Some(UTF_8);
    }
    Some(encoding)
}

/// Decode `html` to UTF-8, replacing invalid sequences with U+FFFD.
///
/// # Examples
///
/// ```
/// use twitter_cards::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><meta name=\"twitter:title\" content=\"Caf\xE9\">";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 && Encoding::for_bom(html).is_none() {
        return String::from_utf8_lossy(html);
    }

    // `decode` strips a BOM and never fails.
    let (decoded, _, _) = encoding.decode(html);
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_meta_charset() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detects_content_type_charset() {
        let html = br#"<META HTTP-EQUIV="content-type" CONTENT="text/html; CHARSET=Shift_JIS">"#;
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn bom_takes_precedence_over_meta() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="windows-1252"><title>x</title>"#);
        assert_eq!(detect_encoding(&html), UTF_8);
        assert!(decode_html(&html).starts_with("<meta"));
    }

    #[test]
    fn declared_utf16_reads_as_utf8() {
        let html = br#"<meta charset="utf-16"><meta name="twitter:card" content="summary">"#;
        assert_eq!(detect_encoding(html), UTF_8);
        assert!(decode_html(html).contains("twitter:card"));

        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=UTF-16BE">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn replacement_label_is_ignored() {
        let html = br#"<meta charset="iso-2022-kr"><meta name="twitter:card" content="summary">"#;
        assert_eq!(detect_encoding(html), UTF_8);
        assert!(decode_html(html).contains("summary"));
    }

    #[test]
    fn utf16_bom_still_detected() {
        let html = [0xFF, 0xFE, b'<', 0x00];
        assert_eq!(detect_encoding(&html), UTF_16LE);
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="no-such-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn declaration_beyond_sniff_limit_is_ignored() {
        let mut html = vec![b' '; SNIFF_LIMIT];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let html = b"<meta name=\"twitter:title\" content=\"Bad \xFF byte\">";
        let decoded = decode_html(html);
        assert!(decoded.contains('\u{FFFD}'));
        assert!(decoded.contains("byte"));
    }
}
