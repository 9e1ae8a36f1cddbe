//! # twitter-cards
//!
//! Twitter Card metadata parser.
//!
//! Reads the `twitter:` meta tags of an HTML page, wherever they appear in
//! the document, and builds a typed card record: summary, app, player,
//! audio, amplify, or one of the undocumented live video cards.
//!
//! ## Quick Start
//!
//! ```rust
//! use twitter_cards::{parse, Card};
//!
//! let html = r#"<html><head>
//!     <meta name="twitter:card" content="summary">
//!     <meta name="twitter:site" content="@example">
//!     <meta property="og:title" content="My Article">
//!     <meta property="og:description" content="What it is about.">
//! </head></html>"#;
//!
//! let card = parse(html, "https://example.com/article")?;
//! match card {
//!     Some(Card::Summary(summary)) => assert_eq!(summary.title, "My Article"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), twitter_cards::Error>(())
//! ```
//!
//! ## Resolution rules
//!
//! - The first declaration of a tag wins; `name` and `property` are equivalent.
//! - Title, description and image fall back to their `og:` counterparts.
//! - `twitter:site:id` is accepted where `twitter:site` is missing.
//! - Pages without `twitter:card` but with `og:type` = `article` are summary cards.
//! - The deprecated `photo`, `gallery` and `product` types map onto summary cards.

mod error;
mod options;

/// Card record types.
pub mod card;

/// Meta tag collection from a parsed document.
pub mod tags;

/// Field lookup with namespace fallback and required policy.
pub mod resolver;

/// Namespace flattening for undocumented card types.
pub mod flatten;

/// Lenient numeric and boolean coercion of tag content.
pub mod coerce;

/// Card discriminant resolution and shape builders.
pub mod assembler;

/// Character encoding detection for byte input.
pub mod encoding;

// Public API - re-exports
pub use assembler::parse_document;
pub use card::{
    AmplifyCard, AppCard, AppStoreData, AudioCard, Card, CardType, PlayerCard, SummaryCard,
    UndocumentedCard, ValueOrId,
};
pub use error::{Error, Result};
pub use flatten::{TagTree, TagValue};
pub use options::{Options, LIVE_VIDEO_CARD, PERISCOPE_BROADCAST_CARD};

/// Parses the Twitter card of an HTML document using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `origin` - The page URL, copied verbatim into summary cards
///
/// # Returns
///
/// `Ok(Some(card))` when the page declares a card, `Ok(None)` when it does
/// not, and an `Error` when the declared card is unsupported or malformed.
///
/// # Example
///
/// ```rust
/// use twitter_cards::parse;
///
/// let card = parse("<html><body><p>No cards here</p></body></html>", "https://example.com/")?;
/// assert!(card.is_none());
/// # Ok::<(), twitter_cards::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse(html: &str, origin: &str) -> Result<Option<Card>> {
    parse_with_options(html, origin, &Options::default())
}

/// Parses the Twitter card of an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use twitter_cards::{parse_with_options, Options};
///
/// let html = r#"<meta property="og:type" content="article">"#;
/// let options = Options {
///     article_fallback: false,
///     ..Options::default()
/// };
/// assert!(parse_with_options(html, "", &options)?.is_none());
/// # Ok::<(), twitter_cards::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse_with_options(html: &str, origin: &str, options: &Options) -> Result<Option<Card>> {
    parse_document(&dom_query::Document::from(html), origin, options)
}

/// Parses the Twitter card of an HTML document given as raw bytes.
///
/// The charset is detected from a byte-order mark or the document's meta
/// declarations, defaulting to UTF-8. Invalid characters are replaced with
/// U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use twitter_cards::{parse_bytes, Card};
///
/// let html = b"<meta charset=\"ISO-8859-1\">\
///     <meta name=\"twitter:card\" content=\"summary\">\
///     <meta name=\"twitter:title\" content=\"Caf\xE9\">\
///     <meta name=\"twitter:description\" content=\"Menu\">";
///
/// match parse_bytes(html, "https://example.com/")? {
///     Some(Card::Summary(card)) => assert_eq!(card.title, "Café"),
///     other => panic!("unexpected {other:?}"),
/// }
/// # Ok::<(), twitter_cards::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse_bytes(html: &[u8], origin: &str) -> Result<Option<Card>> {
    parse_bytes_with_options(html, origin, &Options::default())
}

/// Parses raw bytes with custom options.
#[allow(clippy::missing_errors_doc)]
pub fn parse_bytes_with_options(html: &[u8], origin: &str, options: &Options) -> Result<Option<Card>> {
    let html = encoding::decode_html(html);
    parse_with_options(&html, origin, options)
}
