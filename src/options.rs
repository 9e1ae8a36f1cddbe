//! Configuration options for card parsing.
//!
//! The `Options` struct controls the few knobs the parser has. Defaults
//! reproduce the behaviour Twitter documents for its card validator.

/// Discriminant of the undocumented live video card.
pub const LIVE_VIDEO_CARD: &str = "745291183405076480:live_video";

/// Discriminant of the undocumented Periscope broadcast card.
pub const PERISCOPE_BROADCAST_CARD: &str = "3691233323:periscope_broadcast";

/// Configuration options for card parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use twitter_cards::Options;
///
/// let options = Options {
///     article_fallback: false,
///     ..Options::default()
/// };
/// assert_eq!(options.description_limit, 200);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of characters kept from summary and player descriptions.
    ///
    /// Default: `200`
    pub description_limit: usize,

    /// Treat a page with `og:type` equal to `article` and no `twitter:card`
    /// as a `summary` card.
    ///
    /// Default: `true`
    pub article_fallback: bool,

    /// Discriminants parsed generically by flattening the `twitter:` namespace.
    ///
    /// Default: the live video and Periscope broadcast card types.
    pub undocumented_card_types: Vec<String>,
}

impl Options {
    pub(crate) fn is_undocumented(&self, card: &str) -> bool {
        self.undocumented_card_types.iter().any(|t| t == card)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            description_limit: 200,
            article_fallback: true,
            undocumented_card_types: vec![
                LIVE_VIDEO_CARD.to_string(),
                PERISCOPE_BROADCAST_CARD.to_string(),
            ],
        }
    }
}
