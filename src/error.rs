//! Error types for twitter-cards.
//!
//! This module defines the error types returned by card parsing.

/// Error type for card parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required tag was not found after every configured fallback.
    ///
    /// Holds a message naming the tag (or tags) that were looked up.
    #[error("{0}")]
    MissingRequiredField(String),

    /// The `twitter:card` discriminant names a card type this crate does not handle.
    #[error("Unsupported card type '{0}'")]
    UnsupportedCardType(String),

    /// A card builder failed; `source` is the underlying error.
    #[error("Malformed card of type '{card}': {source}")]
    MalformedCard {
        /// The discriminant as written in the document.
        card: String,
        /// What went wrong while building the card.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns the innermost error, looking through `MalformedCard` wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::MalformedCard { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub(crate) fn missing_tag(tag: &str) -> Self {
        Error::MissingRequiredField(format!("The required '{tag}' tag does not exist"))
    }
}

/// Result type alias for card parsing.
pub type Result<T> = std::result::Result<T, Error>;
