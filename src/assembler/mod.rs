//! Card assembly.
//!
//! Determines the card discriminant of a document and dispatches to the
//! builder for that card shape. Builders are free functions from a
//! [`TagSet`] to a card record.

pub mod amplify;
pub mod app;
pub mod player;
pub mod summary;
pub mod undocumented;

use dom_query::Document;

use crate::card::{Card, CardType};
use crate::error::{Error, Result};
use crate::resolver::{self, LookupOptions};
use crate::tags::TagSet;
use crate::Options;

pub use amplify::build_amplify;
pub use app::build_app;
pub use player::{build_audio, build_player};
pub use summary::{build_gallery, build_summary};
pub use undocumented::build_undocumented;

/// `og:type` value that implies a summary card on pages without `twitter:card`.
const ARTICLE_PAGE_TYPE: &str = "article";

/// The `twitter:card` value of the document.
///
/// Without one, an `og:type` of `article` reads as `summary` when
/// `options.article_fallback` is set.
///
/// # Errors
///
/// Never fails in practice; the discriminant lookup is optional.
pub fn card_discriminant(tags: &TagSet, options: &Options) -> Result<Option<String>> {
    if let Some(card) = resolver::resolve_scalar(tags, "card", LookupOptions::optional())? {
        return Ok(Some(card));
    }

    if options.article_fallback && tags.content("og:type") == Some(ARTICLE_PAGE_TYPE) {
        return Ok(Some(CardType::Summary.as_str().to_string()));
    }

    Ok(None)
}

/// Build the card declared by the meta tags of `doc`.
///
/// # Errors
///
/// Returns `Error::UnsupportedCardType` for unknown discriminants and
/// `Error::MalformedCard` when the declared card lacks required tags.
pub fn parse_document(doc: &Document, origin: &str, options: &Options) -> Result<Option<Card>> {
    parse_tags(&TagSet::from_document(doc), origin, options)
}

/// Build the card declared by an already collected tag set.
///
/// # Errors
///
/// Same as [`parse_document`].
pub fn parse_tags(tags: &TagSet, origin: &str, options: &Options) -> Result<Option<Card>> {
    let Some(card) = card_discriminant(tags, options)? else {
        tracing::debug!(tags = tags.len(), "no card discriminant");
        return Ok(None);
    };
    tracing::debug!(card = %card, "dispatching card");

    match dispatch(tags, &card, origin, options) {
        Ok(Some(built)) => Ok(Some(built)),
        Ok(None) => Err(Error::UnsupportedCardType(card)),
        Err(source) => Err(Error::MalformedCard { card, source: Box::new(source) }),
    }
}

/// `Ok(None)` means no builder handles `card`.
fn dispatch(tags: &TagSet, card: &str, origin: &str, options: &Options) -> Result<Option<Card>> {
    let built = match card {
        "summary" => Card::Summary(build_summary(tags, CardType::Summary, origin, options)?),
        "summary_large_image" => Card::Summary(build_summary(tags, CardType::SummaryLargeImage, origin, options)?),
        // still used by flickr
        "photo" => {
            deprecated(card);
            Card::Summary(build_summary(tags, CardType::SummaryLargeImage, origin, options)?)
        }
        "gallery" => {
            deprecated(card);
            Card::Summary(build_gallery(tags, origin)?)
        }
        "app" => Card::App(build_app(tags)?),
        "player" => Card::Player(build_player(tags, options)?),
        "audio" => Card::Audio(build_audio(tags, options)?),
        "product" => {
            deprecated(card);
            Card::Summary(build_summary(tags, CardType::Summary, origin, options)?)
        }
        "amplify" => Card::Amplify(build_amplify(tags)),
        other if options.is_undocumented(other) => Card::Undocumented(build_undocumented(tags, other)),
        _ => return Ok(None),
    };

    Ok(Some(built))
}

fn deprecated(card: &str) {
    tracing::warn!(card, "deprecated card type detected");
}
