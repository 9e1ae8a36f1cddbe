//! Summary card builders, including the legacy gallery mapping.

use crate::card::{CardType, SummaryCard};
use crate::coerce::truncate_chars;
use crate::error::Result;
use crate::resolver::{resolve_field, resolve_required, resolve_scalar, LookupOptions};
use crate::tags::TagSet;
use crate::Options;

/// Build a `summary` or `summary_large_image` card.
///
/// `site` is not required even though Twitter documents it as such; its
/// validator accepts cards without it.
///
/// # Errors
///
/// Fails when neither `twitter:title`/`og:title` nor
/// `twitter:description`/`og:description` is present.
pub fn build_summary(tags: &TagSet, card: CardType, origin: &str, options: &Options) -> Result<SummaryCard> {
    let site = resolve_field(tags, "site", LookupOptions::optional().with_id())?;
    let title = resolve_required(tags, "title", LookupOptions::optional().with_open_graph("title"))?;
    let description = resolve_required(tags, "description", LookupOptions::optional().with_open_graph("description"))?;

    let image = resolve_scalar(tags, "image", LookupOptions::optional().with_open_graph("image"))?;
    let image_alt = match image {
        Some(_) => resolve_scalar(tags, "image:alt", LookupOptions::optional())?,
        None => None,
    };

    Ok(SummaryCard {
        card,
        origin: origin.to_string(),
        site,
        title,
        description: Some(truncate_chars(&description, options.description_limit)),
        image,
        image_alt,
    })
}

/// Build the deprecated `gallery` card as `summary_large_image`.
///
/// Unlike summary cards the description is optional and kept whole, and
/// the image comes from `twitter:image0`.
///
/// # Errors
///
/// Fails when the title or the first gallery image is missing.
pub fn build_gallery(tags: &TagSet, origin: &str) -> Result<SummaryCard> {
    let title = resolve_required(tags, "title", LookupOptions::optional().with_open_graph("title"))?;
    let description = resolve_scalar(tags, "description", LookupOptions::optional().with_open_graph("description"))?;
    let image = resolve_required(tags, "image0", LookupOptions::optional().with_open_graph("image"))?;

    Ok(SummaryCard {
        card: CardType::SummaryLargeImage,
        origin: origin.to_string(),
        site: None,
        title,
        description,
        image: Some(image),
        image_alt: None,
    })
}
