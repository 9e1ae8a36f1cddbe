//! App card builder.

use crate::card::{AppCard, AppStoreData, CardType};
use crate::error::Result;
use crate::resolver::{resolve_field, resolve_key_set, resolve_scalar, LookupOptions};
use crate::tags::TagSet;

/// Build an `app` card.
///
/// # Errors
///
/// Fails when none of `twitter:app:id:{iphone,ipad,googleplay}` is present.
pub fn build_app(tags: &TagSet) -> Result<AppCard> {
    let site = resolve_field(tags, "site", LookupOptions::optional().with_id())?;
    let description = resolve_scalar(tags, "description", LookupOptions::optional().with_open_graph("description"))?;
    let country = resolve_scalar(tags, "app:country", LookupOptions::optional())?;

    let app_id = resolve_key_set(tags, &AppStoreData::PLATFORMS, "app:id", true)?
        .map(AppStoreData::from_resolved)
        .unwrap_or_default();
    let app_url = resolve_key_set(tags, &AppStoreData::PLATFORMS, "app:url", false)?
        .map(AppStoreData::from_resolved);

    Ok(AppCard { card: CardType::App, site, description, country, app_id, app_url })
}
