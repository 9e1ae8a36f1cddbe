//! Amplify card builder.
//!
//! Amplify cards are not documented by Twitter, so nothing is required and
//! no Open Graph fallback applies.

use crate::card::{AmplifyCard, CardType};
use crate::coerce::{parse_flag, parse_float, parse_int};
use crate::resolver::{resolve_field, resolve_scalar, LookupOptions};
use crate::tags::TagSet;

// Optional lookups cannot fail.
fn value(tags: &TagSet, field: &str) -> Option<String> {
    resolve_scalar(tags, field, LookupOptions::optional()).ok().flatten()
}

/// Build an `amplify` card. Never fails.
#[must_use]
pub fn build_amplify(tags: &TagSet) -> AmplifyCard {
    let site = resolve_field(tags, "site", LookupOptions::optional().with_id()).ok().flatten();

    AmplifyCard {
        card: CardType::Amplify,
        site,
        title: value(tags, "title"),
        description: value(tags, "description"),
        image_src: value(tags, "image:src"),
        image_width: parse_int(value(tags, "image:width").as_deref()),
        image_height: parse_int(value(tags, "image:height").as_deref()),
        amplify_vmap: value(tags, "amplify:vmap"),
        amplify_teaser_segments_stream: value(tags, "amplify:teaser_segments_stream"),
        amplify_content_id: value(tags, "amplify:content_id"),
        player_width: parse_int(value(tags, "player:width").as_deref()),
        player_height: parse_int(value(tags, "player:height").as_deref()),
        player_stream_content_type: value(tags, "player:stream:content_type"),
        amplify_embeddable: parse_flag(value(tags, "amplify:embeddable").as_deref()),
        amplify_dynamic_ads: parse_flag(value(tags, "amplify:dynamic_ads").as_deref()),
        amplify_content_duration_seconds: parse_float(value(tags, "amplify:content_duration_seconds").as_deref()),
        amplify_share_id: value(tags, "amplify:share_id"),
    }
}
