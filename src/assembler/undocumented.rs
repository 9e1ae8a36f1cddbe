//! Undocumented card builder (live video, Periscope broadcast).

use crate::card::UndocumentedCard;
use crate::flatten::flatten_namespace;
use crate::tags::TagSet;

/// Build a schemaless card from every `twitter:` tag of the page.
///
/// The `card` and `undocumented` entries of the flattened tree are
/// replaced by the record's own fields.
#[must_use]
pub fn build_undocumented(tags: &TagSet, card: &str) -> UndocumentedCard {
    let mut fields = flatten_namespace(tags, "twitter:");
    fields.remove("card");
    fields.remove("undocumented");

    UndocumentedCard { card: card.to_string(), undocumented: true, fields }
}
