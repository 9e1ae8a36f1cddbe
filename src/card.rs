//! Card record types.
//!
//! Every card serializes with camelCase field names and a `card` field
//! carrying its discriminant, so `serde_json::to_value(&card)` matches the
//! record shapes consumers of Twitter card data expect.

use serde::Serialize;

use crate::flatten::TagTree;

/// A field given either literally or by opaque identifier
/// (`twitter:site` vs `twitter:site:id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueOrId {
    Value(String),
    Id(String),
}

impl ValueOrId {
    /// The literal value, if this is not an identifier.
    #[must_use]
    pub fn into_value(self) -> Option<String> {
        match self {
            ValueOrId::Value(value) => Some(value),
            ValueOrId::Id(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ValueOrId::Value(s) | ValueOrId::Id(s) => s,
        }
    }

    #[must_use]
    pub fn is_id(&self) -> bool {
        matches!(self, ValueOrId::Id(_))
    }
}

/// Discriminant of a documented card type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Summary,
    SummaryLargeImage,
    App,
    Player,
    Audio,
    Amplify,
}

impl CardType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Summary => "summary",
            CardType::SummaryLargeImage => "summary_large_image",
            CardType::App => "app",
            CardType::Player => "player",
            CardType::Audio => "audio",
            CardType::Amplify => "amplify",
        }
    }
}

/// A parsed Twitter card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Card {
    Summary(SummaryCard),
    App(AppCard),
    Player(PlayerCard),
    Audio(AudioCard),
    Amplify(AmplifyCard),
    Undocumented(UndocumentedCard),
}

impl Card {
    /// The `card` discriminant of the record.
    ///
    /// Deprecated types report what they were parsed as, so a `photo` card
    /// is `summary_large_image`.
    #[must_use]
    pub fn card_type(&self) -> &str {
        match self {
            Card::Summary(c) => c.card.as_str(),
            Card::App(c) => c.card.as_str(),
            Card::Player(c) => c.card.as_str(),
            Card::Audio(c) => c.player.card.as_str(),
            Card::Amplify(c) => c.card.as_str(),
            Card::Undocumented(c) => &c.card,
        }
    }
}

/// `summary` and `summary_large_image` cards, also produced for the
/// deprecated `photo`, `gallery` and `product` types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub card: CardType,
    /// Origin URL supplied by the caller, copied verbatim.
    pub origin: String,
    /// The @username the card is attributed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<ValueOrId>,
    pub title: String,
    /// Always present for `summary` cards; optional for legacy `gallery` cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Description of the image for visually impaired users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

/// Store-specific values of an app card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppStoreData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iphone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub googleplay: Option<String>,
}

impl AppStoreData {
    /// Store keys, in lookup order.
    pub const PLATFORMS: [&'static str; 3] = ["iphone", "ipad", "googleplay"];

    pub(crate) fn from_resolved(mut found: std::collections::BTreeMap<&str, String>) -> Self {
        Self {
            iphone: found.remove("iphone"),
            ipad: found.remove("ipad"),
            googleplay: found.remove("googleplay"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCard {
    pub card: CardType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<ValueOrId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Two-letter App Store country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Store app ids; at least one is present.
    pub app_id: AppStoreData,
    /// Custom URL schemes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<AppStoreData>,
}

/// `player` cards, and the shared body of `audio` cards.
///
/// Dimensions are `NaN` when the tag text has no leading digits. Equality
/// compares them bitwise, so a card always equals itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    pub card: CardType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<ValueOrId>,
    pub description: String,
    /// HTTPS URL of the iframe player.
    pub player: String,
    pub player_width: f64,
    pub player_height: f64,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_stream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_stream_content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioCard {
    #[serde(flatten)]
    pub player: PlayerCard,
    pub audio_partner: String,
    pub audio_artist_name: String,
    pub audio_source: String,
}

/// Amplify video cards. Undocumented upstream, so nothing is required:
/// missing strings are `None`, missing numbers `NaN`, missing flags `false`.
/// Numbers compare bitwise, as for [`PlayerCard`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmplifyCard {
    pub card: CardType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<ValueOrId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    pub image_width: f64,
    pub image_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplify_vmap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplify_teaser_segments_stream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplify_content_id: Option<String>,
    pub player_width: f64,
    pub player_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_stream_content_type: Option<String>,
    pub amplify_embeddable: bool,
    pub amplify_dynamic_ads: bool,
    pub amplify_content_duration_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplify_share_id: Option<String>,
}

// NaN marks an unreadable number; two NaNs from the same input must compare equal.
fn same_number(a: f64, b: f64) -> bool {
    a.total_cmp(&b).is_eq()
}

impl PartialEq for PlayerCard {
    fn eq(&self, other: &Self) -> bool {
        self.card == other.card
            && self.title == other.title
            && self.site == other.site
            && self.description == other.description
            && self.player == other.player
            && same_number(self.player_width, other.player_width)
            && same_number(self.player_height, other.player_height)
            && self.image == other.image
            && self.image_alt == other.image_alt
            && self.player_stream == other.player_stream
            && self.player_stream_content_type == other.player_stream_content_type
    }
}

impl PartialEq for AmplifyCard {
    fn eq(&self, other: &Self) -> bool {
        self.card == other.card
            && self.site == other.site
            && self.title == other.title
            && self.description == other.description
            && self.image_src == other.image_src
            && same_number(self.image_width, other.image_width)
            && same_number(self.image_height, other.image_height)
            && self.amplify_vmap == other.amplify_vmap
            && self.amplify_teaser_segments_stream == other.amplify_teaser_segments_stream
            && self.amplify_content_id == other.amplify_content_id
            && same_number(self.player_width, other.player_width)
            && same_number(self.player_height, other.player_height)
            && self.player_stream_content_type == other.player_stream_content_type
            && self.amplify_embeddable == other.amplify_embeddable
            && self.amplify_dynamic_ads == other.amplify_dynamic_ads
            && same_number(self.amplify_content_duration_seconds, other.amplify_content_duration_seconds)
            && self.amplify_share_id == other.amplify_share_id
    }
}

/// A card type without a published schema, reconstructed from the
/// `twitter:` namespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UndocumentedCard {
    pub card: String,
    /// Always `true`; marks the record as schemaless.
    pub undocumented: bool,
    /// Every other `twitter:` tag of the page, nested by path segment.
    #[serde(flatten)]
    pub fields: TagTree,
}
