//! Player and audio card builders.

use crate::card::{AudioCard, CardType, PlayerCard};
use crate::coerce::{parse_int, truncate_chars};
use crate::error::Result;
use crate::resolver::{resolve_field, resolve_required, resolve_scalar, LookupOptions};
use crate::tags::TagSet;
use crate::Options;

/// Build a `player` card.
///
/// Width and height are required tags but lenient numbers: text without
/// leading digits gives `NaN` rather than an error.
///
/// # Errors
///
/// Fails when the title, description, player URL, dimensions or image is missing.
pub fn build_player(tags: &TagSet, options: &Options) -> Result<PlayerCard> {
    let title = resolve_required(tags, "title", LookupOptions::optional().with_open_graph("title"))?;
    let site = resolve_field(tags, "site", LookupOptions::optional().with_id())?;
    let description = resolve_required(tags, "description", LookupOptions::optional().with_open_graph("description"))?;
    let player = resolve_required(tags, "player", LookupOptions::optional())?;
    let width = resolve_required(tags, "player:width", LookupOptions::optional())?;
    let height = resolve_required(tags, "player:height", LookupOptions::optional())?;
    let image = resolve_required(tags, "image", LookupOptions::optional().with_open_graph("image"))?;

    let image_alt = if image.is_empty() {
        None
    } else {
        resolve_scalar(tags, "image:alt", LookupOptions::optional())?
    };

    let player_stream = resolve_scalar(tags, "player:stream", LookupOptions::optional())?;
    let player_stream_content_type = match player_stream.as_deref() {
        Some(stream) if !stream.is_empty() => {
            resolve_scalar(tags, "player:stream:content_type", LookupOptions::optional())?
        }
        _ => None,
    };

    Ok(PlayerCard {
        card: CardType::Player,
        title,
        site,
        description: truncate_chars(&description, options.description_limit),
        player,
        player_width: parse_int(Some(width.as_str())),
        player_height: parse_int(Some(height.as_str())),
        image,
        image_alt,
        player_stream,
        player_stream_content_type,
    })
}

/// Build an `audio` card: a player card plus the audio partner tags.
///
/// # Errors
///
/// Fails like [`build_player`], or when any `twitter:audio:*` tag is missing.
pub fn build_audio(tags: &TagSet, options: &Options) -> Result<AudioCard> {
    let mut player = build_player(tags, options)?;
    player.card = CardType::Audio;

    Ok(AudioCard {
        player,
        audio_partner: resolve_required(tags, "audio:partner", LookupOptions::optional())?,
        audio_artist_name: resolve_required(tags, "audio:artist_name", LookupOptions::optional())?,
        audio_source: resolve_required(tags, "audio:source", LookupOptions::optional())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const PLAYER_TAGS: &str = r#"
        <meta name="twitter:title" content="Clip">
        <meta name="twitter:description" content="A clip">
        <meta name="twitter:player" content="https://example.com/embed/1">
        <meta name="twitter:player:width" content="480">
        <meta name="twitter:player:height" content="270">
        <meta name="twitter:image" content="https://example.com/1.jpg">
    "#;

    #[test]
    fn player_reads_required_tags() {
        let tags = TagSet::from_html(PLAYER_TAGS);
        let card = match build_player(&tags, &Options::default()) {
            Ok(card) => card,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };

        assert_eq!(card.card, CardType::Player);
        assert_eq!(card.player, "https://example.com/embed/1");
        assert!((card.player_width - 480.0).abs() < f64::EPSILON);
        assert!((card.player_height - 270.0).abs() < f64::EPSILON);
        assert_eq!(card.player_stream, None);
        assert_eq!(card.player_stream_content_type, None);
    }

    #[test]
    fn stream_content_type_needs_stream() {
        let html = format!(
            r#"{PLAYER_TAGS}
            <meta name="twitter:player:stream:content_type" content="video/mp4">"#
        );
        let card = build_player(&TagSet::from_html(&html), &Options::default()).ok();
        assert_eq!(card.and_then(|c| c.player_stream_content_type), None);

        let html = format!(
            r#"{PLAYER_TAGS}
            <meta name="twitter:player:stream" content="https://example.com/1.mp4">
            <meta name="twitter:player:stream:content_type" content="video/mp4">"#
        );
        let card = build_player(&TagSet::from_html(&html), &Options::default()).ok();
        assert_eq!(card.and_then(|c| c.player_stream_content_type).as_deref(), Some("video/mp4"));
    }

    #[test]
    fn empty_image_skips_alt() {
        let tags = TagSet::from_html(r#"
            <meta name="twitter:title" content="Clip">
            <meta name="twitter:description" content="A clip">
            <meta name="twitter:player" content="https://example.com/embed/1">
            <meta name="twitter:player:width" content="480">
            <meta name="twitter:player:height" content="270">
            <meta name="twitter:image" content="">
            <meta name="twitter:image:alt" content="Alt">
        "#);

        let card = build_player(&tags, &Options::default()).ok();
        assert_eq!(card.as_ref().map(|c| c.image.as_str()), Some(""));
        assert_eq!(card.and_then(|c| c.image_alt), None);
    }

    #[test]
    fn missing_dimension_fails() {
        let tags = TagSet::from_html(r#"
            <meta name="twitter:title" content="Clip">
            <meta name="twitter:description" content="A clip">
            <meta name="twitter:player" content="https://example.com/embed/1">
            <meta name="twitter:player:width" content="480">
        "#);

        match build_player(&tags, &Options::default()) {
            Err(Error::MissingRequiredField(msg)) => assert!(msg.contains("twitter:player:height")),
            other => panic!("expected MissingRequiredField, got {other:?}"),
        }
    }

    #[test]
    fn audio_overrides_card_type() {
        let html = format!(
            r#"{PLAYER_TAGS}
            <meta name="twitter:audio:partner" content="Partner">
            <meta name="twitter:audio:artist_name" content="Artist">
            <meta name="twitter:audio:source" content="https://example.com/a.mp3">"#
        );

        let card = build_audio(&TagSet::from_html(&html), &Options::default()).ok();
        assert_eq!(card.as_ref().map(|c| c.player.card), Some(CardType::Audio));
        assert_eq!(card.map(|c| c.audio_artist_name).as_deref(), Some("Artist"));
    }
}
