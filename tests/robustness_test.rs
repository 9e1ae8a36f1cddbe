use twitter_cards::{parse, parse_bytes, Card, Error};

const SUMMARY: &str = r#"
    <meta name="twitter:card" content="summary">
    <meta name="twitter:title" content="Title">
    <meta name="twitter:description" content="Description">
"#;

#[test]
fn empty_input_has_no_card() {
    assert!(matches!(parse("", ""), Ok(None)));
    assert!(matches!(parse("   \n\t  ", ""), Ok(None)));
    assert!(matches!(parse_bytes(b"", ""), Ok(None)));
}

#[test]
fn malformed_html_does_not_panic() {
    let inputs = [
        "<p>text<div>more",
        "<meta name=\"twitter:card\" content=\"summary",
        "<meta name=twitter:card content=>",
        "<div class=\"test id=broken><meta name=\"twitter:title\">",
        "&amp text &lt;",
        "<html><body><meta></body>",
    ];

    for html in inputs {
        assert!(
            matches!(parse(html, ""), Ok(_) | Err(Error::MalformedCard { .. } | Error::UnsupportedCardType(_))),
            "unexpected result for {html:?}"
        );
    }
}

#[test]
fn unclosed_markup_still_yields_card() {
    let html = format!("<html><head>{SUMMARY}<body><div><p>unclosed");
    assert!(matches!(parse(&html, ""), Ok(Some(Card::Summary(_)))));
}

#[test]
fn parsing_is_idempotent() {
    let first = parse(SUMMARY, "https://ex.com/").ok().flatten();
    let second = parse(SUMMARY, "https://ex.com/").ok().flatten();

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn cards_with_unreadable_numbers_are_idempotent() {
    let amplify = r#"<meta name="twitter:card" content="amplify">"#;
    let player = r#"
        <meta name="twitter:card" content="player">
        <meta name="twitter:title" content="Clip">
        <meta name="twitter:description" content="A clip">
        <meta name="twitter:player" content="https://ex.com/embed">
        <meta name="twitter:player:width" content="wide">
        <meta name="twitter:player:height" content="270">
        <meta name="twitter:image" content="https://ex.com/1.jpg">
    "#;

    for html in [amplify, player] {
        let first = parse(html, "").ok().flatten();
        let second = parse(html, "").ok().flatten();

        assert!(first.is_some(), "expected a card for {html:?}");
        assert_eq!(first, second);
    }
}

#[test]
fn first_duplicate_wins() {
    let html = format!(
        r#"{SUMMARY}
        <meta name="twitter:title" content="Second">
        <meta property="twitter:card" content="player">"#
    );

    match parse(&html, "") {
        Ok(Some(Card::Summary(card))) => assert_eq!(card.title, "Title"),
        other => panic!("expected summary card, got {other:?}"),
    }
}

#[test]
fn value_attribute_used_when_content_missing() {
    let html = r#"
        <meta name="twitter:card" value="summary">
        <meta name="twitter:title" value="From value">
        <meta name="twitter:description" content="" value="Also from value">
    "#;

    match parse(html, "") {
        Ok(Some(Card::Summary(card))) => {
            assert_eq!(card.title, "From value");
            assert_eq!(card.description.as_deref(), Some("Also from value"));
        }
        other => panic!("expected summary card, got {other:?}"),
    }
}

#[test]
fn utf8_bytes_are_decoded() {
    let html = "<meta charset=\"utf-8\">\
        <meta name=\"twitter:card\" content=\"summary\">\
        <meta name=\"twitter:title\" content=\"Café 中文\">\
        <meta name=\"twitter:description\" content=\"ñ\">";

    match parse_bytes(html.as_bytes(), "") {
        Ok(Some(Card::Summary(card))) => assert_eq!(card.title, "Café 中文"),
        other => panic!("expected summary card, got {other:?}"),
    }
}

#[test]
fn windows1252_bytes_are_decoded() {
    let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">\
        <meta name=\"twitter:card\" content=\"summary\">\
        <meta name=\"twitter:title\" content=\"\x93Quoted\x94\">\
        <meta name=\"twitter:description\" content=\"M\xFCnchen\">";

    match parse_bytes(html, "") {
        Ok(Some(Card::Summary(card))) => {
            assert_eq!(card.title, "\u{201C}Quoted\u{201D}");
            assert_eq!(card.description.as_deref(), Some("München"));
        }
        other => panic!("expected summary card, got {other:?}"),
    }
}

#[test]
fn unusable_declared_charsets_keep_the_card() {
    for charset in ["utf-16", "utf-16be", "iso-2022-kr", "replacement"] {
        let html = format!(
            "<meta charset=\"{charset}\">\
            <meta name=\"twitter:card\" content=\"summary\">\
            <meta name=\"twitter:title\" content=\"Title\">\
            <meta name=\"twitter:description\" content=\"Description\">"
        );

        match parse_bytes(html.as_bytes(), "") {
            Ok(Some(Card::Summary(card))) => assert_eq!(card.title, "Title"),
            other => panic!("expected summary card for {charset}, got {other:?}"),
        }
    }
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let html = b"<meta name=\"twitter:card\" content=\"summary\">\
        <meta name=\"twitter:title\" content=\"bad \xFF byte\">\
        <meta name=\"twitter:description\" content=\"d\">";

    match parse_bytes(html, "") {
        Ok(Some(Card::Summary(card))) => assert!(card.title.contains('\u{FFFD}')),
        other => panic!("expected summary card, got {other:?}"),
    }
}
