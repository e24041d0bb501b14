use stepdeck::DeckError;
use stepdeck::core::{Fragment, ProgressStyle};
use stepdeck::loader::{DeckFormat, load_deck, parse_deck};
use stepdeck::test_utils::fixtures::DeckFixture;

const MEDIA_DECK: &str = r#"
title: Media
progress: none
slides:
  - content:
      - kind: heading
        text: Screenshots
        level: 2
    reveal:
      - kind: image
        src: before.png
        alt: Before
      - kind: video
        src: demo.mp4
      - kind: link
        href: https://example.org
"#;

#[test]
fn yaml_deck_with_every_media_kind() {
    let deck = parse_deck(MEDIA_DECK, DeckFormat::Yaml).unwrap();
    assert_eq!(deck.meta().progress, ProgressStyle::None);

    let kinds: Vec<&str> = deck.slides()[0]
        .reveal_units()
        .iter()
        .map(|unit| unit.content().kind())
        .collect();
    assert_eq!(kinds, ["image", "video", "link"]);
    assert_eq!(
        deck.slides()[0].content()[0],
        Fragment::Heading {
            text: "Screenshots".to_string(),
            level: 2
        }
    );
}

#[test]
fn empty_media_source_is_invalid() {
    let raw = r#"{"slides": [{"reveal": [{"kind": "video", "src": " "}]}]}"#;
    let err = parse_deck(raw, DeckFormat::Json).unwrap_err();
    assert!(matches!(err, DeckError::InvalidDeck(ref msg) if msg.contains("slide 1")));
}

#[test]
fn unknown_top_level_field_is_rejected() {
    let raw = "theme = \"dark\"\n[[slides]]\ncontent = []\n";
    assert!(matches!(
        parse_deck(raw, DeckFormat::Toml),
        Err(DeckError::Parse(_))
    ));
}

#[test]
fn load_from_disk_by_extension() {
    let fixture = DeckFixture::new();
    let path = fixture.write("media.yml", MEDIA_DECK);
    let deck = load_deck(&path).unwrap();
    assert_eq!(deck.total_states(), 4);

    let unsupported = fixture.write("deck.md", "# not a deck");
    assert!(matches!(
        load_deck(&unsupported),
        Err(DeckError::UnsupportedFormat(_))
    ));
}
