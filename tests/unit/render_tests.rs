use stepdeck::cli::commands::show::seek;
use stepdeck::cli::formatters::SlideView;
use stepdeck::cli::output::Formattable;
use stepdeck::core::{PresentationEngine, ProgressStyle};
use stepdeck::loader::{DeckFormat, parse_deck};
use stepdeck::test_utils::fixtures::SAMPLE_DECK_TOML;

fn engine_at(slide: usize, step: Option<usize>, all: bool) -> PresentationEngine {
    let deck = parse_deck(SAMPLE_DECK_TOML, DeckFormat::Toml).unwrap();
    let mut engine = PresentationEngine::new(deck);
    seek(&mut engine, slide, step, all).unwrap();
    engine
}

#[test]
fn first_slide_before_any_reveal() {
    let engine = engine_at(0, None, false);
    insta::assert_snapshot!(SlideView::new(&engine).format_plain(), @r"
    Testing the front-end: slide 1/3, step 0/2

    # Why test?

    (2 more to reveal)

    [--------------------]   0%
    ");
}

#[test]
fn metadata_labels_for_slide_without_units() {
    let engine = engine_at(1, Some(4), false);
    let view = SlideView::new(&engine)
        .with_progress_style(ProgressStyle::None)
        .with_metadata(true);
    insta::assert_snapshot!(view.format_plain(), @r"
    Testing the front-end: slide 2/3, step 0/0

    # Tools

    transition: fade
    ");
}

#[test]
fn last_slide_fully_revealed() {
    let engine = engine_at(2, None, true);
    let view = SlideView::new(&engine).with_progress_style(ProgressStyle::Number);
    insta::assert_snapshot!(view.format_plain(), @r"
    Testing the front-end: slide 3/3, step 1/1

    ```js
    it('works', () => {})
    ```

    Jest <https://jestjs.io>

    6/6
    ");
}

#[test]
fn rendering_does_not_move_the_engine() {
    let engine = engine_at(0, Some(1), false);
    let before = engine.state();
    let _ = SlideView::new(&engine).format_plain();
    let _ = SlideView::new(&engine).to_json().unwrap();
    assert_eq!(engine.state(), before);
}
