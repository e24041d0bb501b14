//! Property tests for the presentation engine over random decks.

use proptest::prelude::*;

use stepdeck::core::{Command, PresentationEngine};
use stepdeck::loader::{DeckFormat, parse_deck};
use stepdeck::test_utils::fixtures::deck_with_counts;

fn arb_counts() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..5, 1..8)
}

fn arb_command(max_index: usize) -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => Just(Command::Advance),
        3 => Just(Command::Retreat),
        1 => (0..max_index).prop_map(Command::JumpToSlide),
    ]
}

fn arb_script() -> impl Strategy<Value = (Vec<usize>, Vec<Command>)> {
    arb_counts().prop_flat_map(|counts| {
        // allow jumps past the end to exercise OutOfRange
        let max = counts.len() + 3;
        (Just(counts), prop::collection::vec(arb_command(max), 0..40))
    })
}

fn assert_invariant(engine: &PresentationEngine, counts: &[usize]) {
    let state = engine.state();
    assert!(state.slide_index < counts.len());
    assert!(state.reveal_step <= counts[state.slide_index]);
}

proptest! {
    #[test]
    fn invariant_holds_after_every_command((counts, commands) in arb_script()) {
        let mut engine = PresentationEngine::new(deck_with_counts(&counts));
        prop_assert_eq!((engine.slide_index(), engine.reveal_step()), (0, 0));
        for command in commands {
            let before = engine.state();
            let result = engine.apply(command);
            if result.is_err() {
                prop_assert_eq!(engine.state(), before);
            }
            assert_invariant(&engine, &counts);
        }
    }

    #[test]
    fn advance_then_retreat_round_trips((counts, commands) in arb_script()) {
        let mut engine = PresentationEngine::new(deck_with_counts(&counts));
        for command in commands {
            let _ = engine.apply(command);
        }
        if !engine.is_at_last_state() {
            let before = engine.state();
            engine.advance();
            engine.retreat();
            prop_assert_eq!(engine.state(), before);
        }
    }

    #[test]
    fn retreat_then_advance_round_trips_inside_a_slide((counts, commands) in arb_script()) {
        let mut engine = PresentationEngine::new(deck_with_counts(&counts));
        for command in commands {
            let _ = engine.apply(command);
        }
        if engine.reveal_step() > 0 {
            let before = engine.state();
            engine.retreat();
            engine.advance();
            prop_assert_eq!(engine.state(), before);
        }
    }

    #[test]
    fn ends_are_idempotent(counts in arb_counts()) {
        let mut engine = PresentationEngine::new(deck_with_counts(&counts));
        engine.retreat();
        prop_assert!(engine.is_at_first_state());

        for _ in 0..engine.total_states() + 2 {
            engine.advance();
        }
        let last = engine.state();
        prop_assert!(engine.is_at_last_state());
        engine.advance();
        prop_assert_eq!(engine.state(), last);
    }

    #[test]
    fn advancing_walks_every_state_once(counts in arb_counts()) {
        let mut engine = PresentationEngine::new(deck_with_counts(&counts));
        let total = engine.total_states();
        prop_assert_eq!(total, counts.len() + counts.iter().sum::<usize>());

        let mut progress = engine.progress();
        for expected in 1..total {
            prop_assert!(!engine.is_at_last_state());
            engine.advance();
            prop_assert_eq!(engine.state_ordinal(), expected);
            prop_assert!(engine.progress() >= progress);
            progress = engine.progress();
        }
        prop_assert!(engine.is_at_last_state());
        prop_assert!((engine.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn jump_lands_on_hidden_slide(counts in arb_counts(), pick in any::<prop::sample::Index>()) {
        let mut engine = PresentationEngine::new(deck_with_counts(&counts));
        let index = pick.index(counts.len());
        engine.jump_to_slide(index).unwrap();
        prop_assert_eq!((engine.slide_index(), engine.reveal_step()), (index, 0));

        let visible = engine.current_visible_content();
        prop_assert_eq!(visible.revealed.len(), 0);
        prop_assert_eq!(visible.hidden, counts[index]);
    }

    #[test]
    fn visible_prefix_matches_step((counts, commands) in arb_script()) {
        let mut engine = PresentationEngine::new(deck_with_counts(&counts));
        for command in commands {
            let _ = engine.apply(command);
        }
        let visible = engine.current_visible_content();
        prop_assert_eq!(visible.revealed.len(), engine.reveal_step());
        for (i, unit) in visible.revealed.iter().enumerate() {
            prop_assert_eq!(unit.ordinal(), i);
        }
    }

    #[test]
    fn deck_formats_agree(counts in arb_counts()) {
        let toml: String = counts
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let reveal: Vec<String> = (0..n)
                    .map(|j| format!("{{ kind = \"text\", text = \"point {i}.{j}\" }}"))
                    .collect();
                format!(
                    "[[slides]]\ncontent = [{{ kind = \"heading\", text = \"Slide {}\" }}]\nreveal = [{}]\n",
                    i + 1,
                    reveal.join(", ")
                )
            })
            .collect();

        let slides: Vec<serde_json::Value> = counts
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                serde_json::json!({
                    "content": [{ "kind": "heading", "text": format!("Slide {}", i + 1) }],
                    "reveal": (0..n)
                        .map(|j| serde_json::json!({ "kind": "text", "text": format!("point {i}.{j}") }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        let json = serde_json::json!({ "slides": slides }).to_string();

        let from_toml = parse_deck(&toml, DeckFormat::Toml).unwrap();
        let from_json = parse_deck(&json, DeckFormat::Json).unwrap();
        // JSON is valid YAML
        let from_yaml = parse_deck(&json, DeckFormat::Yaml).unwrap();

        let expected = deck_with_counts(&counts);
        prop_assert_eq!(&from_toml, &expected);
        prop_assert_eq!(&from_json, &expected);
        prop_assert_eq!(&from_yaml, &expected);
    }
}
