use stepdeck::core::{Command, PresentationEngine};
use stepdeck::test_utils::fixtures::deck_with_counts;
use stepdeck::test_utils::{TestCase, run_table_tests};

type Script = (&'static [usize], Vec<Command>);

fn script(counts: &'static [usize], commands: Vec<Command>) -> Script {
    (counts, commands)
}

fn play((counts, commands): &Script) -> (usize, usize) {
    let mut engine = PresentationEngine::new(deck_with_counts(counts));
    for &command in commands {
        // rejected jumps leave the state alone
        let _ = engine.apply(command);
    }
    (engine.slide_index(), engine.reveal_step())
}

#[test]
fn navigation_scripts() {
    use Command::{Advance, JumpToSlide, Retreat};

    let cases: Vec<TestCase<Script, (usize, usize)>> = vec![
        TestCase::new("fresh engine", script(&[2, 0, 1], vec![]), (0, 0)),
        TestCase::new("first reveal", script(&[2, 0, 1], vec![Advance]), (0, 1)),
        TestCase::new(
            "slide with no units is a single state",
            script(&[2, 0, 1], vec![Advance; 4]),
            (2, 0),
        ),
        TestCase::new("advance saturates", script(&[2, 0, 1], vec![Advance; 12]), (2, 1)),
        TestCase::new(
            "retreat lands fully revealed",
            script(&[2, 0, 1], vec![JumpToSlide(1), Retreat]),
            (0, 2),
        ),
        TestCase::new(
            "retreat walks back one unit",
            script(&[2, 0, 1], vec![Advance, Advance, Retreat]),
            (0, 1),
        ),
        TestCase::new("retreat saturates", script(&[2, 0, 1], vec![Retreat, Retreat]), (0, 0)),
        TestCase::new(
            "jump discards reveal progress",
            script(&[2, 0, 1], vec![JumpToSlide(2), Advance, JumpToSlide(2)]),
            (2, 0),
        ),
        TestCase::new(
            "out of range jump is ignored",
            script(&[2, 0, 1], vec![Advance, JumpToSlide(5)]),
            (0, 1),
        ),
        TestCase::new("single state deck", script(&[0], vec![Advance, Retreat, Advance]), (0, 0)),
    ];

    run_table_tests(cases, play);
}

#[test]
fn reference_scenario_step_by_step() {
    let mut engine = PresentationEngine::new(deck_with_counts(&[2, 0, 1]));
    let mut seen = vec![(engine.slide_index(), engine.reveal_step())];
    for _ in 0..6 {
        engine.advance();
        seen.push((engine.slide_index(), engine.reveal_step()));
    }
    assert_eq!(
        seen,
        [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0), (2, 1), (2, 1)]
    );

    let mut back = Vec::new();
    for _ in 0..3 {
        engine.retreat();
        back.push((engine.slide_index(), engine.reveal_step()));
    }
    assert_eq!(back, [(2, 0), (1, 0), (0, 2)]);
}

#[test]
fn reset_after_walking() {
    let mut engine = PresentationEngine::new(deck_with_counts(&[1, 3]));
    engine.jump_to_slide(1).unwrap();
    engine.advance();
    assert_eq!(engine.state_ordinal(), 3);

    engine.reset();
    assert!(engine.is_at_first_state());
    assert_eq!(engine.state_ordinal(), 0);
}
