//! Shared test utilities for stepdeck.

pub mod fixtures;

/// One row of a table-driven test.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

impl<I, E> TestCase<I, E> {
    pub const fn new(name: &'static str, input: I, expected: E) -> Self {
        Self {
            name,
            input,
            expected,
        }
    }
}

/// Run every case, printing input, expected and actual values so a failing
/// row can be identified from the test output alone.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F)
where
    I: std::fmt::Debug,
    E: std::fmt::Debug + PartialEq,
    F: Fn(&I) -> E,
{
    let total = cases.len();
    for (n, case) in cases.into_iter().enumerate() {
        let start = std::time::Instant::now();
        println!("[TEST {}/{total}] {}", n + 1, case.name);
        println!("[TEST] Input: {:?}", case.input);

        let actual = test_fn(&case.input);

        println!("[TEST] Expected: {:?}", case.expected);
        println!("[TEST] Actual: {actual:?}");
        assert_eq!(actual, case.expected, "case '{}' failed", case.name);
        println!("[TEST] PASSED: {} ({:?})\n", case.name, start.elapsed());
    }
}
