//! Unit test suite entry point.

mod engine_tests;
mod loader_tests;
mod render_tests;
