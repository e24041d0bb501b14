use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::{Deck, Fragment, Slide};

/// Three slides with 2, 0 and 1 reveal units.
pub const SAMPLE_DECK_TOML: &str = r#"title = "Testing the front-end"
transition = ["zoom", "slide"]

[[slides]]
background = "primary"
content = [{ kind = "heading", text = "Why test?" }]
reveal = [
  { kind = "text", text = "In working application" },
  { kind = "text", text = "When doing refactoring" },
]

[[slides]]
transition = "fade"
content = [{ kind = "heading", text = "Tools" }]

[[slides]]
content = [{ kind = "code", lang = "js", source = "it('works', () => {})" }]
reveal = [{ kind = "link", href = "https://jestjs.io", text = "Jest" }]
"#;

/// A deck whose slide `i` has `counts[i]` reveal units.
///
/// Each slide carries one heading `Slide {i+1}` and text units
/// `point {i}.{j}`.
///
/// # Panics
///
/// Panics when `counts` is empty.
#[must_use]
pub fn deck_with_counts(counts: &[usize]) -> Deck {
    let slides = counts
        .iter()
        .enumerate()
        .map(|(i, &units)| {
            Slide::new(
                vec![Fragment::heading(format!("Slide {}", i + 1))],
                (0..units)
                    .map(|j| Fragment::text(format!("point {i}.{j}")))
                    .collect(),
            )
        })
        .collect();
    Deck::new(slides).expect("deck_with_counts needs at least one slide")
}

/// Temporary directory holding deck and config files.
pub struct DeckFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl DeckFixture {
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        println!("[FIXTURE] Created temp directory: {}", root.display());
        Self { temp_dir, root }
    }

    /// Write a file relative to the fixture root.
    ///
    /// # Panics
    ///
    /// Panics on any filesystem error.
    pub fn write(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Wrote {} ({} bytes)",
            full_path.display(),
            content.len()
        );
        full_path
    }

    /// Write [`SAMPLE_DECK_TOML`] as `talk.toml`.
    pub fn sample_deck(&self) -> PathBuf {
        self.write("talk.toml", SAMPLE_DECK_TOML)
    }
}

impl Default for DeckFixture {
    fn default() -> Self {
        Self::new()
    }
}
