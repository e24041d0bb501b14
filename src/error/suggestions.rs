//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints
//! built from the error's JSON context.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
///
/// Falls back to the static [`ErrorCode::suggestion`] when the context does
/// not carry the fields a tailored hint needs.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::OutOfRange => suggest_out_of_range(context),
        ErrorCode::DeckNotFound => suggest_deck_not_found(context),
        ErrorCode::ConfigMissingRequired => suggest_config_missing_required(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_out_of_range(context: Option<&Value>) -> String {
    let len = context.and_then(|c| c.get("len")).and_then(Value::as_u64);
    let index = context.and_then(|c| c.get("index")).and_then(Value::as_u64);

    match (index, len) {
        (Some(index), Some(len)) => format!(
            "Slide {} does not exist; this deck has {} slide{} (valid: 1-{})",
            index + 1,
            len,
            if len == 1 { "" } else { "s" },
            len
        ),
        _ => ErrorCode::OutOfRange.suggestion().to_string(),
    }
}

fn suggest_deck_not_found(context: Option<&Value>) -> String {
    let Some(name) = context.and_then(|c| c.get("deck")).and_then(Value::as_str) else {
        return ErrorCode::DeckNotFound.suggestion().to_string();
    };
    format!(
        "No deck named '{name}'. Try:\n  - passing the full path to the deck file\n  - adding its directory to `decks.search_paths` in stepdeck.toml\n  - setting STEPDECK_DECK_PATHS"
    )
}

fn suggest_config_missing_required(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("config_key")).and_then(Value::as_str) {
        Some(key) => format!("Set `{key}` in stepdeck.toml or the matching STEPDECK_* variable"),
        None => ErrorCode::ConfigMissingRequired.suggestion().to_string(),
    }
}
