use std::collections::BTreeSet;

use tracing::warn;

use super::errors::WindowError;
use super::types::WindowQueryOptions;

pub const EXCLUDE_DESKTOP: &str = "exclude_desktop";
pub const ON_SCREEN_ONLY: &str = "on_screen_only";

/// Recognized option tokens with their help text
pub const WINDOW_OPTIONS: [(&str, &str); 2] = [
    (
        EXCLUDE_DESKTOP,
        "Exclude desktop windows from the shareable content query.",
    ),
    (ON_SCREEN_ONLY, "Include only windows currently on screen."),
];

/// Token string used when the caller does not choose one
pub const DEFAULT_WINDOW_OPTIONS: &str = "exclude_desktop on_screen_only";

/// Parse whitespace-separated option tokens into query flags.
///
/// A token that is present turns its flag on; absent tokens leave it off.
/// Unknown tokens are reported together, deduplicated and sorted.
pub fn parse_window_options(tokens: &str) -> Result<WindowQueryOptions, WindowError> {
    let names: Vec<&str> = tokens.split_whitespace().collect();

    let unknown: BTreeSet<&str> = names
        .iter()
        .copied()
        .filter(|name| !WINDOW_OPTIONS.iter().any(|(known, _)| known == name))
        .collect();

    if !unknown.is_empty() {
        let options = unknown.into_iter().collect::<Vec<_>>().join(", ");
        warn!(event = "core.window.options_rejected", options = %options);
        return Err(WindowError::InvalidOptions { options });
    }

    Ok(WindowQueryOptions::new(
        names.contains(&EXCLUDE_DESKTOP),
        names.contains(&ON_SCREEN_ONLY),
    ))
}
