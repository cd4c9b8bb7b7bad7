//! Output filenames derived from the app name, window title and time.

use std::sync::LazyLock;

use chrono::{Local, NaiveDateTime};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Extension appended to every generated name
pub const FILE_EXT: &str = ".png";

/// Token used for a component that sanitizes to nothing
pub const UNTITLED: &str = "untitled";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 .\-]").expect("Invalid unsafe-chars pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace pattern"));

/// Reduce one name component to an ASCII-safe token.
///
/// Diacritics are stripped, anything outside `[A-Za-z0-9 .-]` becomes a
/// space, whitespace runs collapse, and the remaining spaces become
/// underscores.
pub fn sanitize_component(value: &str) -> String {
    let stripped: String = value.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let replaced = UNSAFE_CHARS.replace_all(&stripped, " ");
    let collapsed = WHITESPACE.replace_all(&replaced, " ");
    let token = collapsed.trim().replace(' ', "_");

    if token.is_empty() {
        UNTITLED.to_string()
    } else {
        token
    }
}

/// The component that starts the filename must not begin with a dot or a
/// dash, or the file would be hidden or read as a flag by `screencapture`.
fn strip_leading_marks(token: &str) -> String {
    let trimmed = token.trim_start_matches(['.', '-', '_']);
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Build a filename for `app_name` / `title` stamped with the local time.
pub fn build_filename(app_name: &str, title: &str) -> String {
    build_filename_at(app_name, title, Local::now().naive_local())
}

/// Build a filename stamped with `at` (second precision).
pub fn build_filename_at(app_name: &str, title: &str, at: NaiveDateTime) -> String {
    let mut parts: Vec<String> = [app_name, title]
        .into_iter()
        .filter(|component| !component.is_empty())
        .map(sanitize_component)
        .collect();
    if let Some(first) = parts.first_mut() {
        *first = strip_leading_marks(first);
    }
    parts.push(at.format(TIMESTAMP_FORMAT).to_string());

    format!("{}{}", parts.join("_"), FILE_EXT)
}
