use tracing::{info, warn};

use super::errors::WindowError;
use super::types::WindowDescriptor;

/// Case-insensitive app/title filter over a window snapshot
#[derive(Debug, Clone)]
pub struct WindowFilter {
    app: String,
    title: String,
}

impl WindowFilter {
    pub fn new(app: &str, title: &str) -> Self {
        Self {
            app: app.to_lowercase(),
            title: title.to_lowercase(),
        }
    }

    /// Owner must contain the app substring; a non-empty title substring
    /// must also be contained in the window title.
    pub fn matches(&self, window: &WindowDescriptor) -> bool {
        if !window.owner_name().to_lowercase().contains(&self.app) {
            return false;
        }
        self.title.is_empty() || window.title().to_lowercase().contains(&self.title)
    }
}

/// Windows matching the filters, in snapshot order
pub fn matching_windows<'a>(
    windows: &'a [WindowDescriptor],
    app: &str,
    title: &str,
) -> impl Iterator<Item = &'a WindowDescriptor> + use<'a> {
    let filter = WindowFilter::new(app, title);
    windows.iter().filter(move |w| filter.matches(w))
}

/// Identifiers of the windows matching the filters, in snapshot order.
///
/// The iterator is lazy and single-pass; resolving again means querying the
/// directory again.
pub fn find_window_ids<'a>(
    windows: &'a [WindowDescriptor],
    app: &str,
    title: &str,
) -> impl Iterator<Item = u32> + use<'a> {
    matching_windows(windows, app, title).map(WindowDescriptor::window_id)
}

/// Resolve the single window to act on: the first match in snapshot order.
pub fn resolve_window_id(
    windows: &[WindowDescriptor],
    app: &str,
    title: &str,
) -> Result<u32, WindowError> {
    info!(event = "core.window.resolve_started", app = app, title = title);

    match find_window_ids(windows, app, title).next() {
        Some(id) => {
            info!(event = "core.window.resolve_completed", window_id = id);
            Ok(id)
        }
        None => {
            warn!(event = "core.window.resolve_not_found", app = app, title = title);
            Err(WindowError::WindowNotFound {
                app: app.to_string(),
                title: title.to_string(),
            })
        }
    }
}

/// Resolve every matching window, failing when nothing matches.
pub fn resolve_window_ids(
    windows: &[WindowDescriptor],
    app: &str,
    title: &str,
) -> Result<Vec<u32>, WindowError> {
    let ids: Vec<u32> = find_window_ids(windows, app, title).collect();
    if ids.is_empty() {
        warn!(event = "core.window.resolve_not_found", app = app, title = title);
        return Err(WindowError::WindowNotFound {
            app: app.to_string(),
            title: title.to_string(),
        });
    }
    info!(event = "core.window.resolve_completed", count = ids.len());
    Ok(ids)
}

/// Distinct non-empty owner names, sorted case-insensitively
pub fn owner_names(windows: &[WindowDescriptor]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for window in windows {
        let name = window.owner_name();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names.sort_by_key(|n| n.to_lowercase());
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::directory::testing::safari_windows;

    fn mixed_windows() -> Vec<WindowDescriptor> {
        vec![
            WindowDescriptor::new(1, "Terminal", "zsh", true, false),
            WindowDescriptor::new(2, "", "Menubar", true, false),
            WindowDescriptor::new(3, "Finder", "", false, false),
            WindowDescriptor::new(4, "terminal", "Build LOG", true, true),
            WindowDescriptor::new(5, "Safari", "", true, false),
        ]
    }

    #[test]
    fn test_app_filter_is_case_insensitive_and_ordered() {
        let windows = safari_windows();
        let ids: Vec<u32> = find_window_ids(&windows, "safari", "").collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_title_filter_narrows_matches() {
        let windows = safari_windows();
        let ids: Vec<u32> = find_window_ids(&windows, "safari", "doc").collect();
        assert_eq!(ids, vec![11]);
    }

    #[test]
    fn test_unknown_app_yields_nothing() {
        let windows = safari_windows();
        assert_eq!(find_window_ids(&windows, "chrome", "").count(), 0);
    }

    #[test]
    fn test_empty_snapshot_yields_nothing() {
        assert_eq!(find_window_ids(&[], "safari", "home").count(), 0);
        assert_eq!(find_window_ids(&[], "", "").count(), 0);
    }

    #[test]
    fn test_empty_app_matches_every_owner() {
        let windows = mixed_windows();
        let ids: Vec<u32> = find_window_ids(&windows, "", "").collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_app_still_filters_by_title() {
        let windows = mixed_windows();
        let ids: Vec<u32> = find_window_ids(&windows, "", "log").collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_title_filter_never_adds_matches() {
        let windows = mixed_windows();
        for app in ["", "term", "TERMINAL", "finder", "x"] {
            let all: Vec<u32> = find_window_ids(&windows, app, "").collect();
            for title in ["", "z", "LOG", "bar", "missing"] {
                for id in find_window_ids(&windows, app, title) {
                    assert!(all.contains(&id), "{id} matched {app}/{title} only");
                    let window = windows.iter().find(|w| w.window_id() == id).unwrap();
                    assert!(window.owner_name().to_lowercase().contains(&app.to_lowercase()));
                    assert!(window.title().to_lowercase().contains(&title.to_lowercase()));
                }
            }
        }
    }

    #[test]
    fn test_find_is_lazy() {
        let windows = safari_windows();
        let mut ids = find_window_ids(&windows, "safari", "");
        assert_eq!(ids.next(), Some(10));
        assert_eq!(ids.next(), Some(11));
        assert_eq!(ids.next(), None);
    }

    #[test]
    fn test_resolve_window_id_takes_first_match() {
        let windows = safari_windows();
        assert_eq!(resolve_window_id(&windows, "SAFARI", "").unwrap(), 10);
    }

    #[test]
    fn test_resolve_window_id_not_found_names_filters() {
        let windows = safari_windows();
        let err = resolve_window_id(&windows, "chrome", "").unwrap_err();
        assert!(matches!(err, WindowError::WindowNotFound { .. }));
        assert!(err.to_string().contains("chrome"));
    }

    #[test]
    fn test_resolve_window_ids_collects_all() {
        let windows = safari_windows();
        assert_eq!(resolve_window_ids(&windows, "safari", "").unwrap(), vec![10, 11]);
        assert!(resolve_window_ids(&windows, "safari", "nothing").is_err());
    }

    #[test]
    fn test_owner_names_are_distinct_sorted_and_non_empty() {
        let windows = mixed_windows();
        assert_eq!(
            owner_names(&windows),
            vec!["Finder", "Safari", "Terminal", "terminal"]
        );
    }
}
