use serde::{Deserialize, Serialize};

/// Snapshot of one shareable window as reported by the window server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    window_id: u32,
    owner_name: String,
    title: String,
    is_on_screen: bool,
    is_active: bool,
}

impl WindowDescriptor {
    pub fn new(
        window_id: u32,
        owner_name: impl Into<String>,
        title: impl Into<String>,
        is_on_screen: bool,
        is_active: bool,
    ) -> Self {
        Self {
            window_id,
            owner_name: owner_name.into(),
            title: title.into(),
            is_on_screen,
            is_active,
        }
    }

    pub fn window_id(&self) -> u32 {
        self.window_id
    }

    /// Owning application name, empty when the window has no owner
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_on_screen(&self) -> bool {
        self.is_on_screen
    }

    /// Whether this is the frontmost application window.
    ///
    /// The macOS window list carries no focus flag, so this is a guess: the
    /// first on-screen, normal-layer window with an owner, taken from a list
    /// ordered front to back. At most one window per snapshot is marked.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Filters applied by the window server while enumerating windows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowQueryOptions {
    pub exclude_desktop: bool,
    pub on_screen_only: bool,
}

impl WindowQueryOptions {
    pub fn new(exclude_desktop: bool, on_screen_only: bool) -> Self {
        Self {
            exclude_desktop,
            on_screen_only,
        }
    }

    pub fn with_desktop(mut self) -> Self {
        self.exclude_desktop = false;
        self
    }

    pub fn with_offscreen(mut self) -> Self {
        self.on_screen_only = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_getters() {
        let window = WindowDescriptor::new(10, "Safari", "Home", true, false);
        assert_eq!(window.window_id(), 10);
        assert_eq!(window.owner_name(), "Safari");
        assert_eq!(window.title(), "Home");
        assert!(window.is_on_screen());
        assert!(!window.is_active());
    }

    #[test]
    fn test_descriptor_serializes_snake_case_fields() {
        let window = WindowDescriptor::new(7, "Finder", "", false, true);
        let json = serde_json::to_value(&window).unwrap();
        assert_eq!(json["window_id"], 7);
        assert_eq!(json["owner_name"], "Finder");
        assert_eq!(json["title"], "");
        assert_eq!(json["is_on_screen"], false);
        assert_eq!(json["is_active"], true);
    }

    #[test]
    fn test_query_options_overrides_clear_flags() {
        let options = WindowQueryOptions::new(true, true)
            .with_desktop()
            .with_offscreen();
        assert_eq!(options, WindowQueryOptions::default());
    }
}
