use crate::capture::CaptureOptions;
use crate::window::{WindowDescriptor, WindowQueryOptions};

use super::errors::CommandError;

/// What one invocation should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// List matching windows without capturing
    Preview,
    /// Capture the first matching window
    Single,
    /// Capture every matching window
    Multi,
    /// Pick the app and window from menus, then capture it
    Interactive,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Preview => "preview",
            Mode::Single => "single",
            Mode::Multi => "multi",
            Mode::Interactive => "interactive",
        }
    }
}

/// Progress of one invocation, for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    Idle,
    Resolving,
    Capturing,
    Done,
    Failed,
}

impl CommandState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandState::Idle => "idle",
            CommandState::Resolving => "resolving",
            CommandState::Capturing => "capturing",
            CommandState::Done => "done",
            CommandState::Failed => "failed",
        }
    }
}

/// Everything the user asked for in one invocation
#[derive(Debug, Clone, Default)]
pub struct CommandRequest {
    app: Option<String>,
    title: String,
    filename: Option<String>,
    query: WindowQueryOptions,
    capture: CaptureOptions,
    preview: bool,
    all_windows: bool,
    interactive: bool,
    json: bool,
}

impl CommandRequest {
    pub fn new(query: WindowQueryOptions, capture: CaptureOptions) -> Self {
        Self {
            query,
            capture,
            ..Self::default()
        }
    }

    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn with_all_windows(mut self, all_windows: bool) -> Self {
        self.all_windows = all_windows;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn app(&self) -> Option<&str> {
        self.app.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Explicit output filename; empty strings count as absent
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref().filter(|f| !f.is_empty())
    }

    pub fn query(&self) -> WindowQueryOptions {
        self.query
    }

    pub fn capture(&self) -> &CaptureOptions {
        &self.capture
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Pick the mode, rejecting flag combinations that contradict each other.
    pub fn mode(&self) -> Result<Mode, CommandError> {
        if self.all_windows && self.interactive {
            return Err(CommandError::usage(
                "--all and --interactive cannot be used together",
            ));
        }
        if self.preview && (self.all_windows || self.interactive) {
            return Err(CommandError::usage(
                "--preview cannot be combined with --all or --interactive",
            ));
        }
        if self.preview {
            return match self.app() {
                Some(_) => Ok(Mode::Preview),
                None => Err(CommandError::usage(
                    "--preview requires an application name",
                )),
            };
        }
        if self.interactive {
            return Ok(Mode::Interactive);
        }
        if self.all_windows {
            return match self.app() {
                Some(_) => Ok(Mode::Multi),
                None => Err(CommandError::usage(
                    "--all requires an application name",
                )),
            };
        }
        match self.app() {
            Some(_) => Ok(Mode::Single),
            None => Ok(Mode::Interactive),
        }
    }
}

/// Result of a successful invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Previewed(Vec<WindowDescriptor>),
    Captured(Vec<String>),
}
