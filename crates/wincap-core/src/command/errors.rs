use crate::capture::CaptureError;
use crate::errors::WincapError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("{message}")]
    Usage { message: String },

    #[error("Selection cancelled: no input received")]
    SelectionCancelled,

    #[error("IO error during command: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CommandError {
    pub fn usage(message: impl Into<String>) -> Self {
        CommandError::Usage {
            message: message.into(),
        }
    }
}

impl WincapError for CommandError {
    fn error_code(&self) -> &'static str {
        match self {
            CommandError::Window(e) => e.error_code(),
            CommandError::Capture(e) => e.error_code(),
            CommandError::Usage { .. } => "USAGE_ERROR",
            CommandError::SelectionCancelled => "SELECTION_CANCELLED",
            CommandError::Io { .. } => "COMMAND_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            CommandError::Window(e) => e.is_user_error(),
            CommandError::Capture(e) => e.is_user_error(),
            CommandError::Usage { .. } | CommandError::SelectionCancelled => true,
            CommandError::Io { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error() {
        let error = CommandError::usage("--all and --interactive cannot be combined");
        assert_eq!(
            error.to_string(),
            "--all and --interactive cannot be combined"
        );
        assert_eq!(error.error_code(), "USAGE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_wrapped_errors_keep_message_and_code() {
        let error: CommandError = WindowError::WindowNotFound {
            app: "chrome".to_string(),
            title: String::new(),
        }
        .into();
        assert!(error.to_string().contains("chrome"));
        assert_eq!(error.error_code(), "WINDOW_NOT_FOUND");
        assert!(error.is_user_error());

        let error: CommandError = CaptureError::ToolFailed {
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "screencapture output: boom");
        assert_eq!(error.error_code(), "CAPTURE_TOOL_FAILED");
    }

    #[test]
    fn test_selection_cancelled() {
        let error = CommandError::SelectionCancelled;
        assert_eq!(error.error_code(), "SELECTION_CANCELLED");
        assert!(error.is_user_error());
    }
}
