use crate::errors::WincapError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window query failed: {message}")]
    QueryFailed { message: String },

    #[error("Timed out after {timeout_ms}ms waiting for shareable window content")]
    Timeout { timeout_ms: u64 },

    #[error("Window with parent '{app}' and title '{title}' not found")]
    WindowNotFound { app: String, title: String },

    #[error("Unknown window selection options: {options}")]
    InvalidOptions { options: String },
}

impl WincapError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::QueryFailed { .. } => "WINDOW_QUERY_FAILED",
            WindowError::Timeout { .. } => "WINDOW_QUERY_TIMEOUT",
            WindowError::WindowNotFound { .. } => "WINDOW_NOT_FOUND",
            WindowError::InvalidOptions { .. } => "WINDOW_INVALID_OPTIONS",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WindowError::WindowNotFound { .. } | WindowError::InvalidOptions { .. }
        )
    }
}
