use crate::errors::WincapError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Bad output format '{format}'. File type unknown (supported: png, pdf, jpg, tiff)")]
    InvalidFormat { format: String },

    #[error("screencapture output: {message}")]
    ToolFailed { message: String },

    #[error("Failed to run '{program}': {message}")]
    SpawnFailed { program: String, message: String },
}

impl WincapError for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            CaptureError::InvalidFormat { .. } => "CAPTURE_INVALID_FORMAT",
            CaptureError::ToolFailed { .. } => "CAPTURE_TOOL_FAILED",
            CaptureError::SpawnFailed { .. } => "CAPTURE_SPAWN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, CaptureError::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_error() {
        let error = CaptureError::InvalidFormat {
            format: "bmp".to_string(),
        };
        assert!(error.to_string().contains("'bmp'"));
        assert_eq!(error.error_code(), "CAPTURE_INVALID_FORMAT");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_tool_failed_error() {
        let error = CaptureError::ToolFailed {
            message: "could not create image from window".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "screencapture output: could not create image from window"
        );
        assert_eq!(error.error_code(), "CAPTURE_TOOL_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_spawn_failed_error() {
        let error = CaptureError::SpawnFailed {
            program: "screencapture".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to run 'screencapture': No such file or directory"
        );
        assert_eq!(error.error_code(), "CAPTURE_SPAWN_FAILED");
    }
}
