use tracing::{error, info};

use super::errors::CaptureError;
use super::runner::ProcessRunner;
use super::types::{CaptureOptions, CaptureRequest};

/// macOS screenshot utility
pub const CAPTURE_TOOL: &str = "screencapture";

/// Arguments for the capture tool, in the order it expects them:
/// format, shadow suppression, window selector, destination.
pub fn capture_args(request: &CaptureRequest) -> Vec<String> {
    let mut args = Vec::with_capacity(6);
    if let Some(format) = request.format() {
        args.push("-t".to_string());
        args.push(format.as_str().to_string());
    }
    if !request.include_shadow() {
        args.push("-o".to_string());
    }
    args.push("-l".to_string());
    args.push(request.window_id().to_string());
    args.push(request.filename().to_string());
    args
}

/// Capture one window to `filename`.
///
/// The format is validated before anything is spawned. On success the
/// filename is returned unchanged. A failed run may still leave a partial
/// file behind.
pub fn capture(
    runner: &dyn ProcessRunner,
    window_id: u32,
    filename: &str,
    options: &CaptureOptions,
) -> Result<String, CaptureError> {
    info!(
        event = "core.capture.window_started",
        window_id = window_id,
        filename = filename,
        format = ?options.format(),
        include_shadow = options.include_shadow()
    );

    let request = CaptureRequest::new(window_id, filename, options).inspect_err(|e| {
        error!(event = "core.capture.window_rejected", error = %e);
    })?;

    let output = runner.run(CAPTURE_TOOL, &capture_args(&request))?;

    if !output.success() {
        let message = output.diagnostic().to_string();
        error!(
            event = "core.capture.window_failed",
            window_id = window_id,
            exit_code = ?output.exit_code,
            message = %message
        );
        return Err(CaptureError::ToolFailed { message });
    }

    info!(
        event = "core.capture.window_completed",
        window_id = window_id,
        filename = filename
    );
    Ok(request.filename().to_string())
}
