pub mod errors;
pub mod handler;
pub mod runner;
pub mod types;

pub use errors::CaptureError;
pub use handler::{CAPTURE_TOOL, capture, capture_args};
pub use runner::{ProcessOutput, ProcessRunner, SystemRunner};
pub use types::{CaptureOptions, CaptureRequest, ImageFormat};
