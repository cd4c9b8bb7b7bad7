//! wincap-core: Core library for macOS window capture
//!
//! Enumerates shareable windows through the window server, matches them
//! against application/title filters and captures them with the system
//! `screencapture` tool. Used by the `wincap` CLI.
//!
//! # Main Entry Points
//!
//! - [`window`] - Query, filter and resolve windows
//! - [`capture`] - Build and run capture commands
//! - [`filename`] - Generate safe, timestamped output names
//! - [`command`] - Preview, single, multi and interactive modes

pub mod capture;
pub mod command;
pub mod errors;
pub mod events;
pub mod filename;
pub mod logging;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use capture::{CaptureError, CaptureOptions, ImageFormat, ProcessRunner, SystemRunner};
pub use command::{CommandError, CommandOrchestrator, CommandOutcome, CommandRequest, Mode};
pub use errors::{WincapError, WincapResult};
pub use filename::build_filename;
pub use window::{
    WindowDescriptor, WindowDirectory, WindowError, WindowQueryOptions, parse_window_options,
};

// Re-export logging initialization
pub use logging::init_logging;
