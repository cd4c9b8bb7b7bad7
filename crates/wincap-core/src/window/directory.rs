use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::{error, info, warn};

use super::errors::WindowError;
use super::types::{WindowDescriptor, WindowQueryOptions};

/// Default deadline for one window enumeration request
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 5000;

/// A provider of shareable window snapshots.
///
/// Implementations perform one enumeration request and return every window
/// the window server reports for the given filters, in enumeration order.
pub trait WindowSource: Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Perform one enumeration request.
    fn shareable_windows(
        &self,
        options: WindowQueryOptions,
    ) -> Result<Vec<WindowDescriptor>, WindowError>;
}

/// Bounded-wait front end over a [`WindowSource`].
///
/// Each `list` call submits the request on a worker thread and blocks on a
/// completion channel until the result arrives or the deadline passes.
#[derive(Clone)]
pub struct WindowDirectory {
    source: Arc<dyn WindowSource>,
    timeout: Duration,
}

impl WindowDirectory {
    pub fn new(source: Arc<dyn WindowSource>) -> Self {
        Self {
            source,
            timeout: Duration::from_millis(DEFAULT_QUERY_TIMEOUT_MS),
        }
    }

    /// Directory backed by the platform window server.
    pub fn system() -> Self {
        Self::new(super::platform::system_source())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Take a fresh snapshot of shareable windows.
    ///
    /// A worker that misses the deadline is abandoned; its late result is
    /// dropped with the channel.
    pub fn list(&self, options: WindowQueryOptions) -> Result<Vec<WindowDescriptor>, WindowError> {
        let timeout_ms = self.timeout.as_millis() as u64;
        info!(
            event = "core.window.list_started",
            source = self.source.name(),
            exclude_desktop = options.exclude_desktop,
            on_screen_only = options.on_screen_only,
            timeout_ms = timeout_ms
        );

        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        thread::Builder::new()
            .name("wincap-window-query".to_string())
            .spawn(move || {
                // Receiver is gone after a timeout; nothing left to notify.
                let _ = tx.send(source.shareable_windows(options));
            })
            .map_err(|e| WindowError::QueryFailed {
                message: format!("Failed to start window query: {}", e),
            })?;

        match rx.recv_timeout(self.timeout) {
            Ok(Ok(windows)) => {
                info!(event = "core.window.list_completed", count = windows.len());
                Ok(windows)
            }
            Ok(Err(e)) => {
                error!(event = "core.window.list_failed", error = %e);
                Err(e)
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!(event = "core.window.list_timeout", timeout_ms = timeout_ms);
                Err(WindowError::Timeout { timeout_ms })
            }
            Err(RecvTimeoutError::Disconnected) => {
                error!(event = "core.window.list_failed", error = "worker exited");
                Err(WindowError::QueryFailed {
                    message: "Window query worker exited without a result".to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Source returning a fixed snapshot and recording the options it saw
    pub struct StaticSource {
        windows: Vec<WindowDescriptor>,
        seen: Mutex<Vec<WindowQueryOptions>>,
    }

    impl StaticSource {
        pub fn new(windows: Vec<WindowDescriptor>) -> Self {
            Self {
                windows,
                seen: Mutex::new(Vec::new()),
            }
        }

        pub fn seen(&self) -> Vec<WindowQueryOptions> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl WindowSource for StaticSource {
        fn name(&self) -> &'static str {
            "static"
        }

        fn shareable_windows(
            &self,
            options: WindowQueryOptions,
        ) -> Result<Vec<WindowDescriptor>, WindowError> {
            self.seen.lock().unwrap().push(options);
            Ok(self.windows.clone())
        }
    }

    /// The two-window snapshot used across resolver and command tests
    pub fn safari_windows() -> Vec<WindowDescriptor> {
        vec![
            WindowDescriptor::new(10, "Safari", "Home", true, true),
            WindowDescriptor::new(11, "Safari - Private", "Docs", true, false),
        ]
    }
}
