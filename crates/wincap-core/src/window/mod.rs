pub mod directory;
pub mod errors;
pub mod options;
pub mod platform;
pub mod resolver;
pub mod types;

pub use directory::{DEFAULT_QUERY_TIMEOUT_MS, WindowDirectory, WindowSource};
pub use errors::WindowError;
pub use options::{DEFAULT_WINDOW_OPTIONS, WINDOW_OPTIONS, parse_window_options};
pub use resolver::{
    WindowFilter, find_window_ids, matching_windows, owner_names, resolve_window_id,
    resolve_window_ids,
};
pub use types::{WindowDescriptor, WindowQueryOptions};
