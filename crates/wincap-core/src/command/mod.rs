pub mod errors;
pub mod handler;
pub mod menu;
pub mod table;
pub mod types;

pub use errors::CommandError;
pub use handler::CommandOrchestrator;
pub use menu::prompt_choice;
pub use table::{TableFormatter, truncate, write_windows_table};
pub use types::{CommandOutcome, CommandRequest, CommandState, Mode};
