//! Interactive shell
//!
//! Line-oriented front end over the storage: parsing, handling and the
//! session loop.

pub mod commands;
pub mod handlers;
pub mod session;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use handlers::handle_command;
pub use session::run_session;
