//! Error handlers
//!
//! Turns errors into the text the shell prints.

use crate::error::types::{CommandError, VfsError};
use log::warn;

/// Render a storage error for the shell, logging it on the way out.
pub fn render_error(err: &VfsError) -> String {
    warn!("Operation failed ({}): {}", err.kind(), err);
    format!("Error: {}", err)
}

/// Render a command parsing error for the shell.
pub fn render_command_error(err: &CommandError) -> String {
    match err {
        CommandError::Usage(_) | CommandError::Unknown(_) => err.to_string(),
        CommandError::InvalidSort(_) => format!("Error: {}", err),
    }
}
