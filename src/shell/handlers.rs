//! Command handlers
//!
//! Executes parsed commands against the storage and formats the outcome for
//! display. Handlers keep no state of their own.

use crate::entity::EntryInfo;
use crate::error::VfsError;
use crate::error::handlers::render_error;
use crate::shell::commands::{Command, CommandResult, USAGES};
use crate::storage::{SortField, SortOrder, Storage};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Dispatches a parsed command to its handler.
pub fn handle_command(storage: &Storage, command: &Command) -> CommandResult {
    match command {
        Command::Register(user) => handle_cmd_register(storage, user),
        Command::Delete(user) => handle_cmd_delete(storage, user),
        Command::List(prefix) => handle_cmd_list(storage, prefix),
        Command::CreateFolder {
            user,
            folder,
            description,
        } => handle_cmd_create_folder(storage, user, folder, description),
        Command::DeleteFolder { user, folder } => handle_cmd_delete_folder(storage, user, folder),
        Command::ListFolders { user, field, order } => {
            handle_cmd_list_folders(storage, user, *field, *order)
        }
        Command::CreateFile {
            user,
            folder,
            file,
            description,
        } => handle_cmd_create_file(storage, user, folder, file, description),
        Command::DeleteFile { user, folder, file } => {
            handle_cmd_delete_file(storage, user, folder, file)
        }
        Command::ListFiles {
            user,
            folder,
            field,
            order,
        } => handle_cmd_list_files(storage, user, folder, *field, *order),
        Command::Help => handle_cmd_help(),
        Command::Exit => CommandResult::exit(),
        Command::Empty => CommandResult::silent(),
    }
}

/// Maps a storage outcome to a result carrying either `success` or the
/// rendered error.
fn respond<T>(outcome: Result<T, VfsError>, success: impl FnOnce(T) -> String) -> CommandResult {
    match outcome {
        Ok(value) => CommandResult::success(success(value)),
        Err(e) => CommandResult::failure(render_error(&e)),
    }
}

fn handle_cmd_register(storage: &Storage, user: &str) -> CommandResult {
    respond(storage.add_user(user), |_| {
        format!("User '{}' registered successfully", user)
    })
}

fn handle_cmd_delete(storage: &Storage, user: &str) -> CommandResult {
    respond(storage.delete_user(user), |_| {
        format!("User '{}' deleted successfully", user)
    })
}

fn handle_cmd_list(storage: &Storage, prefix: &str) -> CommandResult {
    let users = storage.list_users(prefix);
    if users.is_empty() {
        return CommandResult::success("No users found");
    }

    let mut lines = vec!["Users:".to_string()];
    lines.extend(users.iter().map(|user| format!("- {}", user)));
    CommandResult::success(lines.join("\n"))
}

fn handle_cmd_create_folder(
    storage: &Storage,
    user: &str,
    folder: &str,
    description: &str,
) -> CommandResult {
    respond(storage.create_folder(user, folder, description), |_| {
        format!(
            "Folder '{}' created successfully for user '{}'",
            folder, user
        )
    })
}

fn handle_cmd_delete_folder(storage: &Storage, user: &str, folder: &str) -> CommandResult {
    respond(storage.delete_folder(user, folder), |_| {
        format!(
            "Folder '{}' deleted successfully for user '{}'",
            folder, user
        )
    })
}

fn handle_cmd_list_folders(
    storage: &Storage,
    user: &str,
    field: SortField,
    order: SortOrder,
) -> CommandResult {
    respond(storage.list_folders(user, field, order), |folders| {
        if folders.is_empty() {
            format!("No folders found for user '{}'", user)
        } else {
            format_rows(&folders, user)
        }
    })
}

fn handle_cmd_create_file(
    storage: &Storage,
    user: &str,
    folder: &str,
    file: &str,
    description: &str,
) -> CommandResult {
    respond(storage.create_file(user, folder, file, description), |_| {
        format!(
            "File '{}' created successfully in folder '{}' for user '{}'",
            file, folder, user
        )
    })
}

fn handle_cmd_delete_file(storage: &Storage, user: &str, folder: &str, file: &str) -> CommandResult {
    respond(storage.delete_file(user, folder, file), |_| {
        format!(
            "File '{}' deleted successfully from folder '{}' for user '{}'",
            file, folder, user
        )
    })
}

fn handle_cmd_list_files(
    storage: &Storage,
    user: &str,
    folder: &str,
    field: SortField,
    order: SortOrder,
) -> CommandResult {
    respond(storage.list_files(user, folder, field, order), |files| {
        if files.is_empty() {
            format!(
                "No files found in folder '{}' for user '{}'",
                folder, user
            )
        } else {
            format_rows(&files, user)
        }
    })
}

fn handle_cmd_help() -> CommandResult {
    let mut lines = vec!["Commands:".to_string()];
    lines.extend(USAGES.iter().map(|usage| format!("  {}", usage)));
    CommandResult::success(lines.join("\n"))
}

/// One `name | description | created | owner` line per entry.
fn format_rows(entries: &[EntryInfo], owner: &str) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{} | {} | {} | {}",
                entry.name,
                entry.description,
                entry.created_at.format(TIMESTAMP_FORMAT),
                owner
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
