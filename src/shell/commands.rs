//! Module `commands`
//!
//! Parses shell input lines into commands and defines the result a handled
//! command produces.

use crate::error::CommandError;
use crate::storage::{SortField, SortOrder};

pub const USAGE_REGISTER: &str = "register <username>";
pub const USAGE_DELETE: &str = "delete <username>";
pub const USAGE_LIST: &str = "list [prefix]";
pub const USAGE_CREATE_FOLDER: &str = "create-folder <username> <foldername> [description]";
pub const USAGE_DELETE_FOLDER: &str = "delete-folder <username> <foldername>";
pub const USAGE_LIST_FOLDERS: &str =
    "list-folders <username> [--sort-name|--sort-created] [asc|desc]";
pub const USAGE_CREATE_FILE: &str =
    "create-file <username> <foldername> <filename> [description]";
pub const USAGE_DELETE_FILE: &str = "delete-file <username> <foldername> <filename>";
pub const USAGE_LIST_FILES: &str =
    "list-files <username> <foldername> [--sort-name|--sort-created] [asc|desc]";

/// Every usage line, in the order `help` prints them.
pub const USAGES: [&str; 11] = [
    USAGE_REGISTER,
    USAGE_DELETE,
    USAGE_LIST,
    USAGE_CREATE_FOLDER,
    USAGE_DELETE_FOLDER,
    USAGE_LIST_FOLDERS,
    USAGE_CREATE_FILE,
    USAGE_DELETE_FILE,
    USAGE_LIST_FILES,
    "help",
    "exit",
];

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register(String),
    Delete(String),
    List(String), // Username prefix, empty for all
    CreateFolder {
        user: String,
        folder: String,
        description: String,
    },
    DeleteFolder {
        user: String,
        folder: String,
    },
    ListFolders {
        user: String,
        field: SortField,
        order: SortOrder,
    },
    CreateFile {
        user: String,
        folder: String,
        file: String,
        description: String,
    },
    DeleteFile {
        user: String,
        folder: String,
        file: String,
    },
    ListFiles {
        user: String,
        folder: String,
        field: SortField,
        order: SortOrder,
    },
    Help,
    Exit,
    Empty, // Blank line
}

/// Outcome of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
    Exit,
}

/// Status plus the text to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure,
            message: Some(message.into()),
        }
    }

    pub fn exit() -> Self {
        Self {
            status: CommandStatus::Exit,
            message: None,
        }
    }

    pub fn silent() -> Self {
        Self {
            status: CommandStatus::Success,
            message: None,
        }
    }
}

/// Parses one input line.
///
/// Arguments are whitespace separated; descriptions take every remaining
/// token, joined by single spaces. The command word is case-insensitive.
pub fn parse_command(raw: &str) -> Result<Command, CommandError> {
    let args: Vec<&str> = raw.split_whitespace().collect();
    let Some((cmd, args)) = args.split_first() else {
        return Ok(Command::Empty);
    };

    let owned = |i: usize| args[i].to_string();

    match cmd.to_ascii_lowercase().as_str() {
        "register" => match args.len() {
            1 => Ok(Command::Register(owned(0))),
            _ => Err(CommandError::Usage(USAGE_REGISTER)),
        },
        "delete" => match args.len() {
            1 => Ok(Command::Delete(owned(0))),
            _ => Err(CommandError::Usage(USAGE_DELETE)),
        },
        "list" => match args.len() {
            0 => Ok(Command::List(String::new())),
            1 => Ok(Command::List(owned(0))),
            _ => Err(CommandError::Usage(USAGE_LIST)),
        },
        "create-folder" if args.len() >= 2 => Ok(Command::CreateFolder {
            user: owned(0),
            folder: owned(1),
            description: args[2..].join(" "),
        }),
        "create-folder" => Err(CommandError::Usage(USAGE_CREATE_FOLDER)),
        "delete-folder" => match args.len() {
            2 => Ok(Command::DeleteFolder {
                user: owned(0),
                folder: owned(1),
            }),
            _ => Err(CommandError::Usage(USAGE_DELETE_FOLDER)),
        },
        "list-folders" if (1..=3).contains(&args.len()) => {
            let (field, order) = parse_sort(&args[1..], USAGE_LIST_FOLDERS)?;
            Ok(Command::ListFolders {
                user: owned(0),
                field,
                order,
            })
        }
        "list-folders" => Err(CommandError::Usage(USAGE_LIST_FOLDERS)),
        "create-file" if args.len() >= 3 => Ok(Command::CreateFile {
            user: owned(0),
            folder: owned(1),
            file: owned(2),
            description: args[3..].join(" "),
        }),
        "create-file" => Err(CommandError::Usage(USAGE_CREATE_FILE)),
        "delete-file" => match args.len() {
            3 => Ok(Command::DeleteFile {
                user: owned(0),
                folder: owned(1),
                file: owned(2),
            }),
            _ => Err(CommandError::Usage(USAGE_DELETE_FILE)),
        },
        "list-files" if (2..=4).contains(&args.len()) => {
            let (field, order) = parse_sort(&args[2..], USAGE_LIST_FILES)?;
            Ok(Command::ListFiles {
                user: owned(0),
                folder: owned(1),
                field,
                order,
            })
        }
        "list-files" => Err(CommandError::Usage(USAGE_LIST_FILES)),
        "help" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        _ => Err(CommandError::Unknown(cmd.to_string())),
    }
}

/// Reads the optional `[--sort-name|--sort-created] [asc|desc]` tail.
///
/// Each of the two options may appear at most once; a repeat is reported
/// as `usage`.
fn parse_sort(args: &[&str], usage: &'static str) -> Result<(SortField, SortOrder), CommandError> {
    let mut field: Option<SortField> = None;
    let mut order: Option<SortOrder> = None;

    for arg in args {
        if arg.starts_with("--") {
            if field.replace(arg.parse()?).is_some() {
                return Err(CommandError::Usage(usage));
            }
        } else if order.replace(arg.parse()?).is_some() {
            return Err(CommandError::Usage(usage));
        }
    }

    Ok((field.unwrap_or_default(), order.unwrap_or_default()))
}
