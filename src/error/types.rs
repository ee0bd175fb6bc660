//! Error types
//!
//! Domain errors returned by the storage manager and its records.

use std::fmt;

use thiserror::Error;

/// Which level of the namespace an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Folder,
    File,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Folder => write!(f, "folder"),
            EntityKind::File => write!(f, "file"),
        }
    }
}

/// Storage errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// Name is empty, too long, or contains a disallowed character.
    #[error("the {kind} name '{name}' is invalid")]
    InvalidName { kind: EntityKind, name: String },

    /// A record with the same case-folded name exists in the target scope.
    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: EntityKind, name: String },

    /// A user, folder, or file along the requested path is missing.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntityKind, name: String },
}

impl VfsError {
    pub fn invalid_name(kind: EntityKind, name: &str) -> Self {
        VfsError::InvalidName {
            kind,
            name: name.to_string(),
        }
    }

    pub fn already_exists(kind: EntityKind, name: &str) -> Self {
        VfsError::AlreadyExists {
            kind,
            name: name.to_string(),
        }
    }

    pub fn not_found(kind: EntityKind, name: &str) -> Self {
        VfsError::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    /// The entity level the error refers to.
    pub fn kind(&self) -> EntityKind {
        match self {
            VfsError::InvalidName { kind, .. }
            | VfsError::AlreadyExists { kind, .. }
            | VfsError::NotFound { kind, .. } => *kind,
        }
    }
}

/// Shell command errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Invalid sort option: {0}")]
    InvalidSort(String),
}
