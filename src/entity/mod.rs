//! Namespace records
//!
//! Users own folders, folders own files. Records are immutable once built;
//! only their child indexes change.

mod file;
mod folder;
mod record;
mod user;

pub use file::File;
pub use folder::Folder;
pub use record::{EntryInfo, Record};
pub use user::User;
