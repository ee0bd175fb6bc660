//! rax-vfs
//!
//! An in-memory namespace of users, folders and files with case-insensitive,
//! prefix-searchable names and sorted listings.

pub mod config;
pub mod entity;
pub mod error;
pub mod shell;
pub mod storage;
pub mod trie;
pub mod utils;
pub mod validator;

pub use error::VfsError;
pub use storage::Storage;
