//! Error handling
//!
//! Defines error types for the namespace and the shell that renders them.

pub mod handlers;
pub mod types;

pub use types::*;
