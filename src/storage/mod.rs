//! In-memory namespace storage
//!
//! The storage manager, and the sort options its listings accept.

mod manager;
mod sort;

pub use manager::Storage;
pub use sort::{SortField, SortOrder, sort_entries};
