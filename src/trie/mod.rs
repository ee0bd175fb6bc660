//! Prefix index
//!
//! Case-insensitive trie used at every level of the namespace.

mod index;
mod node;

pub use index::PrefixIndex;
