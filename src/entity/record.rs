//! Shared record behaviour

use chrono::{DateTime, Utc};

/// Read access common to users, folders and files.
pub trait Record {
    /// Name as given at creation, original casing preserved.
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn created_at(&self) -> DateTime<Utc>;

    /// Case-folded name used for lookup, uniqueness and name ordering.
    fn key(&self) -> String {
        self.name().to_lowercase()
    }

    /// Detached snapshot for listings.
    fn info(&self) -> EntryInfo {
        EntryInfo {
            name: self.name().to_string(),
            description: self.description().to_string(),
            created_at: self.created_at(),
        }
    }
}

/// Listing row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl EntryInfo {
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
