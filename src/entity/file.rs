//! File records

use chrono::{DateTime, Utc};

use super::Record;
use crate::error::{EntityKind, VfsError};
use crate::validator::NameValidator;

/// Metadata for a file. No content is stored.
#[derive(Debug, Clone)]
pub struct File {
    name: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl File {
    pub fn new(
        name: &str,
        description: &str,
        validator: &NameValidator,
    ) -> Result<Self, VfsError> {
        validator.check(EntityKind::File, name)?;
        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
        })
    }
}

impl Record for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
