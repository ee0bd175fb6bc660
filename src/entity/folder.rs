//! Folder records

use chrono::{DateTime, Utc};

use super::{File, Record};
use crate::error::{EntityKind, VfsError};
use crate::trie::PrefixIndex;
use crate::validator::NameValidator;

/// A named folder holding files.
#[derive(Debug, Clone)]
pub struct Folder {
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    files: PrefixIndex<File>,
}

impl Folder {
    pub fn new(
        name: &str,
        description: &str,
        validator: &NameValidator,
    ) -> Result<Self, VfsError> {
        validator.check(EntityKind::Folder, name)?;
        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
            files: PrefixIndex::new(),
        })
    }

    pub fn files(&self) -> &PrefixIndex<File> {
        &self.files
    }

    pub(crate) fn files_mut(&mut self) -> &mut PrefixIndex<File> {
        &mut self.files
    }
}

impl Record for Folder {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_folder() {
        let validator = NameValidator::default();
        let cases = [
            ("validfolder", true),
            ("", false),
            (
                "thisfoldernameiswaytoolongandshouldfailvalidation_aaaaaaaa",
                false,
            ),
            ("invalid@folder", false),
            ("folder123", true),
            ("valid_folder", true),
            ("valid-folder", true),
        ];

        for (name, ok) in cases {
            assert_eq!(
                Folder::new(name, "desc", &validator).is_ok(),
                ok,
                "folder name {name:?}"
            );
        }
    }

    #[test]
    fn test_new_folder_starts_empty() {
        let folder = Folder::new("Docs", "", &NameValidator::default()).unwrap();
        assert!(folder.files().is_empty());
        assert_eq!(folder.name(), "Docs");
    }
}
