//! User records

use chrono::{DateTime, Utc};

use super::{Folder, Record};
use crate::error::{EntityKind, VfsError};
use crate::trie::PrefixIndex;
use crate::validator::NameValidator;

/// A registered user and the folders they own.
#[derive(Debug, Clone)]
pub struct User {
    name: String,
    created_at: DateTime<Utc>,
    folders: PrefixIndex<Folder>,
}

impl User {
    pub fn new(name: &str, validator: &NameValidator) -> Result<Self, VfsError> {
        validator.check(EntityKind::User, name)?;
        Ok(Self {
            name: name.to_string(),
            created_at: Utc::now(),
            folders: PrefixIndex::new(),
        })
    }

    pub fn folders(&self) -> &PrefixIndex<Folder> {
        &self.folders
    }

    pub(crate) fn folders_mut(&mut self) -> &mut PrefixIndex<Folder> {
        &mut self.folders
    }
}

impl Record for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let validator = NameValidator::default();
        assert!(User::new("alice", &validator).is_ok());
        assert!(User::new("Alice_99-x", &validator).is_ok());
        assert!(User::new("", &validator).is_err());
        assert!(User::new(&"u".repeat(51), &validator).is_err());
        assert_eq!(
            User::new("bob@home", &validator).unwrap_err(),
            VfsError::invalid_name(EntityKind::User, "bob@home")
        );
    }

    #[test]
    fn test_user_info_has_no_description() {
        let user = User::new("Carol", &NameValidator::default()).unwrap();
        let info = user.info();
        assert_eq!(info.name, "Carol");
        assert_eq!(info.description, "");
        assert_eq!(info.key(), "carol");
        assert!(user.folders().is_empty());
    }
}
