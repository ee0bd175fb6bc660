//! Storage manager
//!
//! Owns the user index and serializes every operation through one
//! reader/writer lock. Mutations hold the write lock across the whole
//! descent (user, then folder, then file), reads hold the read lock, so no
//! caller ever observes a half-applied change.

use log::debug;
use parking_lot::RwLock;

use crate::config::NameRules;
use crate::entity::{EntryInfo, File, Folder, Record, User};
use crate::error::{EntityKind, VfsError};
use crate::storage::sort::{SortField, SortOrder, sort_entries};
use crate::trie::PrefixIndex;
use crate::validator::NameValidator;

/// The in-memory namespace of users, folders and files.
///
/// Names are case-folded for lookup and uniqueness; records keep the casing
/// they were created with. Create one instance and pass it by reference (or
/// `Arc`) to everything that needs it.
#[derive(Debug)]
pub struct Storage {
    users: RwLock<PrefixIndex<User>>,
    validator: NameValidator,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage {
    /// Storage with the default name rules (1-50 of `[A-Za-z0-9_-]`).
    pub fn new() -> Self {
        Self::with_rules(&NameRules::default())
    }

    pub fn with_rules(rules: &NameRules) -> Self {
        Self {
            users: RwLock::new(PrefixIndex::new()),
            validator: NameValidator::from_rules(rules),
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    // --------------------
    // Users
    // --------------------

    pub fn add_user(&self, username: &str) -> Result<(), VfsError> {
        let users = self.users.write();

        let user = User::new(username, &self.validator)?;
        let key = user.key();
        if users.contains_key(&key) {
            return Err(VfsError::already_exists(EntityKind::User, username));
        }

        users.insert(&key, user);
        debug!("Registered user {}", username);
        Ok(())
    }

    /// Removes a user together with all of their folders and files.
    pub fn delete_user(&self, username: &str) -> Result<(), VfsError> {
        let users = self.users.write();

        if !users.delete(&username.to_lowercase()) {
            return Err(VfsError::not_found(EntityKind::User, username));
        }

        debug!("Deleted user {}", username);
        Ok(())
    }

    /// Returns a copy of the user record.
    pub fn get_user(&self, username: &str) -> Result<User, VfsError> {
        self.users
            .read()
            .get(&username.to_lowercase())
            .ok_or_else(|| VfsError::not_found(EntityKind::User, username))
    }

    /// Display names of every user whose name starts with `prefix`, ignoring
    /// case. An empty prefix lists everyone. Results come back in name order.
    pub fn list_users(&self, prefix: &str) -> Vec<String> {
        let users = self.users.read();

        let mut matches = Vec::new();
        users.visit_prefix(&prefix.to_lowercase(), |key, user| {
            matches.push((key.to_string(), user.name().to_string()));
        });
        matches.sort();

        matches.into_iter().map(|(_, name)| name).collect()
    }

    // --------------------
    // Folders
    // --------------------

    pub fn create_folder(
        &self,
        username: &str,
        folder_name: &str,
        description: &str,
    ) -> Result<(), VfsError> {
        let mut users = self.users.write();
        let user = user_mut(&mut users, username)?;

        let folder = Folder::new(folder_name, description, &self.validator)?;
        let key = folder.key();
        let folders = user.folders_mut();
        if folders.contains_key(&key) {
            return Err(VfsError::already_exists(EntityKind::Folder, folder_name));
        }

        folders.insert(&key, folder);
        debug!("Created folder {} for user {}", folder_name, username);
        Ok(())
    }

    /// Removes a folder together with its files.
    pub fn delete_folder(&self, username: &str, folder_name: &str) -> Result<(), VfsError> {
        let mut users = self.users.write();
        let user = user_mut(&mut users, username)?;

        if !user.folders_mut().delete(&folder_name.to_lowercase()) {
            return Err(VfsError::not_found(EntityKind::Folder, folder_name));
        }

        debug!("Deleted folder {} for user {}", folder_name, username);
        Ok(())
    }

    /// Returns a copy of the folder record.
    pub fn get_folder(&self, username: &str, folder_name: &str) -> Result<Folder, VfsError> {
        let users = self.users.read();
        with_folder(&users, username, folder_name, Folder::clone)
    }

    pub fn list_folders(
        &self,
        username: &str,
        field: SortField,
        order: SortOrder,
    ) -> Result<Vec<EntryInfo>, VfsError> {
        let users = self.users.read();

        let mut entries = users
            .with_value(&username.to_lowercase(), |user| collect_entries(user.folders()))
            .ok_or_else(|| VfsError::not_found(EntityKind::User, username))?;

        sort_entries(&mut entries, field, order);
        Ok(entries)
    }

    // --------------------
    // Files
    // --------------------

    pub fn create_file(
        &self,
        username: &str,
        folder_name: &str,
        file_name: &str,
        description: &str,
    ) -> Result<(), VfsError> {
        let mut users = self.users.write();
        let user = user_mut(&mut users, username)?;
        let folder = folder_mut(user, folder_name)?;

        let file = File::new(file_name, description, &self.validator)?;
        let key = file.key();
        let files = folder.files_mut();
        if files.contains_key(&key) {
            return Err(VfsError::already_exists(EntityKind::File, file_name));
        }

        files.insert(&key, file);
        debug!(
            "Created file {} in folder {} for user {}",
            file_name, folder_name, username
        );
        Ok(())
    }

    pub fn delete_file(
        &self,
        username: &str,
        folder_name: &str,
        file_name: &str,
    ) -> Result<(), VfsError> {
        let mut users = self.users.write();
        let user = user_mut(&mut users, username)?;
        let folder = folder_mut(user, folder_name)?;

        if !folder.files_mut().delete(&file_name.to_lowercase()) {
            return Err(VfsError::not_found(EntityKind::File, file_name));
        }

        debug!(
            "Deleted file {} from folder {} for user {}",
            file_name, folder_name, username
        );
        Ok(())
    }

    /// Returns a copy of the file record.
    pub fn get_file(
        &self,
        username: &str,
        folder_name: &str,
        file_name: &str,
    ) -> Result<File, VfsError> {
        let users = self.users.read();

        with_folder(&users, username, folder_name, |folder| {
            folder
                .files()
                .get(&file_name.to_lowercase())
                .ok_or_else(|| VfsError::not_found(EntityKind::File, file_name))
        })?
    }

    pub fn list_files(
        &self,
        username: &str,
        folder_name: &str,
        field: SortField,
        order: SortOrder,
    ) -> Result<Vec<EntryInfo>, VfsError> {
        let users = self.users.read();

        let mut entries = with_folder(&users, username, folder_name, |folder| {
            collect_entries(folder.files())
        })?;

        sort_entries(&mut entries, field, order);
        Ok(entries)
    }
}

/// Runs `f` against a folder; the caller holds the read lock.
fn with_folder<R, F>(
    users: &PrefixIndex<User>,
    username: &str,
    folder_name: &str,
    f: F,
) -> Result<R, VfsError>
where
    F: FnOnce(&Folder) -> R,
{
    users
        .with_value(&username.to_lowercase(), |user| {
            user.folders()
                .with_value(&folder_name.to_lowercase(), f)
                .ok_or_else(|| VfsError::not_found(EntityKind::Folder, folder_name))
        })
        .unwrap_or_else(|| Err(VfsError::not_found(EntityKind::User, username)))
}

fn user_mut<'a>(
    users: &'a mut PrefixIndex<User>,
    username: &str,
) -> Result<&'a mut User, VfsError> {
    users
        .get_mut(&username.to_lowercase())
        .ok_or_else(|| VfsError::not_found(EntityKind::User, username))
}

fn folder_mut<'a>(user: &'a mut User, folder_name: &str) -> Result<&'a mut Folder, VfsError> {
    user.folders_mut()
        .get_mut(&folder_name.to_lowercase())
        .ok_or_else(|| VfsError::not_found(EntityKind::Folder, folder_name))
}

fn collect_entries<V: Record>(index: &PrefixIndex<V>) -> Vec<EntryInfo> {
    let mut entries = Vec::new();
    index.visit_prefix("", |_, record| entries.push(record.info()));
    entries
}
