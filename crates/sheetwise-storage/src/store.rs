// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed record store on top of a [`KeyValueBackend`].
//!
//! Every collection lives as one JSON array under a fixed key and is
//! rewritten whole on each save. Reads never fail: a backend error, a missing
//! key or malformed JSON reads as empty/absent and is logged. Writes surface
//! errors to the caller and touch only the entry being saved; array entries
//! the current types cannot parse are carried over verbatim.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sheetwise_core::types::{SharedSheet, StudyData, User};
use sheetwise_core::{KeyValueBackend, SheetwiseError};
use tracing::{debug, warn};

use crate::keys;

/// Persistent store for users, the session pointer, sheets and the gallery.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueBackend>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl Store {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Name of the underlying backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    // --- Users ---

    /// Every stored user. Unreadable entries are skipped.
    pub fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.read_list(keys::USERS);
        for user in &mut users {
            user.clamp_mastery();
        }
        users
    }

    /// Inserts the user, or replaces the stored record with the same identity.
    /// Entries that do not parse as users are written back untouched.
    pub fn save_user(&self, user: &User) -> Result<(), SheetwiseError> {
        let total = self.upsert_entry(keys::USERS, user, |entry| {
            serde_json::from_value::<User>(entry.clone()).is_ok_and(|u| u.same_identity(user))
        })?;
        debug!(user_id = %user.id, total, "user saved");
        Ok(())
    }

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.list_users().into_iter().find(|u| u.id == id)
    }

    /// Exact name match.
    pub fn find_user_by_name(&self, name: &str) -> Option<User> {
        self.list_users().into_iter().find(|u| u.name == name)
    }

    // --- Session pointer ---

    pub fn current_session(&self) -> Option<User> {
        self.read_json(keys::CURRENT_SESSION)
    }

    /// Points the session at `user`, or clears it. The user list is untouched.
    pub fn set_current_session(&self, user: Option<&User>) -> Result<(), SheetwiseError> {
        match user {
            Some(user) => self.write_json(keys::CURRENT_SESSION, user),
            None => self.backend.remove(keys::CURRENT_SESSION),
        }
    }

    // --- Sheets ---

    pub fn list_sheets(&self) -> Vec<StudyData> {
        self.read_list(keys::SHEETS)
    }

    pub fn get_sheet(&self, id: &str) -> Option<StudyData> {
        self.list_sheets().into_iter().find(|s| s.id == id)
    }

    /// Adds a sheet to the store. Stored sheets are never replaced, so an id
    /// that is already taken is rejected.
    pub fn save_sheet(&self, sheet: &StudyData) -> Result<(), SheetwiseError> {
        if sheet.id.is_empty() {
            return Err(SheetwiseError::Validation(
                "cannot save a sheet without an id".to_string(),
            ));
        }
        let mut entries = self.read_entries_for_write(keys::SHEETS)?;
        if entries.iter().any(|entry| entry_id(entry) == Some(sheet.id.as_str())) {
            return Err(SheetwiseError::Validation(format!(
                "a sheet with id {} is already stored",
                sheet.id
            )));
        }
        entries.push(to_entry(sheet)?);
        self.write_json(keys::SHEETS, &entries)?;
        debug!(sheet_id = %sheet.id, total = entries.len(), "sheet saved");
        Ok(())
    }

    // --- Shared gallery ---

    pub fn list_shared_sheets(&self) -> Vec<SharedSheet> {
        self.read_list(keys::SHARED_SHEETS)
    }

    /// Replaces the gallery contents, e.g. from a fixture file.
    pub fn seed_shared_sheets(&self, sheets: &[SharedSheet]) -> Result<(), SheetwiseError> {
        self.write_json(keys::SHARED_SHEETS, &sheets)
    }

    // --- Serialization boundary ---

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "store read failed, treating as absent");
                None
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "malformed record, treating as absent");
                None
            }
        }
    }

    /// Reads a JSON array, keeping the entries that deserialize.
    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(entries) = self.read_json::<Vec<serde_json::Value>>(key) else {
            return Vec::new();
        };
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(key, index, error = %e, "skipping malformed entry");
                    None
                }
            })
            .collect()
    }

    /// Reads a collection for rewriting. Unlike the read path this refuses
    /// to treat an unreadable document as empty, since writing it back would
    /// drop every record in it.
    fn read_entries_for_write(
        &self,
        key: &str,
    ) -> Result<Vec<serde_json::Value>, SheetwiseError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| {
            warn!(key, error = %e, "refusing to rewrite malformed collection");
            SheetwiseError::Storage {
                source: Box::new(e),
            }
        })
    }

    /// Replaces the first entry accepted by `matches`, or appends. Returns the
    /// collection size after the write.
    fn upsert_entry<T: Serialize>(
        &self,
        key: &str,
        item: &T,
        matches: impl Fn(&serde_json::Value) -> bool,
    ) -> Result<usize, SheetwiseError> {
        let mut entries = self.read_entries_for_write(key)?;
        let entry = to_entry(item)?;
        match entries.iter_mut().find(|e| matches(e)) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
        self.write_json(key, &entries)?;
        Ok(entries.len())
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), SheetwiseError> {
        let raw = serde_json::to_string(value).map_err(|e| SheetwiseError::Storage {
            source: Box::new(e),
        })?;
        self.backend.set(key, &raw)
    }
}

fn to_entry<T: Serialize>(item: &T) -> Result<serde_json::Value, SheetwiseError> {
    serde_json::to_value(item).map_err(|e| SheetwiseError::Storage {
        source: Box::new(e),
    })
}

fn entry_id(entry: &serde_json::Value) -> Option<&str> {
    entry.get("id").and_then(serde_json::Value::as_str)
}
