// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process backend.

use std::collections::HashMap;
use std::sync::RwLock;

use sheetwise_core::{KeyValueBackend, SheetwiseError};

/// A `HashMap` behind a lock. Used in tests and with `storage.backend = "memory"`.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> SheetwiseError {
    SheetwiseError::Storage {
        source: "memory backend lock poisoned".into(),
    }
}

impl KeyValueBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>, SheetwiseError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SheetwiseError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SheetwiseError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}
