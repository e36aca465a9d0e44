// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value backend trait for persistence.

use crate::error::SheetwiseError;

/// A synchronous, string-keyed, string-valued storage medium.
///
/// Backends know nothing about records; serialization happens one layer up
/// in the store. No transactions, no expiry.
pub trait KeyValueBackend: Send + Sync {
    /// Returns the backend's name for logs and status output.
    fn name(&self) -> &str;

    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, SheetwiseError>;

    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), SheetwiseError>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), SheetwiseError>;
}
