// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`KeyValueBackend`](sheetwise_core::KeyValueBackend) implementations.

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use sheetwise_config::model::{StorageBackendKind, StorageConfig};
use sheetwise_core::{KeyValueBackend, SheetwiseError};
use tracing::debug;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// Opens the backend selected by the storage configuration.
pub fn open_backend(config: &StorageConfig) -> Result<Arc<dyn KeyValueBackend>, SheetwiseError> {
    match config.backend {
        StorageBackendKind::Sqlite => {
            let backend = SqliteBackend::open(&config.database_path)?;
            debug!(path = %config.database_path, "sqlite backend opened");
            Ok(Arc::new(backend))
        }
        StorageBackendKind::Memory => {
            debug!("memory backend opened; nothing will persist past this process");
            Ok(Arc::new(MemoryBackend::new()))
        }
    }
}
