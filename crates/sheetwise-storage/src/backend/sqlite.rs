// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite backend: one `kv_store` table in a local database file.
//!
//! A single connection sits behind a mutex, so every read and write is
//! serialized. Do NOT open a second connection for writes.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use sheetwise_core::{KeyValueBackend, SheetwiseError};

use crate::migrations;

pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    /// Opens (or creates) the database at `path` and runs migrations.
    ///
    /// Parent directories are created when missing.
    pub fn open(path: &str) -> Result<Self, SheetwiseError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| SheetwiseError::Storage {
                source: Box::new(e),
            })?;
        }
        let conn = Connection::open(path).map_err(map_sqlite_err)?;
        Self::with_connection(conn)
    }

    /// An in-memory database, for tests.
    pub fn open_in_memory() -> Result<Self, SheetwiseError> {
        let conn = Connection::open_in_memory().map_err(map_sqlite_err)?;
        Self::with_connection(conn)
    }

    fn with_connection(mut conn: Connection) -> Result<Self, SheetwiseError> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )
        .map_err(map_sqlite_err)?;
        migrations::run_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, SheetwiseError> {
        self.conn.lock().map_err(|_| SheetwiseError::Storage {
            source: "sqlite connection lock poisoned".into(),
        })
    }
}

/// Wraps a rusqlite error into [`SheetwiseError::Storage`].
pub fn map_sqlite_err(e: rusqlite::Error) -> SheetwiseError {
    SheetwiseError::Storage {
        source: Box::new(e),
    }
}

impl KeyValueBackend for SqliteBackend {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn get(&self, key: &str) -> Result<Option<String>, SheetwiseError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(map_sqlite_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SheetwiseError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
            params![key, value],
        )
        .map_err(map_sqlite_err)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SheetwiseError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map_err(map_sqlite_err)?;
        Ok(())
    }
}
