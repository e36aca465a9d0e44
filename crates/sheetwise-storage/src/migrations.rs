// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema for the SQLite backend.
//!
//! The backend needs a single `kv_store(key, value, updated_at)` table; each
//! store key (`sheetwise.users`, `sheetwise.sheets`, ...) is one row holding a
//! JSON document. The table is created by the embedded `V1__kv_store.sql` and
//! later changes go in as new versioned files under `migrations/`.

use sheetwise_core::SheetwiseError;
use tracing::{debug, info};

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Brings the `kv_store` schema up to date. Returns how many migrations ran,
/// which is zero for a database that was already current.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<usize, SheetwiseError> {
    let report = embedded::migrations::runner()
        .run(conn)
        .map_err(|e| SheetwiseError::Storage {
            source: Box::new(e),
        })?;

    let applied = report.applied_migrations();
    for migration in applied {
        info!(%migration, "applied kv_store migration");
    }
    if applied.is_empty() {
        debug!("kv_store schema already current");
    }
    Ok(applied.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kv_columns(conn: &rusqlite::Connection) -> Vec<String> {
        let mut stmt = conn.prepare("PRAGMA table_info(kv_store)").unwrap();
        stmt.query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn fresh_database_gets_kv_store_once() {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        assert_eq!(run_migrations(&mut conn).unwrap(), 1);
        assert_eq!(kv_columns(&conn), vec!["key", "value", "updated_at"]);

        assert_eq!(run_migrations(&mut conn).unwrap(), 0);
    }

    #[test]
    fn updated_at_is_filled_by_default() {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES ('sheetwise.users', '[]')",
            [],
        )
        .unwrap();
        let stamp: String = conn
            .query_row(
                "SELECT updated_at FROM kv_store WHERE key = 'sheetwise.users'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(stamp.ends_with('Z'));
    }
}
