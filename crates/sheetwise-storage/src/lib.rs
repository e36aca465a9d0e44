// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence layer for Sheetwise.
//!
//! A [`Store`] serializes users, the current-session pointer, saved sheets and
//! the shared gallery to JSON under fixed keys of an injected
//! [`KeyValueBackend`](sheetwise_core::KeyValueBackend). Two backends ship here:
//! an in-memory map and a SQLite table with embedded migrations.

pub mod backend;
pub mod keys;
pub mod migrations;
pub mod store;

pub use backend::{open_backend, MemoryBackend, SqliteBackend};
pub use store::Store;
