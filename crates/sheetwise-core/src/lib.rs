// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Sheetwise.
//!
//! This crate provides the domain types (users, study sheets, quiz questions),
//! the shared error type, and the adapter traits the rest of the workspace
//! plugs into: the content service and the key-value backend.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SheetwiseError;
pub use types::{AdapterType, HealthStatus};

pub use traits::{ContentAdapter, KeyValueBackend, PluginAdapter, TUTOR_FALLBACK};
