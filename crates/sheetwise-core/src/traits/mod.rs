// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! The content service is reached through [`ContentAdapter`], which extends
//! the [`PluginAdapter`] base trait and uses `#[async_trait]` for dynamic
//! dispatch. Persistence goes through the synchronous [`KeyValueBackend`].

pub mod adapter;
pub mod content;
pub mod kv;

pub use adapter::PluginAdapter;
pub use content::{ContentAdapter, TUTOR_FALLBACK};
pub use kv::KeyValueBackend;
