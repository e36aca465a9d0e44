// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Sheetwise.

use thiserror::Error;

/// The primary error type used across all Sheetwise crates.
#[derive(Debug, Error)]
pub enum SheetwiseError {
    /// Configuration errors (missing API key, invalid header values, bad settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (write failure, quota, serialization of a record).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// External content service errors (HTTP failure, API error, empty reply).
    #[error("content service error: {message}")]
    Content {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The content service replied with JSON that does not match the expected shape.
    #[error("schema mismatch in {context}: {detail}")]
    SchemaMismatch { context: String, detail: String },

    /// User input rejected before any external call was made.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// An operation needed a signed-in user but none is active.
    #[error("no active session -- run `sheetwise login <name>` first")]
    NoActiveSession,

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SheetwiseError {
    /// Shorthand for a [`SheetwiseError::SchemaMismatch`].
    pub fn schema(context: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            context: context.into(),
            detail: detail.into(),
        }
    }

    /// Shorthand for a [`SheetwiseError::NotFound`].
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Whether the error came from the external content service boundary.
    pub fn is_content_failure(&self) -> bool {
        matches!(self, Self::Content { .. } | Self::SchemaMismatch { .. })
    }
}
