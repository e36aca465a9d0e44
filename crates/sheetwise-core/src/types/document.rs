// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Uploaded source documents and MIME intake rules.

use std::path::Path;

use crate::error::SheetwiseError;

/// Extension to MIME type table for accepted uploads.
const MIME_BY_EXTENSION: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("gif", "image/gif"),
];

/// A document (PDF or image) handed to extraction.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for SourceDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceDocument")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl SourceDocument {
    /// Builds a document, rejecting empty payloads and unsupported MIME types.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, SheetwiseError> {
        let file_name = file_name.into();
        let mime_type = mime_type.into();
        if !is_supported_mime(&mime_type) {
            return Err(SheetwiseError::Validation(format!(
                "unsupported file type `{mime_type}` for {file_name}: upload a PDF or an image"
            )));
        }
        if bytes.is_empty() {
            return Err(SheetwiseError::Validation(format!("{file_name} is empty")));
        }
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Reads a document from disk, inferring its MIME type from the extension.
    ///
    /// Files larger than `max_bytes` are rejected before being read in full.
    pub fn from_path(path: &Path, max_bytes: u64) -> Result<Self, SheetwiseError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mime_type = mime_from_path(path).ok_or_else(|| {
            SheetwiseError::Validation(format!(
                "cannot tell the file type of {file_name}: expected .pdf, .png, .jpg, .jpeg, .webp, .heic, .heif or .gif"
            ))
        })?;

        let meta = std::fs::metadata(path).map_err(|e| {
            SheetwiseError::Validation(format!("cannot read {}: {e}", path.display()))
        })?;
        if meta.len() > max_bytes {
            return Err(SheetwiseError::Validation(format!(
                "{file_name} is {} bytes, larger than the {max_bytes} byte upload limit",
                meta.len()
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            SheetwiseError::Validation(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::new(file_name, mime_type, bytes)
    }
}

/// Infers an accepted MIME type from a file extension.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    MIME_BY_EXTENSION
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// PDFs and any `image/*` type are accepted.
pub fn is_supported_mime(mime: &str) -> bool {
    mime == "application/pdf" || mime.strip_prefix("image/").is_some_and(|s| !s.is_empty())
}
