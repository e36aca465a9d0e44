// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared-sheet gallery: fixture seeding and browsing.

use std::path::Path;

use sheetwise_core::SheetwiseError;
use sheetwise_core::types::SharedSheet;
use sheetwise_storage::Store;
use tracing::info;

/// Reads a JSON array of shared sheets from `path`.
pub fn read_seed_file(path: &Path) -> Result<Vec<SharedSheet>, SheetwiseError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        SheetwiseError::Config(format!("cannot read gallery seed file {}: {e}", path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        SheetwiseError::Config(format!("malformed gallery seed file {}: {e}", path.display()))
    })
}

/// Loads the seed file into an empty gallery. Returns how many sheets were
/// written; an already populated gallery is left alone.
pub fn seed_if_empty(store: &Store, path: &Path) -> Result<usize, SheetwiseError> {
    if !store.list_shared_sheets().is_empty() {
        return Ok(0);
    }
    let sheets = read_seed_file(path)?;
    store.seed_shared_sheets(&sheets)?;
    info!(count = sheets.len(), path = %path.display(), "gallery seeded");
    Ok(sheets.len())
}

/// Gallery entries, optionally filtered by subject, best rated first.
pub fn browse(store: &Store, subject: Option<&str>) -> Vec<SharedSheet> {
    let mut sheets: Vec<SharedSheet> = store
        .list_shared_sheets()
        .into_iter()
        .filter(|s| subject.is_none_or(|subject| s.matches_subject(subject)))
        .collect();
    sheets.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sheets
}
