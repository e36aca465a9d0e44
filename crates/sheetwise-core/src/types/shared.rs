// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared sheets shown in the read-only community gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::sheet::StudyData;
use crate::types::user::AcademicLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetComment {
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A published sheet with ownership metadata and community feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSheet {
    pub id: String,
    pub sheet: StudyData,
    pub owner_id: String,
    pub owner_name: String,
    pub subject: String,
    pub level: AcademicLevel,
    /// Average community rating, 0 to 5.
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub comments: Vec<SheetComment>,
    pub published_at: DateTime<Utc>,
}

impl SharedSheet {
    /// Case-insensitive subject match used by the gallery filter.
    pub fn matches_subject(&self, subject: &str) -> bool {
        self.subject.eq_ignore_ascii_case(subject.trim())
    }
}
