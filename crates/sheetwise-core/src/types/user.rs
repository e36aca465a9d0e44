// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User records: identity, learning profile, mastery and quiz history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::quiz::QuizMode;

/// Concept id to mastery percentage (0..=100).
pub type MasteryMap = BTreeMap<String, u8>;

/// Upper bound for any mastery value.
pub const MAX_MASTERY: u8 = 100;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum AcademicLevel {
    HighSchool,
    #[default]
    Undergraduate,
    Graduate,
    Professional,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum LearningStyle {
    #[default]
    Visual,
    Auditory,
    ReadingWriting,
    Kinesthetic,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum MnemonicStyle {
    #[default]
    Acronym,
    Story,
    Rhyme,
    Imagery,
}

/// Learning preferences passed to extraction so content fits the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub subject: String,
    #[serde(default)]
    pub level: AcademicLevel,
    #[serde(default)]
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub mnemonic_style: MnemonicStyle,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            subject: "General".to_string(),
            level: AcademicLevel::default(),
            learning_style: LearningStyle::default(),
            mnemonic_style: MnemonicStyle::default(),
        }
    }
}

/// One completed quiz run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub timestamp: DateTime<Utc>,
    pub score: u32,
    pub total: u32,
    pub sheet_id: String,
    #[serde(default)]
    pub mode: QuizMode,
}

impl SessionRecord {
    /// Builds a record. A score above the total is clamped to the total.
    pub fn new(
        timestamp: DateTime<Utc>,
        score: u32,
        total: u32,
        sheet_id: impl Into<String>,
        mode: QuizMode,
    ) -> Self {
        Self {
            timestamp,
            score: score.min(total),
            total,
            sheet_id: sheet_id.into(),
            mode,
        }
    }

    /// Score as a percentage of the total; zero for an empty session.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.score * 100 / self.total
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Empty for legacy records saved before ids were assigned.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub mastery: MasteryMap,
    #[serde(default)]
    pub history: Vec<SessionRecord>,
    #[serde(default)]
    pub sheet_ids: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            profile: UserProfile::default(),
            mastery: MasteryMap::new(),
            history: Vec::new(),
            sheet_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Two records describe the same user when their ids match, or, when
    /// either id is missing, when their names match.
    pub fn same_identity(&self, other: &User) -> bool {
        if self.id.is_empty() || other.id.is_empty() {
            self.name == other.name
        } else {
            self.id == other.id
        }
    }

    /// Mastery for a concept; untracked concepts read as zero.
    pub fn mastery_of(&self, concept_id: &str) -> u8 {
        self.mastery.get(concept_id).copied().unwrap_or(0)
    }

    /// Pulls out-of-range values loaded from storage back into 0..=100.
    pub fn clamp_mastery(&mut self) {
        for value in self.mastery.values_mut() {
            *value = (*value).min(MAX_MASTERY);
        }
    }

    /// Adds a sheet id to the user's library unless it is already there.
    pub fn add_sheet(&mut self, sheet_id: &str) -> bool {
        if self.sheet_ids.iter().any(|id| id == sheet_id) {
            false
        } else {
            self.sheet_ids.push(sheet_id.to_string());
            true
        }
    }
}
