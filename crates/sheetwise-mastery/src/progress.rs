// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Progress statistics derived from a user's history and mastery map.

use sheetwise_core::types::{StudyData, User};

/// Mastery at or above which a concept counts as mastered.
pub const MASTERED_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// Sessions taken (on the sheet, when one was given).
    pub sessions: usize,
    /// Correct answers over all questions, as a percentage.
    pub accuracy: f64,
    /// Best single-session percentage, if any session exists.
    pub best_percent: Option<u32>,
    /// Mean mastery over the concepts in scope; untracked concepts count as 0.
    pub average_mastery: f64,
    pub mastered: usize,
    /// Tracked but below [`MASTERED_THRESHOLD`].
    pub learning: usize,
    /// In scope but absent from the mastery map.
    pub untouched: usize,
}

impl ProgressReport {
    /// Builds the report over one sheet, or over everything the user has done.
    ///
    /// With a sheet, history is filtered by sheet id and the concepts in
    /// scope are the sheet's. Without one, all history counts and the
    /// concepts in scope are every tracked concept.
    pub fn build(user: &User, sheet: Option<&StudyData>) -> Self {
        let history: Vec<_> = user
            .history
            .iter()
            .filter(|r| sheet.is_none_or(|s| r.sheet_id == s.id))
            .collect();

        let (score, total) = history
            .iter()
            .fold((0u64, 0u64), |(s, t), r| (s + u64::from(r.score), t + u64::from(r.total)));
        let accuracy = if total == 0 {
            0.0
        } else {
            score as f64 * 100.0 / total as f64
        };
        let best_percent = history.iter().map(|r| r.percent()).max();

        let levels: Vec<Option<u8>> = match sheet {
            Some(sheet) => sheet
                .concepts
                .iter()
                .map(|c| user.mastery.get(&c.id).copied())
                .collect(),
            None => user.mastery.values().map(|v| Some(*v)).collect(),
        };

        let mut mastered = 0;
        let mut learning = 0;
        let mut untouched = 0;
        let mut sum = 0u64;
        for level in &levels {
            match level {
                Some(v) if *v >= MASTERED_THRESHOLD => mastered += 1,
                Some(_) => learning += 1,
                None => untouched += 1,
            }
            sum += u64::from(level.unwrap_or(0));
        }
        let average_mastery = if levels.is_empty() {
            0.0
        } else {
            sum as f64 / levels.len() as f64
        };

        Self {
            sessions: history.len(),
            accuracy,
            best_percent,
            average_mastery,
            mastered,
            learning,
            untouched,
        }
    }

    /// Concepts in scope.
    pub fn concept_count(&self) -> usize {
        self.mastered + self.learning + self.untouched
    }
}
