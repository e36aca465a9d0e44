// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-concept mastery rule.
//!
//! Each graded answer moves the concept's mastery by a fixed step: up by
//! [`CORRECT_GAIN`] on a correct answer, down by [`INCORRECT_PENALTY`] on a
//! wrong one, always clamped to `0..=100`. There is no decay and no weighting
//! by question type.

use chrono::{DateTime, Utc};
use sheetwise_core::types::{MAX_MASTERY, MasteryMap, QuizMode, SessionRecord, StudyData, User};
use tracing::debug;

use crate::session::QuizSummary;

/// Mastery points gained for a correct answer.
pub const CORRECT_GAIN: u8 = 10;

/// Mastery points lost for an incorrect answer.
pub const INCORRECT_PENALTY: u8 = 5;

/// Concepts below this mastery are emphasised in generated quizzes.
pub const DEFAULT_WEAK_THRESHOLD: u8 = 50;

/// One graded answer, attributed to the concept its question tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub concept_id: String,
    pub is_correct: bool,
}

impl Outcome {
    pub fn new(concept_id: impl Into<String>, is_correct: bool) -> Self {
        Self {
            concept_id: concept_id.into(),
            is_correct,
        }
    }
}

/// Result of folding a run's outcomes into a mastery map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Previous map with the touched concepts adjusted.
    pub mastery: MasteryMap,
    /// Number of correct outcomes.
    pub score: u32,
    /// Number of outcomes.
    pub total: u32,
}

/// Applies one answer to a mastery value.
pub fn adjust(current: u8, is_correct: bool) -> u8 {
    let current = current.min(MAX_MASTERY);
    if is_correct {
        current.saturating_add(CORRECT_GAIN).min(MAX_MASTERY)
    } else {
        current.saturating_sub(INCORRECT_PENALTY)
    }
}

/// Folds `outcomes` in order over `previous`.
///
/// Concepts missing from the map start at zero. Entries for concepts the run
/// did not touch are carried over unchanged.
pub fn apply_outcomes(previous: &MasteryMap, outcomes: &[Outcome]) -> SessionOutcome {
    let mut mastery = previous.clone();
    let mut score = 0;
    for outcome in outcomes {
        let entry = mastery.entry(outcome.concept_id.clone()).or_insert(0);
        *entry = adjust(*entry, outcome.is_correct);
        if outcome.is_correct {
            score += 1;
        }
    }
    SessionOutcome {
        mastery,
        score,
        total: outcomes.len() as u32,
    }
}

/// Applies a finished run to the user and appends it to their history.
pub fn record_session(
    user: &mut User,
    sheet_id: &str,
    mode: QuizMode,
    outcomes: &[Outcome],
    timestamp: DateTime<Utc>,
) -> SessionRecord {
    record_with_total(user, sheet_id, mode, outcomes, outcomes.len() as u32, timestamp)
}

/// Like [`record_session`], but questions the run never reached still count
/// toward the record's total.
pub fn record_summary(
    user: &mut User,
    summary: &QuizSummary,
    timestamp: DateTime<Utc>,
) -> SessionRecord {
    record_with_total(
        user,
        &summary.sheet_id,
        summary.mode,
        &summary.outcomes,
        summary.total(),
        timestamp,
    )
}

fn record_with_total(
    user: &mut User,
    sheet_id: &str,
    mode: QuizMode,
    outcomes: &[Outcome],
    total: u32,
    timestamp: DateTime<Utc>,
) -> SessionRecord {
    let applied = apply_outcomes(&user.mastery, outcomes);
    user.mastery = applied.mastery;

    let record = SessionRecord::new(timestamp, applied.score, total, sheet_id, mode);
    user.history.push(record.clone());
    debug!(
        user_id = %user.id,
        sheet_id,
        score = record.score,
        total = record.total,
        %mode,
        "quiz session recorded"
    );
    record
}

/// Ids of the sheet's concepts whose mastery is below `threshold`.
///
/// Lowest mastery first; ties keep the sheet's concept order.
pub fn weak_concepts(sheet: &StudyData, mastery: &MasteryMap, threshold: u8) -> Vec<String> {
    let mut weak: Vec<(u8, &str)> = sheet
        .concepts
        .iter()
        .map(|c| (mastery.get(&c.id).copied().unwrap_or(0), c.id.as_str()))
        .filter(|(level, _)| *level < threshold)
        .collect();
    // stable sort keeps sheet order within a level
    weak.sort_by_key(|(level, _)| *level);
    weak.into_iter().map(|(_, id)| id.to_string()).collect()
}
