// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mastery tracking for the Sheetwise study aid.
//!
//! This crate provides:
//! - **Tracker**: the +10 / -5 per-concept mastery rule and session recording
//! - **Quiz sessions**: the ordered question/answer state machine for one run
//! - **Exam clock**: the countdown that force-completes a timed exam
//! - **Progress**: per-user and per-sheet statistics built from history

pub mod clock;
pub mod progress;
pub mod session;
pub mod tracker;

pub use clock::ExamClock;
pub use progress::{ProgressReport, MASTERED_THRESHOLD};
pub use session::{AnsweredQuestion, QuizSession, QuizSummary};
pub use tracker::{
    adjust, apply_outcomes, record_session, record_summary, weak_concepts, Outcome,
    SessionOutcome, CORRECT_GAIN, DEFAULT_WEAK_THRESHOLD, INCORRECT_PENALTY,
};
