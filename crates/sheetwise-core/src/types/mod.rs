// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Sheetwise crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod document;
pub mod quiz;
pub mod shared;
pub mod sheet;
pub mod user;

pub use document::SourceDocument;
pub use quiz::{QuestionKind, QuizFeedback, QuizMode, QuizQuestion};
pub use shared::{SharedSheet, SheetComment};
pub use sheet::{
    Concept, DanglingReference, Equation, FlowNode, Flowchart, Law, Mnemonic, PlanDay,
    StudyData, TestLikelihood, VisualAid,
};
pub use user::{
    AcademicLevel, LearningStyle, MAX_MASTERY, MasteryMap, MnemonicStyle, SessionRecord, User,
    UserProfile,
};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Content,
    Storage,
}
