// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content adapter trait for the external generative-AI service.

use async_trait::async_trait;

use crate::error::SheetwiseError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{QuizFeedback, QuizQuestion, SourceDocument, StudyData, UserProfile};

/// Reply used when tutoring yields no usable text.
pub const TUTOR_FALLBACK: &str =
    "Sorry, I couldn't come up with an explanation for that. Try rephrasing your question.";

/// Adapter for the service that extracts, quizzes, grades and tutors.
///
/// Every call is a single request/response. Implementations do not retry:
/// a failure is surfaced once to the caller.
#[async_trait]
pub trait ContentAdapter: PluginAdapter {
    /// Extracts a study sheet from a document, tailored to the profile.
    async fn extract(
        &self,
        document: &SourceDocument,
        profile: &UserProfile,
    ) -> Result<StudyData, SheetwiseError>;

    /// Generates a quiz for the sheet, emphasising the given weak concepts.
    async fn generate_quiz(
        &self,
        sheet: &StudyData,
        weak_concept_ids: &[String],
    ) -> Result<Vec<QuizQuestion>, SheetwiseError>;

    /// Grades a free-text answer to a question.
    async fn grade(
        &self,
        question: &QuizQuestion,
        answer: &str,
    ) -> Result<QuizFeedback, SheetwiseError>;

    /// Answers a question about a concept. Returns [`TUTOR_FALLBACK`] when
    /// the service produced no usable text.
    async fn tutor(
        &self,
        term: &str,
        explanation: &str,
        question: &str,
    ) -> Result<String, SheetwiseError>;
}
