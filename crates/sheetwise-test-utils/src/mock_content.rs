// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock content service for deterministic testing.
//!
//! `MockContentService` implements `ContentAdapter` with per-operation FIFO
//! queues of scripted results. When a queue is empty a default built from
//! [`fixtures`](crate::fixtures) is returned. Every call is captured so tests
//! can assert on what was sent.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use sheetwise_core::traits::{ContentAdapter, PluginAdapter};
use sheetwise_core::types::{
    AdapterType, HealthStatus, QuizFeedback, QuizQuestion, SourceDocument, StudyData, UserProfile,
};
use sheetwise_core::SheetwiseError;

use crate::fixtures;

type Queue<T> = Arc<Mutex<VecDeque<Result<T, SheetwiseError>>>>;

/// One captured call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentCall {
    Extract { file_name: String, subject: String },
    GenerateQuiz { sheet_id: String, weak_concept_ids: Vec<String> },
    Grade { question_id: String, answer: String },
    Tutor { term: String, question: String },
}

#[derive(Default)]
pub struct MockContentService {
    sheets: Queue<StudyData>,
    quizzes: Queue<Vec<QuizQuestion>>,
    verdicts: Queue<QuizFeedback>,
    tutor_replies: Queue<String>,
    calls: Arc<Mutex<Vec<ContentCall>>>,
}

impl MockContentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_sheet(&self, result: Result<StudyData, SheetwiseError>) {
        self.sheets.lock().await.push_back(result);
    }

    pub async fn push_quiz(&self, result: Result<Vec<QuizQuestion>, SheetwiseError>) {
        self.quizzes.lock().await.push_back(result);
    }

    pub async fn push_verdict(&self, result: Result<QuizFeedback, SheetwiseError>) {
        self.verdicts.lock().await.push_back(result);
    }

    pub async fn push_tutor_reply(&self, result: Result<String, SheetwiseError>) {
        self.tutor_replies.lock().await.push_back(result);
    }

    /// Calls received so far, oldest first.
    pub async fn calls(&self) -> Vec<ContentCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: ContentCall) {
        debug!(?call, "mock content call");
        self.calls.lock().await.push(call);
    }
}

async fn next<T>(queue: &Queue<T>, default: impl FnOnce() -> T) -> Result<T, SheetwiseError> {
    queue.lock().await.pop_front().unwrap_or_else(|| Ok(default()))
}

#[async_trait]
impl PluginAdapter for MockContentService {
    fn name(&self) -> &str {
        "mock-content"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Content
    }

    async fn health_check(&self) -> Result<HealthStatus, SheetwiseError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl ContentAdapter for MockContentService {
    async fn extract(
        &self,
        document: &SourceDocument,
        profile: &UserProfile,
    ) -> Result<StudyData, SheetwiseError> {
        self.record(ContentCall::Extract {
            file_name: document.file_name.clone(),
            subject: profile.subject.clone(),
        })
        .await;
        next(&self.sheets, fixtures::sample_sheet).await
    }

    async fn generate_quiz(
        &self,
        sheet: &StudyData,
        weak_concept_ids: &[String],
    ) -> Result<Vec<QuizQuestion>, SheetwiseError> {
        self.record(ContentCall::GenerateQuiz {
            sheet_id: sheet.id.clone(),
            weak_concept_ids: weak_concept_ids.to_vec(),
        })
        .await;
        next(&self.quizzes, fixtures::sample_questions).await
    }

    async fn grade(
        &self,
        question: &QuizQuestion,
        answer: &str,
    ) -> Result<QuizFeedback, SheetwiseError> {
        self.record(ContentCall::Grade {
            question_id: question.id.clone(),
            answer: answer.to_string(),
        })
        .await;
        let correct = answer.eq_ignore_ascii_case(&question.correct_answer);
        next(&self.verdicts, || fixtures::verdict(correct)).await
    }

    async fn tutor(
        &self,
        term: &str,
        _explanation: &str,
        question: &str,
    ) -> Result<String, SheetwiseError> {
        self.record(ContentCall::Tutor {
            term: term.to_string(),
            question: question.to_string(),
        })
        .await;
        next(&self.tutor_replies, || format!("About {term}: mock explanation.")).await
    }
}
