// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end study flows.
//!
//! `TestHarness` assembles a [`StudyContext`] over an in-memory store and a
//! [`MockContentService`], optionally pre-loaded with gallery sheets and
//! scripted content replies.

use std::sync::Arc;

use sheetwise_config::SheetwiseConfig;
use sheetwise_core::types::{QuizFeedback, QuizQuestion, SharedSheet, StudyData};
use sheetwise_core::{KeyValueBackend, SheetwiseError};
use sheetwise_storage::{MemoryBackend, Store};
use sheetwise_study::{QuizSettings, StudyContext};

use crate::mock_content::MockContentService;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    config: SheetwiseConfig,
    sheets: Vec<Result<StudyData, SheetwiseError>>,
    quizzes: Vec<Result<Vec<QuizQuestion>, SheetwiseError>>,
    verdicts: Vec<Result<QuizFeedback, SheetwiseError>>,
    gallery: Vec<SharedSheet>,
    backend: Option<Arc<dyn KeyValueBackend>>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            config: SheetwiseConfig::default(),
            sheets: Vec::new(),
            quizzes: Vec::new(),
            verdicts: Vec::new(),
            gallery: Vec::new(),
            backend: None,
        }
    }

    /// Queue extraction results.
    pub fn with_sheets(mut self, sheets: Vec<Result<StudyData, SheetwiseError>>) -> Self {
        self.sheets = sheets;
        self
    }

    /// Queue question-generation results.
    pub fn with_quizzes(mut self, quizzes: Vec<Result<Vec<QuizQuestion>, SheetwiseError>>) -> Self {
        self.quizzes = quizzes;
        self
    }

    /// Queue grading results.
    pub fn with_verdicts(mut self, verdicts: Vec<Result<QuizFeedback, SheetwiseError>>) -> Self {
        self.verdicts = verdicts;
        self
    }

    /// Pre-populate the shared gallery.
    pub fn with_gallery(mut self, sheets: Vec<SharedSheet>) -> Self {
        self.gallery = sheets;
        self
    }

    /// Override the configuration the context is built from.
    pub fn with_config(mut self, config: SheetwiseConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific backend instead of a fresh memory backend.
    pub fn with_backend(mut self, backend: Arc<dyn KeyValueBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub async fn build(self) -> Result<TestHarness, SheetwiseError> {
        let backend: Arc<dyn KeyValueBackend> = match self.backend {
            Some(backend) => backend,
            None => Arc::new(MemoryBackend::new()),
        };
        let store = Store::new(backend);
        if !self.gallery.is_empty() {
            store.seed_shared_sheets(&self.gallery)?;
        }

        let content = Arc::new(MockContentService::new());
        for sheet in self.sheets {
            content.push_sheet(sheet).await;
        }
        for quiz in self.quizzes {
            content.push_quiz(quiz).await;
        }
        for verdict in self.verdicts {
            content.push_verdict(verdict).await;
        }

        let context = StudyContext::new(
            store.clone(),
            content.clone(),
            QuizSettings::from_config(&self.config),
        );

        Ok(TestHarness {
            context,
            content,
            store,
            config: self.config,
        })
    }
}

/// A complete test environment with a mock content service and memory storage.
pub struct TestHarness {
    pub context: StudyContext,
    /// The mock behind `context`, for scripting and call assertions.
    pub content: Arc<MockContentService>,
    pub store: Store,
    pub config: SheetwiseConfig,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// A harness with defaults everywhere.
    pub async fn new() -> Result<Self, SheetwiseError> {
        Self::builder().build().await
    }
}
