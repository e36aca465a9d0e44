// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The study context and the operations a learner performs.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use sheetwise_config::SheetwiseConfig;
use sheetwise_config::model::QuizConfig;
use sheetwise_core::types::{
    QuizMode, SessionRecord, SharedSheet, SourceDocument, StudyData, User,
};
use sheetwise_core::{ContentAdapter, PluginAdapter, SheetwiseError};
use sheetwise_mastery::{
    AnsweredQuestion, ExamClock, ProgressReport, QuizSession, record_summary, weak_concepts,
};
use sheetwise_storage::{Store, open_backend};
use tracing::{debug, info, warn};

use crate::gallery;
use crate::profile::ProfileEdit;

/// Quiz and upload limits taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    pub exam_time_limit_secs: u64,
    pub weak_threshold: u8,
    pub max_upload_bytes: u64,
}

impl QuizSettings {
    pub fn from_config(config: &SheetwiseConfig) -> Self {
        Self::from_parts(&config.quiz, config.upload.max_bytes)
    }

    fn from_parts(quiz: &QuizConfig, max_upload_bytes: u64) -> Self {
        Self {
            exam_time_limit_secs: quiz.exam_time_limit_secs,
            weak_threshold: quiz.weak_threshold,
            max_upload_bytes,
        }
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self::from_config(&SheetwiseConfig::default())
    }
}

/// Everything a study operation needs, passed explicitly.
#[derive(Clone)]
pub struct StudyContext {
    store: Store,
    content: Arc<dyn ContentAdapter>,
    settings: QuizSettings,
}

impl std::fmt::Debug for StudyContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudyContext")
            .field("store", &self.store)
            .field("content", &self.content.name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl StudyContext {
    pub fn new(store: Store, content: Arc<dyn ContentAdapter>, settings: QuizSettings) -> Self {
        Self {
            store,
            content,
            settings,
        }
    }

    /// Opens the configured backend and seeds the gallery from the fixture
    /// file, if one is configured and the gallery is empty.
    pub fn from_config(
        config: &SheetwiseConfig,
        content: Arc<dyn ContentAdapter>,
    ) -> Result<Self, SheetwiseError> {
        let store = Store::new(open_backend(&config.storage)?);
        if let Some(seed) = &config.gallery.seed_file {
            gallery::seed_if_empty(&store, Path::new(seed))?;
        }
        info!(
            backend = store.backend_name(),
            content = content.name(),
            "study context ready"
        );
        Ok(Self::new(store, content, QuizSettings::from_config(config)))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn content(&self) -> &dyn ContentAdapter {
        self.content.as_ref()
    }

    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    // --- Session ---

    /// Signs in by exact name, creating the user on first sign-in.
    pub fn sign_in(&self, name: &str) -> Result<User, SheetwiseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SheetwiseError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        let user = match self.store.find_user_by_name(name) {
            Some(user) => user,
            None => {
                let user = User::new(uuid::Uuid::new_v4().to_string(), name);
                self.store.save_user(&user)?;
                info!(user_id = %user.id, "new user created");
                user
            }
        };
        self.store.set_current_session(Some(&user))?;
        debug!(user_id = %user.id, "signed in");
        Ok(user)
    }

    pub fn sign_out(&self) -> Result<(), SheetwiseError> {
        self.store.set_current_session(None)
    }

    /// The signed-in user, preferring the user-list record over the copy
    /// held by the session pointer.
    pub fn current_user(&self) -> Option<User> {
        let pointer = self.store.current_session()?;
        let fresh = if pointer.id.is_empty() {
            self.store.find_user_by_name(&pointer.name)
        } else {
            self.store.get_user(&pointer.id)
        };
        Some(fresh.unwrap_or(pointer))
    }

    /// Like [`current_user`](Self::current_user), but a missing session is an error.
    pub fn require_user(&self) -> Result<User, SheetwiseError> {
        self.current_user().ok_or(SheetwiseError::NoActiveSession)
    }

    pub fn update_profile(&self, user: &mut User, edit: &ProfileEdit) -> Result<(), SheetwiseError> {
        edit.apply(&mut user.profile)?;
        self.persist_user(user)
    }

    // --- Sheets ---

    /// Reads an upload from disk, enforcing type and size limits.
    pub fn load_document(&self, path: &Path) -> Result<SourceDocument, SheetwiseError> {
        SourceDocument::from_path(path, self.settings.max_upload_bytes)
    }

    /// Extracts a sheet from `document`. When `persist` is set the sheet is
    /// saved under a freshly minted id and added to the user's library; the
    /// id the service returned is not trusted to be unique.
    pub async fn import_document(
        &self,
        user: &mut User,
        document: &SourceDocument,
        persist: bool,
    ) -> Result<StudyData, SheetwiseError> {
        let mut sheet = self.content.extract(document, &user.profile).await?;
        if persist {
            let extracted_id = std::mem::replace(&mut sheet.id, uuid::Uuid::new_v4().to_string());
            debug!(%extracted_id, sheet_id = %sheet.id, "assigned library id");
            self.store.save_sheet(&sheet)?;
            if user.add_sheet(&sheet.id) {
                self.persist_user(user)?;
            }
            info!(sheet_id = %sheet.id, user_id = %user.id, "sheet saved to library");
        }
        Ok(sheet)
    }

    pub fn sheet(&self, id: &str) -> Result<StudyData, SheetwiseError> {
        self.store
            .get_sheet(id)
            .ok_or_else(|| SheetwiseError::not_found("sheet", id))
    }

    /// The user's saved sheets, in the order they were added.
    pub fn library(&self, user: &User) -> Vec<StudyData> {
        let sheets = self.store.list_sheets();
        user.sheet_ids
            .iter()
            .filter_map(|id| {
                let found = sheets.iter().find(|s| &s.id == id).cloned();
                if found.is_none() {
                    warn!(sheet_id = %id, "library entry has no stored sheet");
                }
                found
            })
            .collect()
    }

    // --- Quiz ---

    /// Generates questions for `sheet`, weighted toward the user's weak
    /// concepts, and opens a session. Exam mode starts the clock.
    pub async fn start_quiz(
        &self,
        user: &User,
        sheet: &StudyData,
        mode: QuizMode,
    ) -> Result<QuizSession, SheetwiseError> {
        let weak = weak_concepts(sheet, &user.mastery, self.settings.weak_threshold);
        debug!(sheet_id = %sheet.id, weak = weak.len(), %mode, "generating quiz");

        let questions = self.content.generate_quiz(sheet, &weak).await?;
        let session = QuizSession::new(sheet.id.clone(), mode, questions)?;
        Ok(match mode {
            QuizMode::Exam => {
                session.with_clock(ExamClock::from_secs(self.settings.exam_time_limit_secs))
            }
            QuizMode::Practice => session,
        })
    }

    /// Grades and records an answer. On failure the session is unchanged.
    pub async fn submit_answer(
        &self,
        session: &mut QuizSession,
        answer: &str,
    ) -> Result<AnsweredQuestion, SheetwiseError> {
        let content = Arc::clone(&self.content);
        session
            .submit(answer, |question, answer| async move {
                content.grade(&question, &answer).await
            })
            .await
            .cloned()
    }

    /// Folds the finished session into the user's mastery and history and
    /// saves the user.
    pub fn complete_quiz(
        &self,
        user: &mut User,
        session: QuizSession,
    ) -> Result<SessionRecord, SheetwiseError> {
        let summary = session.finish();
        let record = record_summary(user, &summary, Utc::now());
        self.persist_user(user)?;
        info!(
            user_id = %user.id,
            sheet_id = %record.sheet_id,
            score = record.score,
            total = record.total,
            timed_out = summary.timed_out,
            "quiz completed"
        );
        Ok(record)
    }

    // --- Tutor ---

    /// Asks the tutor about a concept, found by id or case-insensitive term.
    pub async fn ask_tutor(
        &self,
        sheet: &StudyData,
        concept_ref: &str,
        question: &str,
    ) -> Result<String, SheetwiseError> {
        if question.trim().is_empty() {
            return Err(SheetwiseError::Validation(
                "question must not be empty".to_string(),
            ));
        }
        let concept = sheet
            .find_concept(concept_ref)
            .ok_or_else(|| SheetwiseError::not_found("concept", concept_ref))?;
        self.content
            .tutor(&concept.term, &concept.explanation, question.trim())
            .await
    }

    // --- Read-only views ---

    pub fn progress(&self, user: &User, sheet: Option<&StudyData>) -> ProgressReport {
        ProgressReport::build(user, sheet)
    }

    pub fn gallery(&self, subject: Option<&str>) -> Vec<SharedSheet> {
        gallery::browse(&self.store, subject)
    }

    /// Saves the user and points the session at the saved record.
    fn persist_user(&self, user: &User) -> Result<(), SheetwiseError> {
        self.store.save_user(user)?;
        self.store.set_current_session(Some(user))
    }
}
