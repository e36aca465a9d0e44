// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini content service adapter for Sheetwise.
//!
//! This crate implements [`ContentAdapter`] on top of the Gemini
//! `generateContent` API. Structured calls request JSON constrained by a
//! response schema, then validate the reply before it reaches the caller.

pub mod client;
pub mod prompts;
pub mod schema;
pub mod types;
pub mod validate;

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use sheetwise_config::SheetwiseConfig;
use sheetwise_core::error::SheetwiseError;
use sheetwise_core::traits::{ContentAdapter, PluginAdapter, TUTOR_FALLBACK};
use sheetwise_core::types::{
    AdapterType, HealthStatus, QuizFeedback, QuizQuestion, SourceDocument, StudyData, UserProfile,
};
use tracing::{debug, info, warn};

use crate::client::GeminiClient;
use crate::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

/// Environment variables consulted, in order, when the config has no key.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Content service backed by Gemini.
///
/// API key resolution order: config -> `GEMINI_API_KEY` -> `API_KEY` -> error.
#[derive(Debug, Clone)]
pub struct GeminiContentService {
    client: GeminiClient,
    temperature: f32,
    question_count: usize,
}

impl GeminiContentService {
    /// Creates the service from configuration.
    pub fn new(config: &SheetwiseConfig) -> Result<Self, SheetwiseError> {
        let api_key = resolve_api_key(config.gemini.api_key.as_deref(), |var| {
            std::env::var(var).ok()
        })?;
        let client = GeminiClient::new(
            &api_key,
            config.gemini.model.clone(),
            config.gemini.base_url.clone(),
            Duration::from_secs(config.gemini.timeout_secs),
        )?;

        info!(model = %config.gemini.model, "Gemini content service initialized");

        Ok(Self::with_client(
            client,
            config.gemini.temperature,
            config.quiz.question_count,
        ))
    }

    /// Wraps an existing client.
    pub fn with_client(client: GeminiClient, temperature: f32, question_count: usize) -> Self {
        Self {
            client,
            temperature,
            question_count,
        }
    }

    async fn structured(
        &self,
        parts: Vec<Part>,
        schema: serde_json::Value,
        context: &str,
    ) -> Result<String, SheetwiseError> {
        let request = GenerateContentRequest::user(
            parts,
            GenerationConfig::json(self.temperature, schema),
        )
        .with_system(prompts::SYSTEM_INSTRUCTION);
        let response = self.client.generate(&request).await?;
        reply_text(&response).ok_or_else(|| empty_reply(&response, context))
    }
}

/// Non-empty text of the first candidate.
fn reply_text(response: &GenerateContentResponse) -> Option<String> {
    response.text().filter(|text| !text.trim().is_empty())
}

fn empty_reply(response: &GenerateContentResponse, context: &str) -> SheetwiseError {
    let message = match response.block_reason() {
        Some(reason) => format!("Gemini refused the {context} request: {reason}"),
        None => format!("Gemini returned no content for {context}"),
    };
    SheetwiseError::Content {
        message,
        source: None,
    }
}

/// Resolves the API key from config, then the environment.
///
/// `env` looks up one variable; empty values count as unset.
pub fn resolve_api_key(
    config_key: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<String, SheetwiseError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.to_string());
    }

    API_KEY_ENV_VARS
        .iter()
        .find_map(|var| env(var).filter(|v| !v.is_empty()))
        .ok_or_else(|| {
            SheetwiseError::Config(
                "Gemini API key not found. Set gemini.api_key in config or the GEMINI_API_KEY environment variable.".into(),
            )
        })
}

#[async_trait]
impl PluginAdapter for GeminiContentService {
    fn name(&self) -> &str {
        "gemini"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Content
    }

    async fn health_check(&self) -> Result<HealthStatus, SheetwiseError> {
        // No API call: a probe would spend quota.
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl ContentAdapter for GeminiContentService {
    async fn extract(
        &self,
        document: &SourceDocument,
        profile: &UserProfile,
    ) -> Result<StudyData, SheetwiseError> {
        debug!(
            file = %document.file_name,
            mime = %document.mime_type,
            bytes = document.bytes.len(),
            "extracting study sheet"
        );
        let parts = vec![
            Part::inline(document.mime_type.clone(), BASE64.encode(&document.bytes)),
            Part::text(prompts::extraction(profile)),
        ];
        let text = self
            .structured(parts, schema::study_data(), validate::EXTRACTION)
            .await?;
        let sheet = validate::study_data(&text)?;
        info!(sheet_id = %sheet.id, concepts = sheet.concepts.len(), "study sheet extracted");
        Ok(sheet)
    }

    async fn generate_quiz(
        &self,
        sheet: &StudyData,
        weak_concept_ids: &[String],
    ) -> Result<Vec<QuizQuestion>, SheetwiseError> {
        let prompt = prompts::quiz(sheet, weak_concept_ids, self.question_count);
        let text = self
            .structured(vec![Part::text(prompt)], schema::quiz_questions(), validate::QUIZ)
            .await?;
        let questions = validate::quiz_questions(&text, sheet)?;
        if questions.len() != self.question_count {
            warn!(
                expected = self.question_count,
                received = questions.len(),
                "quiz length differs from the requested count"
            );
        }
        Ok(questions)
    }

    async fn grade(
        &self,
        question: &QuizQuestion,
        answer: &str,
    ) -> Result<QuizFeedback, SheetwiseError> {
        let text = self
            .structured(
                vec![Part::text(prompts::grading(question, answer))],
                schema::quiz_feedback(),
                validate::GRADING,
            )
            .await?;
        validate::quiz_feedback(&text)
    }

    async fn tutor(
        &self,
        term: &str,
        explanation: &str,
        question: &str,
    ) -> Result<String, SheetwiseError> {
        let request = GenerateContentRequest::user(
            vec![Part::text(prompts::tutor(term, explanation, question))],
            GenerationConfig::text(self.temperature),
        )
        .with_system(prompts::SYSTEM_INSTRUCTION);
        let response = self.client.generate(&request).await?;
        match reply_text(&response) {
            Some(text) => Ok(text.trim().to_string()),
            None => {
                warn!(term, "tutor reply had no usable text");
                Ok(TUTOR_FALLBACK.to_string())
            }
        }
    }
}
