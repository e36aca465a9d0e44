// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stand-in content service used when Gemini cannot be configured.

use async_trait::async_trait;
use sheetwise_core::types::{
    AdapterType, HealthStatus, QuizFeedback, QuizQuestion, SourceDocument, StudyData, UserProfile,
};
use sheetwise_core::{ContentAdapter, PluginAdapter, SheetwiseError};

/// Fails every content call with the reason the real service is missing.
#[derive(Debug, Clone)]
pub struct OfflineContent {
    reason: String,
}

impl OfflineContent {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn unavailable<T>(&self) -> Result<T, SheetwiseError> {
        Err(SheetwiseError::Content {
            message: format!("content service is offline: {}", self.reason),
            source: None,
        })
    }
}

#[async_trait]
impl PluginAdapter for OfflineContent {
    fn name(&self) -> &str {
        "offline"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Content
    }

    async fn health_check(&self) -> Result<HealthStatus, SheetwiseError> {
        Ok(HealthStatus::Unhealthy(self.reason.clone()))
    }
}

#[async_trait]
impl ContentAdapter for OfflineContent {
    async fn extract(
        &self,
        _document: &SourceDocument,
        _profile: &UserProfile,
    ) -> Result<StudyData, SheetwiseError> {
        self.unavailable()
    }

    async fn generate_quiz(
        &self,
        _sheet: &StudyData,
        _weak_concept_ids: &[String],
    ) -> Result<Vec<QuizQuestion>, SheetwiseError> {
        self.unavailable()
    }

    async fn grade(
        &self,
        _question: &QuizQuestion,
        _answer: &str,
    ) -> Result<QuizFeedback, SheetwiseError> {
        self.unavailable()
    }

    async fn tutor(
        &self,
        _term: &str,
        _explanation: &str,
        _question: &str,
    ) -> Result<String, SheetwiseError> {
        self.unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_call_is_a_content_failure() {
        let offline = OfflineContent::new("no API key");
        let err = offline.tutor("ATP", "", "why?").await.unwrap_err();
        assert!(err.is_content_failure());
        assert!(err.to_string().contains("no API key"));
        assert_eq!(
            offline.health_check().await.unwrap(),
            HealthStatus::Unhealthy("no API key".into())
        );
    }
}
