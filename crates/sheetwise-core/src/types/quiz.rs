// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quiz question and grading feedback types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The three question formats the content service produces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    ShortAnswer,
    Explain,
}

/// Whether a quiz run is untimed practice or a timed exam.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QuizMode {
    #[default]
    Practice,
    Exam,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    /// Required and non-empty only for multiple-choice questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub concept_id: String,
}

impl QuizQuestion {
    /// Returns the choices for a multiple-choice question, or an empty slice.
    pub fn choices(&self) -> &[String] {
        self.choices.as_deref().unwrap_or_default()
    }
}

/// The content service's verdict on one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizFeedback {
    pub is_correct: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_tip: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn question_kind_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&QuestionKind::MultipleChoice).unwrap();
        assert_eq!(json, "\"multiple-choice\"");
        assert_eq!(
            QuestionKind::from_str("short-answer").unwrap(),
            QuestionKind::ShortAnswer
        );
        assert_eq!(QuestionKind::Explain.to_string(), "explain");
    }

    #[test]
    fn question_type_field_is_renamed() {
        let json = r#"{
            "id": "q1",
            "type": "multiple-choice",
            "question": "Powerhouse of the cell?",
            "choices": ["Nucleus", "Mitochondria"],
            "correctAnswer": "Mitochondria",
            "conceptId": "c1"
        }"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind, QuestionKind::MultipleChoice);
        assert_eq!(q.choices().len(), 2);
        assert!(q.hint.is_none());
    }

    #[test]
    fn feedback_optional_fields_default_to_none() {
        let fb: QuizFeedback =
            serde_json::from_str(r#"{"isCorrect": false, "message": "Not quite"}"#).unwrap();
        assert!(!fb.is_correct);
        assert!(fb.correction.is_none());
        assert!(fb.memory_tip.is_none());
    }
}
