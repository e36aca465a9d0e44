// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns model replies into checked domain values.
//!
//! Deserialization catches missing fields and wrong types; the semantic
//! checks below catch replies that parse but cannot be used. Both surface as
//! [`SheetwiseError::SchemaMismatch`].

use serde::de::DeserializeOwned;
use sheetwise_core::SheetwiseError;
use sheetwise_core::types::{QuestionKind, QuizFeedback, QuizQuestion, StudyData};
use tracing::warn;

pub const EXTRACTION: &str = "extraction";
pub const QUIZ: &str = "quiz generation";
pub const GRADING: &str = "grading";

fn parse<T: DeserializeOwned>(context: &str, text: &str) -> Result<T, SheetwiseError> {
    let text = strip_code_fence(text);
    serde_json::from_str(text).map_err(|e| SheetwiseError::schema(context, e.to_string()))
}

/// Some models wrap JSON in a Markdown fence even in JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

/// Parses an extracted sheet. A missing id is replaced by a fresh UUID.
pub fn study_data(text: &str) -> Result<StudyData, SheetwiseError> {
    let mut sheet: StudyData = parse(EXTRACTION, text)?;

    if sheet.concepts.is_empty() {
        return Err(SheetwiseError::schema(EXTRACTION, "no concepts were extracted"));
    }
    if let Some(concept) = sheet.concepts.iter().find(|c| c.id.trim().is_empty()) {
        return Err(SheetwiseError::schema(
            EXTRACTION,
            format!("concept `{}` has an empty id", concept.term),
        ));
    }
    if sheet.id.trim().is_empty() {
        sheet.id = uuid::Uuid::new_v4().to_string();
    }

    for reference in sheet.dangling_references() {
        warn!(sheet_id = %sheet.id, %reference, "sheet references an unknown id");
    }
    Ok(sheet)
}

/// Parses generated questions for `sheet`.
pub fn quiz_questions(text: &str, sheet: &StudyData) -> Result<Vec<QuizQuestion>, SheetwiseError> {
    let questions: Vec<QuizQuestion> = parse(QUIZ, text)?;

    if questions.is_empty() {
        return Err(SheetwiseError::schema(QUIZ, "no questions were generated"));
    }
    for question in &questions {
        if question.kind == QuestionKind::MultipleChoice && question.choices().is_empty() {
            return Err(SheetwiseError::schema(
                QUIZ,
                format!("multiple-choice question `{}` has no choices", question.id),
            ));
        }
        if sheet.concept(&question.concept_id).is_none() {
            warn!(
                question_id = %question.id,
                concept_id = %question.concept_id,
                "question tests a concept not in the sheet"
            );
        }
    }
    Ok(questions)
}

pub fn quiz_feedback(text: &str) -> Result<QuizFeedback, SheetwiseError> {
    parse(GRADING, text)
}

#[cfg(test)]
mod tests {
    use sheetwise_core::types::{Concept, TestLikelihood};

    use super::*;

    const SHEET: &str = r#"{
        "title": "Cell Biology",
        "concepts": [
            {"id": "mito", "term": "Mitochondria", "explanation": "Makes ATP", "testLikelihood": "High",
             "relatedConceptIds": ["atp", "ghost"]},
            {"id": "atp", "term": "ATP", "explanation": "Energy currency", "testLikelihood": "Medium"}
        ],
        "mnemonics": [{"conceptId": "mito", "aid": "Mighty Mito", "imagery": "a power plant"}],
        "plan": [{"day": 1, "focus": "Organelles", "tasks": ["Read ch. 2"]}]
    }"#;

    fn sheet() -> StudyData {
        study_data(SHEET).unwrap()
    }

    #[test]
    fn sheet_without_id_gets_uuid() {
        let sheet = sheet();
        assert_eq!(sheet.title, "Cell Biology");
        assert!(uuid::Uuid::parse_str(&sheet.id).is_ok());
        assert_eq!(sheet.concepts[0].test_likelihood, TestLikelihood::High);
    }

    #[test]
    fn sheet_with_id_keeps_it() {
        let text = SHEET.replacen("{", r#"{"id": "bio-1","#, 1);
        assert_eq!(study_data(&text).unwrap().id, "bio-1");
    }

    #[tracing_test::traced_test]
    #[test]
    fn dangling_reference_is_kept_and_logged() {
        let sheet = sheet();
        assert_eq!(sheet.concepts[0].related_concept_ids, vec!["atp", "ghost"]);
        assert!(logs_contain("sheet references an unknown id"));
    }

    #[test]
    fn missing_title_is_schema_mismatch() {
        let err = study_data(r#"{"concepts": []}"#).unwrap_err();
        assert!(matches!(err, SheetwiseError::SchemaMismatch { ref context, .. } if context == EXTRACTION));
    }

    #[test]
    fn empty_concepts_is_schema_mismatch() {
        let err = study_data(r#"{"title": "Empty", "concepts": []}"#).unwrap_err();
        assert!(err.to_string().contains("no concepts"));
    }

    #[test]
    fn wrong_type_is_schema_mismatch() {
        let err = study_data(r#"{"title": 7, "concepts": []}"#).unwrap_err();
        assert!(matches!(err, SheetwiseError::SchemaMismatch { .. }));
    }

    #[test]
    fn not_json_is_schema_mismatch() {
        let err = quiz_feedback("Sure! Here is your grade.").unwrap_err();
        assert!(matches!(err, SheetwiseError::SchemaMismatch { ref context, .. } if context == GRADING));
    }

    #[test]
    fn fenced_json_is_accepted() {
        let fb = quiz_feedback("```json\n{\"isCorrect\": true, \"message\": \"Yes\"}\n```").unwrap();
        assert!(fb.is_correct);
    }

    #[test]
    fn multiple_choice_without_choices_is_rejected() {
        let text = r#"[{"id": "q1", "type": "multiple-choice", "question": "?", "correctAnswer": "A", "conceptId": "mito"}]"#;
        let err = quiz_questions(text, &sheet()).unwrap_err();
        assert!(err.to_string().contains("has no choices"), "got: {err}");

        let text = text.replace(r#""correctAnswer""#, r#""choices": [], "correctAnswer""#);
        assert!(quiz_questions(&text, &sheet()).is_err());
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = quiz_questions("[]", &sheet()).unwrap_err();
        assert!(matches!(err, SheetwiseError::SchemaMismatch { ref context, .. } if context == QUIZ));
    }

    #[test]
    fn unknown_question_type_is_rejected() {
        let text = r#"[{"id": "q1", "type": "essay", "question": "?", "correctAnswer": "A", "conceptId": "mito"}]"#;
        assert!(matches!(
            quiz_questions(text, &sheet()),
            Err(SheetwiseError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn valid_questions_parse() {
        let text = r#"[
            {"id": "q1", "type": "multiple-choice", "question": "Powerhouse?", "choices": ["Nucleus", "Mitochondria"],
             "correctAnswer": "Mitochondria", "conceptId": "mito"},
            {"id": "q2", "type": "explain", "question": "Why ATP?", "correctAnswer": "Energy", "hint": "currency",
             "conceptId": "unknown-concept"}
        ]"#;
        let questions = quiz_questions(text, &sheet()).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].hint.as_deref(), Some("currency"));
    }

    #[test]
    fn empty_concept_id_is_rejected() {
        let sheet = StudyData {
            concepts: vec![Concept {
                id: " ".into(),
                term: "Blank".into(),
                explanation: String::new(),
                test_likelihood: TestLikelihood::Low,
                related_concept_ids: vec![],
            }],
            ..sheet()
        };
        let text = serde_json::to_string(&sheet).unwrap();
        assert!(study_data(&text).unwrap_err().to_string().contains("empty id"));
    }
}
