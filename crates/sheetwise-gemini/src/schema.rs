// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response schemas sent as `generationConfig.responseSchema`.
//!
//! Gemini accepts an OpenAPI subset with upper-case type names. The schemas
//! mirror the camelCase wire shape of the core types.

use serde_json::{json, Value};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({ "type": "OBJECT", "properties": properties, "required": required })
}

fn concept() -> Value {
    object(
        json!({
            "id": string(),
            "term": string(),
            "explanation": string(),
            "testLikelihood": { "type": "STRING", "enum": ["High", "Medium", "Low"] },
            "relatedConceptIds": string_array(),
        }),
        &["id", "term", "explanation", "testLikelihood"],
    )
}

/// Schema for an extracted [`StudyData`](sheetwise_core::types::StudyData).
pub fn study_data() -> Value {
    let mnemonic = object(
        json!({ "conceptId": string(), "aid": string(), "imagery": string() }),
        &["conceptId", "aid", "imagery"],
    );
    let equation = object(
        json!({ "name": string(), "formula": string(), "explanation": string() }),
        &["name", "formula", "explanation"],
    );
    let law = object(
        json!({ "name": string(), "statement": string(), "explanation": string() }),
        &["name", "statement", "explanation"],
    );
    let visual_aid = object(
        json!({ "title": string(), "description": string(), "kind": string() }),
        &["title", "description"],
    );
    let plan_day = object(
        json!({ "day": { "type": "INTEGER" }, "focus": string(), "tasks": string_array() }),
        &["day", "focus", "tasks"],
    );
    let flow_node = object(
        json!({ "id": string(), "label": string(), "next": string_array() }),
        &["id", "label"],
    );

    object(
        json!({
            "id": string(),
            "title": string(),
            "summary": string(),
            "concepts": { "type": "ARRAY", "items": concept() },
            "mnemonics": { "type": "ARRAY", "items": mnemonic },
            "equations": { "type": "ARRAY", "items": equation },
            "laws": { "type": "ARRAY", "items": law },
            "visualAids": { "type": "ARRAY", "items": visual_aid },
            "plan": { "type": "ARRAY", "items": plan_day },
            "flowchart": object(
                json!({ "nodes": { "type": "ARRAY", "items": flow_node } }),
                &["nodes"],
            ),
        }),
        &["title", "concepts", "mnemonics", "plan"],
    )
}

/// Schema for a list of [`QuizQuestion`](sheetwise_core::types::QuizQuestion)s.
pub fn quiz_questions() -> Value {
    let question = object(
        json!({
            "id": string(),
            "type": {
                "type": "STRING",
                "enum": ["multiple-choice", "short-answer", "explain"],
            },
            "question": string(),
            "choices": string_array(),
            "correctAnswer": string(),
            "hint": string(),
            "conceptId": string(),
        }),
        &["id", "type", "question", "correctAnswer", "conceptId"],
    );
    json!({ "type": "ARRAY", "items": question })
}

/// Schema for [`QuizFeedback`](sheetwise_core::types::QuizFeedback).
pub fn quiz_feedback() -> Value {
    object(
        json!({
            "isCorrect": { "type": "BOOLEAN" },
            "message": string(),
            "correction": string(),
            "memoryTip": string(),
        }),
        &["isCorrect", "message"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(schema: &Value) -> Vec<&str> {
        schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect()
    }

    #[test]
    fn study_data_requires_concepts() {
        let schema = study_data();
        assert!(required(&schema).contains(&"concepts"));
        assert_eq!(
            schema["properties"]["concepts"]["items"]["properties"]["testLikelihood"]["enum"][0],
            "High"
        );
    }

    #[test]
    fn quiz_schema_uses_wire_names() {
        let schema = quiz_questions();
        let item = &schema["items"];
        assert!(required(item).contains(&"correctAnswer"));
        assert!(item["properties"].get("type").is_some());
        assert!(item["properties"].get("kind").is_none());
    }

    #[test]
    fn feedback_schema_requires_verdict() {
        assert_eq!(required(&quiz_feedback()), vec!["isCorrect", "message"]);
    }
}
