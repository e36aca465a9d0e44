// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample data shared by tests.

use chrono::{DateTime, TimeZone, Utc};
use sheetwise_core::types::{
    AcademicLevel, Concept, FlowNode, Flowchart, Mnemonic, PlanDay, QuestionKind, QuizFeedback,
    QuizQuestion, SharedSheet, SheetComment, SourceDocument, StudyData, TestLikelihood,
};

pub const SAMPLE_SHEET_ID: &str = "cell-bio";

fn concept(id: &str, term: &str, explanation: &str, likelihood: TestLikelihood, related: &[&str]) -> Concept {
    Concept {
        id: id.to_string(),
        term: term.to_string(),
        explanation: explanation.to_string(),
        test_likelihood: likelihood,
        related_concept_ids: related.iter().map(|r| r.to_string()).collect(),
    }
}

/// A three-concept cell biology sheet.
pub fn sample_sheet() -> StudyData {
    StudyData {
        id: SAMPLE_SHEET_ID.to_string(),
        title: "Cell Biology Basics".to_string(),
        summary: Some("Organelles and the energy they produce.".to_string()),
        concepts: vec![
            concept("mito", "Mitochondria", "Organelle that produces ATP", TestLikelihood::High, &["atp"]),
            concept("atp", "ATP", "The cell's energy currency", TestLikelihood::Medium, &["mito"]),
            concept("ribo", "Ribosome", "Builds proteins from mRNA", TestLikelihood::Low, &[]),
        ],
        mnemonics: vec![Mnemonic {
            concept_id: "mito".to_string(),
            aid: "Mighty Mito makes the power".to_string(),
            imagery: "A tiny power plant inside a cell".to_string(),
        }],
        equations: vec![],
        laws: vec![],
        visual_aids: vec![],
        plan: vec![
            PlanDay {
                day: 1,
                focus: "Organelles".to_string(),
                tasks: vec!["Label a cell diagram".to_string()],
            },
            PlanDay {
                day: 3,
                focus: "Energy".to_string(),
                tasks: vec!["Explain ATP to a friend".to_string()],
            },
        ],
        flowchart: Some(Flowchart {
            nodes: vec![
                FlowNode {
                    id: "glucose".to_string(),
                    label: "Glucose".to_string(),
                    next: vec!["atp".to_string()],
                },
                FlowNode {
                    id: "atp".to_string(),
                    label: "ATP".to_string(),
                    next: vec![],
                },
            ],
        }),
    }
}

/// One question per sample concept, one of each kind.
pub fn sample_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: "q1".to_string(),
            kind: QuestionKind::MultipleChoice,
            question: "Which organelle produces ATP?".to_string(),
            choices: Some(vec![
                "Nucleus".to_string(),
                "Mitochondria".to_string(),
                "Golgi apparatus".to_string(),
                "Ribosome".to_string(),
            ]),
            correct_answer: "Mitochondria".to_string(),
            hint: Some("Think power plant.".to_string()),
            concept_id: "mito".to_string(),
        },
        QuizQuestion {
            id: "q2".to_string(),
            kind: QuestionKind::ShortAnswer,
            question: "What is the cell's energy currency?".to_string(),
            choices: None,
            correct_answer: "ATP".to_string(),
            hint: None,
            concept_id: "atp".to_string(),
        },
        QuizQuestion {
            id: "q3".to_string(),
            kind: QuestionKind::Explain,
            question: "Explain what a ribosome does.".to_string(),
            choices: None,
            correct_answer: "protein synthesis".to_string(),
            hint: None,
            concept_id: "ribo".to_string(),
        },
    ]
}

pub fn verdict(is_correct: bool) -> QuizFeedback {
    if is_correct {
        QuizFeedback {
            is_correct: true,
            message: "Correct!".to_string(),
            correction: None,
            memory_tip: None,
        }
    } else {
        QuizFeedback {
            is_correct: false,
            message: "Not quite.".to_string(),
            correction: Some("Review the concept explanation.".to_string()),
            memory_tip: Some("Link it to the mnemonic.".to_string()),
        }
    }
}

/// A small valid PDF-typed upload.
pub fn sample_document() -> SourceDocument {
    SourceDocument {
        file_name: "notes.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.7 sample".to_vec(),
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn shared_sheet(id: &str, subject: &str, rating: f32) -> SharedSheet {
    SharedSheet {
        id: id.to_string(),
        sheet: StudyData {
            id: format!("{id}-sheet"),
            ..sample_sheet()
        },
        owner_id: "owner-1".to_string(),
        owner_name: "Grace".to_string(),
        subject: subject.to_string(),
        level: AcademicLevel::Undergraduate,
        rating,
        rating_count: 12,
        comments: vec![SheetComment {
            author: "Linus".to_string(),
            text: "Helped before my midterm".to_string(),
            timestamp: at(2026, 3, 1, 9),
        }],
        published_at: at(2026, 2, 14, 12),
    }
}
