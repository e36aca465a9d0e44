// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt text for each content call.

use std::fmt::Write;

use sheetwise_core::types::{QuizQuestion, StudyData, UserProfile};

pub const SYSTEM_INSTRUCTION: &str = "You are Sheetwise, a patient study coach. \
Be accurate, concise and encouraging. Never invent facts that are not supported \
by the learner's material.";

pub fn extraction(profile: &UserProfile) -> String {
    format!(
        "Turn the attached document into a study sheet for a {level} student of {subject}.\n\
         The learner prefers {style} learning and {mnemonic} mnemonics.\n\
         - List every key concept with a short explanation and how likely it is to be tested.\n\
         - Give each concept a short kebab-case id and link related concepts by id.\n\
         - Write one mnemonic per important concept in the {mnemonic} style.\n\
         - Include the equations and laws the document states, with formulas in LaTeX.\n\
         - Suggest visual aids that fit a {style} learner.\n\
         - Build a 7-day spaced-repetition plan, hardest material revisited most.\n\
         - Add a flowchart only when the material describes a process.",
        level = profile.level,
        subject = profile.subject,
        style = profile.learning_style,
        mnemonic = profile.mnemonic_style,
    )
}

pub fn quiz(sheet: &StudyData, weak_concept_ids: &[String], question_count: usize) -> String {
    let mut prompt = format!(
        "Write a quiz of exactly {question_count} questions on \"{}\".\n\
         Mix the formats: about 40% multiple-choice, 30% short-answer and 30% explain, \
         ordered from easiest to hardest. Multiple-choice questions need 4 choices and \
         their correctAnswer must be one of them. Set conceptId to the id of the \
         concept each question tests.\n\nConcepts:\n",
        sheet.title
    );
    for concept in &sheet.concepts {
        let _ = writeln!(
            prompt,
            "- {} [{}] ({} likelihood): {}",
            concept.term, concept.id, concept.test_likelihood, concept.explanation
        );
    }
    if !weak_concept_ids.is_empty() {
        let _ = write!(
            prompt,
            "\nThe learner is weakest on these concept ids; ask about them more often: {}\n",
            weak_concept_ids.join(", ")
        );
    }
    prompt
}

pub fn grading(question: &QuizQuestion, answer: &str) -> String {
    let mut prompt = format!(
        "Grade the learner's answer.\n\nQuestion ({}): {}\n",
        question.kind, question.question
    );
    if !question.choices().is_empty() {
        let _ = writeln!(prompt, "Choices: {}", question.choices().join(" | "));
    }
    let _ = write!(
        prompt,
        "Reference answer: {}\nLearner's answer: {answer}\n\n\
         Accept answers that are correct in substance even if worded differently. \
         When the answer is wrong, give a short correction and a memory tip.",
        question.correct_answer
    );
    prompt
}

pub fn tutor(term: &str, explanation: &str, question: &str) -> String {
    format!(
        "The learner is studying \"{term}\": {explanation}\n\n\
         They ask: {question}\n\n\
         Answer in plain text in a few short paragraphs, using an example where it helps."
    )
}
