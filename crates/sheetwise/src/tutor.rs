// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sheetwise tutor` command implementation.

use colored::Colorize;
use sheetwise_core::SheetwiseError;
use sheetwise_core::types::StudyData;
use sheetwise_study::StudyContext;
use tracing::debug;

use crate::input::{LineSource, Terminal};

pub async fn run_tutor(
    context: &StudyContext,
    sheet_id: &str,
    concept_ref: &str,
) -> Result<(), SheetwiseError> {
    let sheet = context.sheet(sheet_id)?;
    let concept = sheet
        .find_concept(concept_ref)
        .ok_or_else(|| SheetwiseError::not_found("concept", concept_ref))?;

    println!("{}", concept.term.bold());
    println!("{}\n", concept.explanation);
    println!("ask anything about it; {} to stop", "/quit".yellow());

    let mut terminal = Terminal::new()?;
    let answered = converse(context, &sheet, concept_ref, &mut terminal).await;
    debug!(sheet_id, answered, "tutor session ended");
    Ok(())
}

/// Answers questions until the input ends. Returns how many were answered.
///
/// Failures are printed and the conversation continues.
async fn converse(
    context: &StudyContext,
    sheet: &StudyData,
    concept_ref: &str,
    input: &mut impl LineSource,
) -> usize {
    let prompt = format!("{}> ", "tutor".green());
    let mut answered = 0;
    while let Some(line) = input.read_line(&prompt) {
        if line.trim().is_empty() {
            continue;
        }
        match context.ask_tutor(sheet, concept_ref, &line).await {
            Ok(reply) => {
                println!("{reply}\n");
                answered += 1;
            }
            Err(e) => eprintln!("{}: {e}", "error".red()),
        }
    }
    answered
}
