// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sheetwise quiz` command implementation.
//!
//! Walks a generated quiz one question at a time. A grading failure is
//! printed and the same question is asked again. In exam mode the remaining
//! time is shown with every prompt and the run ends when the clock does.

use colored::Colorize;
use sheetwise_core::SheetwiseError;
use sheetwise_core::types::{QuizMode, QuizQuestion, SessionRecord, User};
use sheetwise_mastery::QuizSession;
use sheetwise_mastery::clock::format_remaining;
use sheetwise_study::StudyContext;
use tracing::debug;

use crate::input::{LineSource, Terminal};
use crate::render;

const HINT_COMMAND: &str = "/hint";

pub async fn run_quiz(
    context: &StudyContext,
    sheet_id: &str,
    exam: bool,
) -> Result<(), SheetwiseError> {
    let mut user = context.require_user()?;
    let sheet = context.sheet(sheet_id)?;
    let mode = if exam { QuizMode::Exam } else { QuizMode::Practice };

    println!("generating a {mode} quiz on {} ...", sheet.title.bold());
    let session = context.start_quiz(&user, &sheet, mode).await?;
    if let Some(clock) = session.clock() {
        println!("you have {} minutes", clock.limit().num_minutes());
    }
    println!(
        "type {} for a hint, {} to stop",
        HINT_COMMAND.yellow(),
        "/quit".yellow()
    );

    let mut terminal = Terminal::new()?;
    if let Some(record) = drive(context, &mut user, session, &mut terminal).await? {
        println!("\n{}", render::session_result(&record));
    }
    Ok(())
}

/// Runs the question loop and records the result.
///
/// Returns `None` when the learner quit before answering anything, in which
/// case nothing is recorded.
async fn drive(
    context: &StudyContext,
    user: &mut User,
    mut session: QuizSession,
    input: &mut impl LineSource,
) -> Result<Option<SessionRecord>, SheetwiseError> {
    while let Some(question) = session.current().cloned() {
        if session.check_clock() {
            println!("\n{}", "time is up".red().bold());
            break;
        }
        print!(
            "{}",
            render::question(&question, session.position(), session.len())
        );

        let prompt = match session.clock() {
            Some(clock) => format!("[{}] answer> ", format_remaining(clock.remaining())),
            None => "answer> ".to_string(),
        };
        let Some(line) = input.read_line(&prompt) else {
            break;
        };
        let line = line.trim();
        if line == HINT_COMMAND {
            match &question.hint {
                Some(hint) => println!("{} {hint}", "hint:".cyan()),
                None => println!("no hint for this one"),
            }
            continue;
        }

        let answer = resolve_choice(&question, line);
        match context.submit_answer(&mut session, &answer).await {
            Ok(answered) => print!("{}", render::feedback(&answered.feedback)),
            Err(e) => {
                debug!(error = %e, question_id = %question.id, "answer not recorded");
                eprintln!("{}: {e}", "error".red());
            }
        }
    }

    if session.answers().is_empty() && !session.timed_out() {
        println!("quiz abandoned, nothing recorded");
        return Ok(None);
    }
    context.complete_quiz(user, session).map(Some)
}

/// Maps a choice number to its text for multiple-choice questions.
fn resolve_choice(question: &QuizQuestion, line: &str) -> String {
    line.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| question.choices().get(i))
        .cloned()
        .unwrap_or_else(|| line.to_string())
}

#[cfg(test)]
mod tests {
    use sheetwise_test_utils::{TestHarness, fixtures};

    use super::*;
    use crate::input::Scripted;

    async fn signed_in(h: &TestHarness) -> (User, QuizSession) {
        let user = h.context.sign_in("ada").unwrap();
        let session = h
            .context
            .start_quiz(&user, &fixtures::sample_sheet(), QuizMode::Practice)
            .await
            .unwrap();
        (user, session)
    }

    #[test]
    fn numbers_pick_choices() {
        let q = &fixtures::sample_questions()[0];
        assert_eq!(resolve_choice(q, "2"), "Mitochondria");
        assert_eq!(resolve_choice(q, "9"), "9");
        assert_eq!(resolve_choice(q, "0"), "0");
        assert_eq!(resolve_choice(q, "nucleus"), "nucleus");
        let short = &fixtures::sample_questions()[1];
        assert_eq!(resolve_choice(short, "1"), "1");
    }

    #[tokio::test]
    async fn full_run_is_recorded() {
        let h = TestHarness::new().await.unwrap();
        let (mut user, session) = signed_in(&h).await;
        let mut input = Scripted::new(&["/hint", "2", "atp", "no idea"]);

        let record = drive(&h.context, &mut user, session, &mut input)
            .await
            .unwrap()
            .unwrap();
        assert_eq!((record.score, record.total), (2, 3));
        assert_eq!(h.context.current_user().unwrap().mastery_of("mito"), 10);
    }

    #[tokio::test]
    async fn grading_failure_asks_the_same_question_again() {
        let h = TestHarness::builder()
            .with_verdicts(vec![Err(SheetwiseError::Content {
                message: "timeout".into(),
                source: None,
            })])
            .build()
            .await
            .unwrap();
        let (mut user, session) = signed_in(&h).await;
        let mut input = Scripted::new(&["Mitochondria", "Mitochondria", "/quit"]);

        let record = drive(&h.context, &mut user, session, &mut input)
            .await
            .unwrap()
            .unwrap();
        assert_eq!((record.score, record.total), (1, 3));
    }

    #[tokio::test]
    async fn quitting_before_answering_records_nothing() {
        let h = TestHarness::new().await.unwrap();
        let (mut user, session) = signed_in(&h).await;
        let mut input = Scripted::new(&["/quit"]);

        let record = drive(&h.context, &mut user, session, &mut input).await.unwrap();
        assert!(record.is_none());
        assert!(h.context.current_user().unwrap().history.is_empty());
    }
}
