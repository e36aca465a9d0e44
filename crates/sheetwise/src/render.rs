// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of sheets, users, quizzes and reports.
//!
//! Every function returns a `String` so output can be asserted on. References
//! that do not resolve inside a sheet are skipped silently.

use std::fmt::Write;

use colored::Colorize;
use sheetwise_core::types::{
    QuizFeedback, QuizQuestion, SessionRecord, SharedSheet, StudyData, TestLikelihood, User,
};
use sheetwise_mastery::{MASTERED_THRESHOLD, ProgressReport};

const BAR_WIDTH: usize = 10;

/// `[#####-----]  50%`
pub fn mastery_bar(level: u8) -> String {
    let filled = usize::from(level.min(100)) * BAR_WIDTH / 100;
    let bar = format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));
    let bar = if level >= MASTERED_THRESHOLD {
        bar.green()
    } else if level > 0 {
        bar.yellow()
    } else {
        bar.dimmed()
    };
    format!("{bar} {level:>3}%")
}

fn likelihood_tag(likelihood: TestLikelihood) -> String {
    let tag = format!("({likelihood})");
    match likelihood {
        TestLikelihood::High => tag.red().to_string(),
        TestLikelihood::Medium => tag.yellow().to_string(),
        TestLikelihood::Low => tag.dimmed().to_string(),
    }
}

/// One library line: id, title, concept count and mean mastery.
pub fn sheet_line(sheet: &StudyData, user: &User) -> String {
    let count = sheet.concepts.len();
    let mean = if count == 0 {
        0
    } else {
        let sum: usize = sheet
            .concepts
            .iter()
            .map(|c| usize::from(user.mastery_of(&c.id)))
            .sum();
        sum / count
    };
    format!(
        "{:<20} {}  {} concepts, {}% mastery",
        sheet.id.cyan(),
        sheet.title.bold(),
        count,
        mean
    )
}

/// The full sheet, with the user's mastery next to each concept.
pub fn sheet(sheet: &StudyData, user: Option<&User>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", sheet.title.bold().underline());
    let _ = writeln!(out, "{}", format!("id: {}", sheet.id).dimmed());
    if let Some(summary) = &sheet.summary {
        let _ = writeln!(out, "\n{summary}");
    }

    let _ = writeln!(out, "\n{}", "Concepts".bold());
    for concept in sheet.concepts_by_likelihood() {
        let level = user.map(|u| u.mastery_of(&concept.id)).unwrap_or(0);
        let _ = writeln!(
            out,
            "  {} {} {}",
            concept.term.bold(),
            likelihood_tag(concept.test_likelihood),
            if user.is_some() {
                mastery_bar(level)
            } else {
                String::new()
            }
        );
        let _ = writeln!(out, "    {}", concept.explanation);
        if let Some(mnemonic) = sheet.mnemonic_for(&concept.id) {
            let _ = writeln!(out, "    {} {}", "mnemonic:".magenta(), mnemonic.aid);
            if !mnemonic.imagery.is_empty() {
                let _ = writeln!(out, "      {}", mnemonic.imagery.italic());
            }
        }
        let related: Vec<&str> = sheet
            .related(&concept.id)
            .into_iter()
            .map(|c| c.term.as_str())
            .collect();
        if !related.is_empty() {
            let _ = writeln!(out, "    {} {}", "see also:".dimmed(), related.join(", "));
        }
    }

    if !sheet.equations.is_empty() {
        let _ = writeln!(out, "\n{}", "Equations".bold());
        for eq in &sheet.equations {
            let _ = writeln!(out, "  {}: {}", eq.name.bold(), eq.formula);
            let _ = writeln!(out, "    {}", eq.explanation);
        }
    }

    if !sheet.laws.is_empty() {
        let _ = writeln!(out, "\n{}", "Laws".bold());
        for law in &sheet.laws {
            let _ = writeln!(out, "  {}: {}", law.name.bold(), law.statement);
            let _ = writeln!(out, "    {}", law.explanation);
        }
    }

    if !sheet.visual_aids.is_empty() {
        let _ = writeln!(out, "\n{}", "Visual aids".bold());
        for aid in &sheet.visual_aids {
            let kind = if aid.kind.is_empty() {
                String::new()
            } else {
                format!(" [{}]", aid.kind)
            };
            let _ = writeln!(out, "  {}{}: {}", aid.title.bold(), kind, aid.description);
        }
    }

    if let Some(flowchart) = &sheet.flowchart {
        let _ = writeln!(out, "\n{}", "Flow".bold());
        for node in &flowchart.nodes {
            let next: Vec<&str> = node
                .next
                .iter()
                .filter_map(|id| flowchart.nodes.iter().find(|n| &n.id == id))
                .map(|n| n.label.as_str())
                .collect();
            if next.is_empty() {
                let _ = writeln!(out, "  {}", node.label);
            } else {
                let _ = writeln!(out, "  {} -> {}", node.label, next.join(", "));
            }
        }
    }

    if !sheet.plan.is_empty() {
        let _ = writeln!(out, "\n{}", "Study plan".bold());
        for day in &sheet.plan {
            let _ = writeln!(out, "  Day {}: {}", day.day, day.focus.bold());
            for task in &day.tasks {
                let _ = writeln!(out, "    - {task}");
            }
        }
    }
    out
}

pub fn user(user: &User) -> String {
    let p = &user.profile;
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", user.name.bold(), format!("({})", user.id).dimmed());
    let _ = writeln!(out, "  subject:         {}", p.subject);
    let _ = writeln!(out, "  level:           {}", p.level);
    let _ = writeln!(out, "  learning style:  {}", p.learning_style);
    let _ = writeln!(out, "  mnemonic style:  {}", p.mnemonic_style);
    let _ = writeln!(
        out,
        "  library:         {} sheets, {} quizzes taken",
        user.sheet_ids.len(),
        user.history.len()
    );
    out
}

/// A question with its position, and numbered choices when it has them.
pub fn question(question: &QuizQuestion, index: usize, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{} {}",
        format!("Question {}/{}", index + 1, total).bold(),
        format!("[{}]", question.kind).dimmed()
    );
    let _ = writeln!(out, "{}", question.question);
    for (i, choice) in question.choices().iter().enumerate() {
        let _ = writeln!(out, "  {}. {choice}", i + 1);
    }
    out
}

pub fn feedback(feedback: &QuizFeedback) -> String {
    let mut out = String::new();
    if feedback.is_correct {
        let _ = writeln!(out, "{} {}", "correct".green().bold(), feedback.message);
    } else {
        let _ = writeln!(out, "{} {}", "incorrect".red().bold(), feedback.message);
    }
    if let Some(correction) = &feedback.correction {
        let _ = writeln!(out, "  {} {correction}", "correction:".yellow());
    }
    if let Some(tip) = &feedback.memory_tip {
        let _ = writeln!(out, "  {} {tip}", "memory tip:".magenta());
    }
    out
}

pub fn session_result(record: &SessionRecord) -> String {
    format!(
        "{} {}/{} ({}%)",
        format!("{} complete:", record.mode).bold(),
        record.score,
        record.total,
        record.percent()
    )
}

pub fn progress(report: &ProgressReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Progress".bold());
    let _ = writeln!(out, "  quizzes taken:   {}", report.sessions);
    if report.sessions > 0 {
        let _ = writeln!(out, "  accuracy:        {:.0}%", report.accuracy);
    }
    if let Some(best) = report.best_percent {
        let _ = writeln!(out, "  best score:      {best}%");
    }
    let _ = writeln!(out, "  average mastery: {:.0}%", report.average_mastery);
    let _ = writeln!(
        out,
        "  concepts:        {} mastered, {} learning, {} not started",
        report.mastered.to_string().green(),
        report.learning.to_string().yellow(),
        report.untouched
    );
    out
}

pub fn shared(entry: &SharedSheet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}  {:.1}/5 ({} ratings)",
        entry.sheet.title.bold(),
        format!("[{} / {}]", entry.subject, entry.level).dimmed(),
        entry.rating,
        entry.rating_count
    );
    let _ = writeln!(
        out,
        "  by {}, {} concepts, id {}",
        entry.owner_name,
        entry.sheet.concepts.len(),
        entry.id.cyan()
    );
    if let Some(latest) = entry.comments.iter().max_by_key(|c| c.timestamp) {
        let _ = writeln!(out, "  \"{}\" - {}", latest.text, latest.author);
    }
    out
}
