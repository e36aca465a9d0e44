// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! State machine for one quiz run.
//!
//! A session walks its questions in order. Each answer is validated, graded
//! by the caller-supplied grader and recorded; only then does the session
//! advance. A failed grading leaves the session on the same question.
//! `submit` takes `&mut self`, so at most one grading is in flight.

use std::future::Future;

use sheetwise_core::SheetwiseError;
use sheetwise_core::types::{QuizFeedback, QuizMode, QuizQuestion};
use tracing::{debug, info};

use crate::clock::ExamClock;
use crate::tracker::Outcome;

/// A question together with the answer given and the grader's verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: QuizQuestion,
    pub answer: String,
    pub feedback: QuizFeedback,
}

/// What a finished run contributes to the user's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub sheet_id: String,
    pub mode: QuizMode,
    /// One outcome per answered question, in answer order.
    pub outcomes: Vec<Outcome>,
    /// Questions the run never reached.
    pub unanswered: u32,
    /// Whether the exam clock ended the run.
    pub timed_out: bool,
}

impl QuizSummary {
    pub fn score(&self) -> u32 {
        self.outcomes.iter().filter(|o| o.is_correct).count() as u32
    }

    /// Answered plus unanswered questions.
    pub fn total(&self) -> u32 {
        self.outcomes.len() as u32 + self.unanswered
    }
}

#[derive(Debug)]
pub struct QuizSession {
    sheet_id: String,
    mode: QuizMode,
    questions: Vec<QuizQuestion>,
    answers: Vec<AnsweredQuestion>,
    clock: Option<ExamClock>,
    timed_out: bool,
}

impl QuizSession {
    /// Creates a session over `questions`. An empty question list is rejected.
    pub fn new(
        sheet_id: impl Into<String>,
        mode: QuizMode,
        questions: Vec<QuizQuestion>,
    ) -> Result<Self, SheetwiseError> {
        if questions.is_empty() {
            return Err(SheetwiseError::Validation(
                "a quiz needs at least one question".to_string(),
            ));
        }
        Ok(Self {
            sheet_id: sheet_id.into(),
            mode,
            questions,
            answers: Vec::new(),
            clock: None,
            timed_out: false,
        })
    }

    /// Attaches an exam clock. Practice sessions ignore it.
    pub fn with_clock(mut self, clock: ExamClock) -> Self {
        if self.mode == QuizMode::Exam {
            self.clock = Some(clock);
        }
        self
    }

    pub fn sheet_id(&self) -> &str {
        &self.sheet_id
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn clock(&self) -> Option<&ExamClock> {
        self.clock.as_ref()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnsweredQuestion] {
        &self.answers
    }

    /// Zero-based index of the question awaiting an answer.
    pub fn position(&self) -> usize {
        self.answers.len()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question awaiting an answer, if the run is still going.
    pub fn current(&self) -> Option<&QuizQuestion> {
        if self.is_complete() {
            None
        } else {
            self.questions.get(self.answers.len())
        }
    }

    pub fn is_complete(&self) -> bool {
        self.timed_out || self.answers.len() >= self.questions.len()
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Ends the run if the exam clock has run out. Returns whether it did.
    pub fn check_clock(&mut self) -> bool {
        if !self.timed_out
            && !self.all_answered()
            && self.clock.as_ref().is_some_and(ExamClock::is_expired)
        {
            self.timed_out = true;
            info!(
                sheet_id = %self.sheet_id,
                answered = self.answers.len(),
                total = self.questions.len(),
                "exam time expired"
            );
        }
        self.timed_out
    }

    /// Validates, grades and records an answer to the current question.
    ///
    /// Rejects empty answers and answers after completion without calling
    /// `grade`. A grading error is returned as is and the session stays on
    /// the same question.
    pub async fn submit<F, Fut>(
        &mut self,
        answer: &str,
        grade: F,
    ) -> Result<&AnsweredQuestion, SheetwiseError>
    where
        F: FnOnce(QuizQuestion, String) -> Fut,
        Fut: Future<Output = Result<QuizFeedback, SheetwiseError>>,
    {
        self.check_clock();
        let question = self.ready_for(answer)?.clone();
        let answer = answer.trim().to_string();

        let feedback = grade(question.clone(), answer.clone()).await?;
        debug!(
            question_id = %question.id,
            is_correct = feedback.is_correct,
            "answer graded"
        );
        Ok(self.record(question, answer, feedback))
    }

    /// Records a verdict obtained elsewhere for the current question.
    pub fn record_feedback(
        &mut self,
        answer: &str,
        feedback: QuizFeedback,
    ) -> Result<&AnsweredQuestion, SheetwiseError> {
        self.check_clock();
        let question = self.ready_for(answer)?.clone();
        Ok(self.record(question, answer.trim().to_string(), feedback))
    }

    /// Consumes the session. Questions not reached count as unanswered.
    pub fn finish(self) -> QuizSummary {
        let unanswered = (self.questions.len() - self.answers.len()) as u32;
        let outcomes = self
            .answers
            .iter()
            .map(|a| Outcome::new(a.question.concept_id.clone(), a.feedback.is_correct))
            .collect();
        QuizSummary {
            sheet_id: self.sheet_id,
            mode: self.mode,
            outcomes,
            unanswered,
            timed_out: self.timed_out,
        }
    }

    fn all_answered(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    fn ready_for(&self, answer: &str) -> Result<&QuizQuestion, SheetwiseError> {
        if self.timed_out {
            return Err(SheetwiseError::Validation(
                "exam time is up; the quiz is complete".to_string(),
            ));
        }
        let Some(question) = self.current() else {
            return Err(SheetwiseError::Validation(
                "the quiz is already complete".to_string(),
            ));
        };
        if answer.trim().is_empty() {
            return Err(SheetwiseError::Validation(
                "answer must not be empty".to_string(),
            ));
        }
        Ok(question)
    }

    fn record(
        &mut self,
        question: QuizQuestion,
        answer: String,
        feedback: QuizFeedback,
    ) -> &AnsweredQuestion {
        self.answers.push(AnsweredQuestion {
            question,
            answer,
            feedback,
        });
        &self.answers[self.answers.len() - 1]
    }
}
