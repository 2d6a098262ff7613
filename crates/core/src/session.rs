use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerFeedback, AnswerRecord, PerformanceTier, Question, ResultsSummary};
use crate::time::rounded_seconds_between;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Which index a caller got wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Question,
    Option,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Question => f.write_str("question"),
            IndexKind::Option => f.write_str("option"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a quiz needs at least one question")]
    EmptyQuestionSet,

    #[error("{kind} index {index} is out of range (len {len})")]
    InvalidIndex {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
}

//
// ─── VIEWS ─────────────────────────────────────────────────────────────────────
//

/// What sits under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentQuestion<'a> {
    Question { index: usize, question: &'a Question },
    Complete,
}

impl<'a> CurrentQuestion<'a> {
    #[must_use]
    pub fn question(self) -> Option<&'a Question> {
        match self {
            CurrentQuestion::Question { question, .. } => Some(question),
            CurrentQuestion::Complete => None,
        }
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(self, CurrentQuestion::Complete)
    }
}

/// Aggregated view of session progress, for "question N of M" displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    /// 1-based position of the current question; `total` once complete.
    pub position: usize,
    pub score: u64,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a fixed list of questions.
///
/// The session is complete once the cursor reaches the end of the list. There
/// is no stored flag for it and nothing moves the cursor back.
#[derive(Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: BTreeMap<usize, AnswerRecord>,
    score: u64,
    cursor: usize,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Starts a session over `questions`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQuestionSet` if `questions` is empty.
    pub fn new(
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuestionSet);
        }
        Ok(Self {
            questions,
            answers: BTreeMap::new(),
            score: 0,
            cursor: 0,
            started_at,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, AnswerRecord> {
        &self.answers
    }

    /// Stored record for a question, if it has been answered.
    #[must_use]
    pub fn answer(&self, question_index: usize) -> Option<&AnswerRecord> {
        self.answers.get(&question_index)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> CurrentQuestion<'_> {
        match self.questions.get(self.cursor) {
            Some(question) => CurrentQuestion::Question {
                index: self.cursor,
                question,
            },
            None => CurrentQuestion::Complete,
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.total_questions();
        SessionProgress {
            total,
            answered: self.answered_count(),
            remaining: total.saturating_sub(self.cursor),
            position: (self.cursor + 1).min(total),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Records the answer for `question_index` and reports whether it was right.
    ///
    /// Answering a question again replaces its record; the old points are
    /// taken out of the score before the new ones go in.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidIndex` if either index is out of range.
    /// The session is left untouched in that case.
    pub fn record_answer(
        &mut self,
        question_index: usize,
        selected_index: usize,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerFeedback, SessionError> {
        let question = self
            .questions
            .get(question_index)
            .ok_or(SessionError::InvalidIndex {
                kind: IndexKind::Question,
                index: question_index,
                len: self.questions.len(),
            })?;
        if selected_index >= question.option_count() {
            return Err(SessionError::InvalidIndex {
                kind: IndexKind::Option,
                index: selected_index,
                len: question.option_count(),
            });
        }

        let record = AnswerRecord::new(question, selected_index, answered_at);
        let feedback = AnswerFeedback {
            is_correct: record.is_correct,
            explanation: question.explanation().to_string(),
        };

        // A `u64` holds the sum of `u32` points for any question list that fits in memory.
        let awarded = u64::from(record.points_awarded);
        if let Some(previous) = self.answers.insert(question_index, record) {
            self.score -= u64::from(previous.points_awarded);
        }
        self.score += awarded;

        Ok(feedback)
    }

    /// Moves to the next question. Once complete, further calls do nothing.
    pub fn advance(&mut self) {
        if !self.is_complete() {
            self.cursor += 1;
        }
    }

    /// Summary of the session as of `now`. Valid at any point, not only once complete.
    #[must_use]
    pub fn compute_results(&self, now: DateTime<Utc>) -> ResultsSummary {
        ResultsSummary::new(
            self.score,
            self.questions.len(),
            rounded_seconds_between(self.started_at, now),
            self.answers.clone(),
        )
    }

    #[must_use]
    pub fn performance_tier(percentage: u32) -> PerformanceTier {
        PerformanceTier::from_percentage(percentage)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("answers_len", &self.answers.len())
            .field("score", &self.score)
            .field("cursor", &self.cursor)
            .field("started_at", &self.started_at)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
