use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::question::Question;

/// Stored outcome of answering one question.
///
/// Created once per answer and never mutated; answering the same question
/// again replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub selected_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub points_awarded: u32,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(question: &Question, selected_index: usize, answered_at: DateTime<Utc>) -> Self {
        let is_correct = question.is_correct(selected_index);
        Self {
            selected_index,
            correct_index: question.correct_answer(),
            is_correct,
            points_awarded: if is_correct { question.points() } else { 0 },
            answered_at,
        }
    }
}

/// What the presenter needs to show right after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub explanation: String,
}

impl AnswerFeedback {
    /// Headline shown before the explanation.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.is_correct {
            "Correct!"
        } else {
            "Not quite right"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;
    use crate::time::fixed_now;

    #[test]
    fn record_awards_points_only_when_correct() {
        let q = QuestionDraft::new("Pick", ["A", "B"], 0, "A it is")
            .with_points(3)
            .validate()
            .unwrap();

        let right = AnswerRecord::new(&q, 0, fixed_now());
        assert!(right.is_correct);
        assert_eq!(right.points_awarded, 3);
        assert_eq!(right.correct_index, 0);

        let wrong = AnswerRecord::new(&q, 1, fixed_now());
        assert!(!wrong.is_correct);
        assert_eq!(wrong.points_awarded, 0);
    }
}
