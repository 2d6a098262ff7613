use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::answer::AnswerRecord;
use crate::model::performance::PerformanceTier;

/// Derived summary of a quiz session, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    score: u64,
    total_questions: usize,
    percentage: u32,
    elapsed_seconds: u64,
    answers: BTreeMap<usize, AnswerRecord>,
    performance: PerformanceTier,
}

impl ResultsSummary {
    /// Builds a summary. The percentage is always taken against
    /// `total_questions`, answered or not.
    #[must_use]
    pub fn new(
        score: u64,
        total_questions: usize,
        elapsed_seconds: u64,
        answers: BTreeMap<usize, AnswerRecord>,
    ) -> Self {
        let percentage = rounded_percentage(score, total_questions);
        Self {
            score,
            total_questions,
            percentage,
            elapsed_seconds,
            answers,
            performance: PerformanceTier::from_percentage(percentage),
        }
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, AnswerRecord> {
        &self.answers
    }

    #[must_use]
    pub fn performance(&self) -> PerformanceTier {
        self.performance
    }

    /// Text handed to whatever share mechanism the presenter has.
    #[must_use]
    pub fn share_text(&self) -> String {
        format!(
            "I just scored {}% on this quiz! Can you beat my score?",
            self.percentage
        )
    }

    /// Share text followed by a link back to the quiz, for clipboard copies.
    #[must_use]
    pub fn share_text_with_link(&self, url: &str) -> String {
        format!("{} {url}", self.share_text())
    }
}

/// `round(score / total * 100)` with halves rounded up. Zero questions yields zero.
///
/// Weighted questions can push this past 100; values beyond `u32::MAX` saturate.
#[must_use]
pub fn rounded_percentage(score: u64, total_questions: usize) -> u32 {
    let Ok(total) = u128::try_from(total_questions) else {
        return 0;
    };
    if total == 0 {
        return 0;
    }
    let scaled = (u128::from(score) * 200 + total) / (2 * total);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
