use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::media::{MediaUri, MediaValidationError};

/// Point value of a question when the configuration does not set one.
pub const DEFAULT_POINTS: u32 = 1;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    BlankText,

    #[error("a question needs at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct answer {index} is out of range for {count} options")]
    CorrectAnswerOutOfRange { index: usize, count: usize },

    #[error("question points must be > 0")]
    ZeroPoints,

    #[error("invalid question image: {0}")]
    Media(#[source] MediaValidationError),
}

//
// ─── DRAFT (static configuration) ──────────────────────────────────────────────
//

/// Unvalidated question as it appears in quiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_points")]
    pub points: u32,
}

fn default_points() -> u32 {
    DEFAULT_POINTS
}

impl QuestionDraft {
    pub fn new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer,
            explanation: explanation.into(),
            image: None,
            points: DEFAULT_POINTS,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Checks the draft and turns it into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is blank, fewer than two options
    /// are given, the correct answer does not index an option, the point
    /// value is zero, or the image reference cannot be parsed.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::BlankText);
        }
        let count = self.options.len();
        if count < 2 {
            return Err(QuestionError::TooFewOptions { count });
        }
        if self.correct_answer >= count {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                index: self.correct_answer,
                count,
            });
        }
        if self.points == 0 {
            return Err(QuestionError::ZeroPoints);
        }
        let image = self
            .image
            .map(MediaUri::parse)
            .transpose()
            .map_err(QuestionError::Media)?;

        Ok(Question {
            text: self.text,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            image,
            points: self.points,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice quiz item. Never mutated after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_answer: usize,
    explanation: String,
    image: Option<MediaUri>,
    points: u32,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    /// Text of the correct option, for highlighting after an answer.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaUri> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_of_france() -> QuestionDraft {
        QuestionDraft::new(
            "What's the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
            "Paris has been the capital of France since 508 AD.",
        )
    }

    #[test]
    fn valid_draft_becomes_question() {
        let q = capital_of_france().validate().unwrap();
        assert_eq!(q.option_count(), 4);
        assert_eq!(q.correct_option(), "Paris");
        assert_eq!(q.points(), DEFAULT_POINTS);
        assert!(q.is_correct(2));
        assert!(!q.is_correct(0));
        assert!(q.image().is_none());
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut draft = capital_of_france();
        draft.text = "  ".into();
        assert_eq!(draft.validate().unwrap_err(), QuestionError::BlankText);
    }

    #[test]
    fn single_option_is_rejected() {
        let draft = QuestionDraft::new("Only one?", ["Yes"], 0, "");
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionError::TooFewOptions { count: 1 }
        );
    }

    #[test]
    fn correct_answer_must_index_an_option() {
        let draft = QuestionDraft::new("Pick", ["A", "B"], 2, "");
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionError::CorrectAnswerOutOfRange { index: 2, count: 2 }
        );
    }

    #[test]
    fn zero_points_is_rejected() {
        let draft = capital_of_france().with_points(0);
        assert_eq!(draft.validate().unwrap_err(), QuestionError::ZeroPoints);
    }

    #[test]
    fn image_reference_is_parsed() {
        let q = capital_of_france()
            .with_image("https://example.com/paris.jpg")
            .validate()
            .unwrap();
        assert!(q.image().and_then(MediaUri::as_url).is_some());

        let err = capital_of_france().with_image(" ").validate().unwrap_err();
        assert!(matches!(err, QuestionError::Media(_)));
    }

    #[test]
    fn draft_reads_camel_case_configuration() {
        let draft: QuestionDraft = serde_json::from_str(
            r#"{
                "text": "Which planet is closest to the Sun?",
                "options": ["Venus", "Mercury", "Earth", "Mars"],
                "correctAnswer": 1,
                "explanation": "Mercury."
            }"#,
        )
        .unwrap();
        assert_eq!(draft.correct_answer, 1);
        assert_eq!(draft.points, DEFAULT_POINTS);
        assert!(draft.image.is_none());
    }
}
