use std::path::Path;

use quiz_core::{Question, QuestionDraft};

use crate::error::CatalogError;

/// Validated, ordered list of questions ready to start a session with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Validates drafts in order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Question` naming the first draft that fails.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, CatalogError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CatalogError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { questions })
    }

    /// Parses a JSON array of question drafts.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input and
    /// `CatalogError::Question` for drafts that fail validation.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
        Self::from_drafts(drafts)
    }

    /// Reads and parses a JSON question file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise as
    /// `from_json_str`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), count = catalog.len(), "loaded question file");
        Ok(catalog)
    }

    /// The built-in two-question sample quiz.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in drafts stop validating.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_drafts(vec![
            QuestionDraft::new(
                "What's the capital of France?",
                ["London", "Berlin", "Paris", "Madrid"],
                2,
                "Paris has been the capital of France since 508 AD.",
            ),
            QuestionDraft::new(
                "Which planet is closest to the Sun?",
                ["Venus", "Mercury", "Earth", "Mars"],
                1,
                "Mercury is the closest planet to the Sun, orbiting at about 36 million miles away.",
            ),
        ])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
