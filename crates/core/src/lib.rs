#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod time;

pub use error::Error;
pub use model::{
    AnswerFeedback, AnswerRecord, MediaUri, MediaValidationError, PerformanceTier, Question,
    QuestionDraft, QuestionError, ResultsSummary,
};
pub use session::{CurrentQuestion, IndexKind, QuizSession, SessionError, SessionProgress};
pub use time::Clock;
