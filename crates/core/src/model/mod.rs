mod answer;
mod media;
mod performance;
mod question;
mod results;

pub use answer::{AnswerFeedback, AnswerRecord};
pub use media::{MediaUri, MediaValidationError};
pub use performance::PerformanceTier;
pub use question::{Question, QuestionDraft, QuestionError};
pub use results::ResultsSummary;
