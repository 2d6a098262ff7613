use quiz_core::{AnswerFeedback, Question, ResultsSummary, SessionProgress};

/// Rendering side of a quiz.
///
/// Implementations draw whatever they are handed and keep no quiz state of
/// their own; every call carries everything needed for a full redraw.
pub trait Presenter {
    fn show_question(&mut self, progress: &SessionProgress, question: &Question);

    /// Called right after an answer, with the question so the correct option can be marked.
    fn show_feedback(&mut self, question: &Question, feedback: &AnswerFeedback);

    fn show_results(&mut self, summary: &ResultsSummary);
}
