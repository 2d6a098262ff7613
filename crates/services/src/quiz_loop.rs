use std::time::Duration;

use quiz_core::{AnswerFeedback, CurrentQuestion, Question, QuizSession, ResultsSummary};
use tokio_util::sync::CancellationToken;

use crate::Clock;
use crate::error::QuizLoopError;
use crate::presenter::Presenter;

/// Pause between showing feedback and moving on to the next question.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

/// What the presenter is showing after a loop step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopStep {
    Question { index: usize },
    Finished(ResultsSummary),
    /// The pending advance was dropped; the session did not move.
    Cancelled,
}

/// Drives a `QuizSession` on behalf of a presenter.
///
/// The session itself stays owned by the caller and is only borrowed per call.
#[derive(Debug, Clone)]
pub struct QuizLoopService {
    clock: Clock,
    feedback_delay: Duration,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }

    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    /// Start a new session at the current clock time.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` if `questions` is empty.
    pub fn start(&self, questions: Vec<Question>) -> Result<QuizSession, QuizLoopError> {
        let session = QuizSession::new(questions, self.clock.now())?;
        tracing::info!(questions = session.total_questions(), "quiz started");
        Ok(session)
    }

    /// Start over with the questions of `previous`.
    ///
    /// The new session has its own answers, score and start time; `previous`
    /// is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` if the question list is rejected.
    pub fn play_again(&self, previous: &QuizSession) -> Result<QuizSession, QuizLoopError> {
        tracing::info!(previous_score = previous.score(), "restarting quiz");
        self.start(previous.questions().to_vec())
    }

    /// Draw whatever is under the cursor: the question, or the results once complete.
    pub fn render_current<P>(&self, session: &QuizSession, presenter: &mut P) -> LoopStep
    where
        P: Presenter + ?Sized,
    {
        match session.current_question() {
            CurrentQuestion::Question { index, question } => {
                presenter.show_question(&session.progress(), question);
                LoopStep::Question { index }
            }
            CurrentQuestion::Complete => {
                let summary = self.results(session);
                tracing::info!(
                    score = summary.score(),
                    total = summary.total_questions(),
                    percentage = summary.percentage(),
                    tier = %summary.performance(),
                    "quiz completed"
                );
                presenter.show_results(&summary);
                LoopStep::Finished(summary)
            }
        }
    }

    /// Answer the question under the cursor and show feedback.
    ///
    /// The cursor does not move; follow up with `advance_after_delay`.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Completed` if the session is complete.
    /// Returns `QuizLoopError::Session` if `selected` is not a valid option.
    pub fn answer_current<P>(
        &self,
        session: &mut QuizSession,
        selected: usize,
        presenter: &mut P,
    ) -> Result<AnswerFeedback, QuizLoopError>
    where
        P: Presenter + ?Sized,
    {
        let CurrentQuestion::Question { index, .. } = session.current_question() else {
            return Err(QuizLoopError::Completed);
        };

        let feedback = session.record_answer(index, selected, self.clock.now())?;
        tracing::debug!(
            question = index,
            selected,
            correct = feedback.is_correct,
            score = session.score(),
            "answer recorded"
        );

        if let Some(question) = session.questions().get(index) {
            presenter.show_feedback(question, &feedback);
        }
        Ok(feedback)
    }

    /// Wait out the feedback delay, then advance and redraw.
    ///
    /// If `cancel` fires first the session is left where it was.
    pub async fn advance_after_delay<P>(
        &self,
        session: &mut QuizSession,
        presenter: &mut P,
        cancel: &CancellationToken,
    ) -> LoopStep
    where
        P: Presenter + ?Sized,
    {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!(cursor = session.cursor(), "pending advance cancelled");
                return LoopStep::Cancelled;
            }
            () = tokio::time::sleep(self.feedback_delay) => {}
        }

        session.advance();
        tracing::debug!(cursor = session.cursor(), "advanced");
        self.render_current(session, presenter)
    }

    /// Results as of now, whether or not the session is complete.
    #[must_use]
    pub fn results(&self, session: &QuizSession) -> ResultsSummary {
        session.compute_results(self.clock.now())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;
    use quiz_core::{QuestionDraft, SessionProgress};

    #[derive(Debug, Default)]
    struct Recording {
        questions: Vec<(usize, String)>,
        feedback: Vec<(bool, String)>,
        results: Vec<u32>,
    }

    impl Presenter for Recording {
        fn show_question(&mut self, progress: &SessionProgress, question: &Question) {
            self.questions
                .push((progress.position, question.text().to_string()));
        }

        fn show_feedback(&mut self, question: &Question, feedback: &AnswerFeedback) {
            self.feedback
                .push((feedback.is_correct, question.correct_option().to_string()));
        }

        fn show_results(&mut self, summary: &ResultsSummary) {
            self.results.push(summary.percentage());
        }
    }

    fn questions() -> Vec<Question> {
        vec![
            QuestionDraft::new("First", ["A", "B", "C", "D"], 2, "C")
                .validate()
                .unwrap(),
            QuestionDraft::new("Second", ["A", "B"], 0, "A")
                .validate()
                .unwrap(),
        ]
    }

    fn service() -> QuizLoopService {
        QuizLoopService::new(Clock::fixed(fixed_now()))
    }

    #[test]
    fn start_rejects_empty_question_list() {
        let err = service().start(Vec::new()).unwrap_err();
        assert!(matches!(err, QuizLoopError::Session(_)));
    }

    #[test]
    fn answer_shows_feedback_without_advancing() {
        let svc = service();
        let mut session = svc.start(questions()).unwrap();
        let mut presenter = Recording::default();

        assert_eq!(
            svc.render_current(&session, &mut presenter),
            LoopStep::Question { index: 0 }
        );
        let feedback = svc.answer_current(&mut session, 2, &mut presenter).unwrap();

        assert!(feedback.is_correct);
        assert_eq!(session.cursor(), 0);
        assert_eq!(presenter.questions, vec![(1, "First".to_string())]);
        assert_eq!(presenter.feedback, vec![(true, "C".to_string())]);
    }

    #[test]
    fn answering_a_complete_session_fails() {
        let svc = service();
        let mut session = svc.start(questions()).unwrap();
        session.advance();
        session.advance();

        let err = svc
            .answer_current(&mut session, 0, &mut Recording::default())
            .unwrap_err();
        assert!(matches!(err, QuizLoopError::Completed));
    }

    #[test]
    fn play_again_starts_a_fresh_session() {
        let first = service();
        let mut session = first.start(questions()).unwrap();
        first
            .answer_current(&mut session, 2, &mut Recording::default())
            .unwrap();
        session.advance();
        session.advance();
        assert!(session.is_complete());

        let later = fixed_now() + chrono::Duration::seconds(90);
        let again = QuizLoopService::new(Clock::fixed(later))
            .play_again(&session)
            .unwrap();

        assert_eq!(again.cursor(), 0);
        assert_eq!(again.score(), 0);
        assert!(again.answers().is_empty());
        assert_eq!(again.started_at(), later);
        assert_eq!(again.questions(), session.questions());
        assert_eq!(session.score(), 1);
        assert_eq!(session.answered_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn advance_waits_then_moves_on() {
        let svc = service();
        let mut session = svc.start(questions()).unwrap();
        let mut presenter = Recording::default();
        let cancel = CancellationToken::new();

        svc.answer_current(&mut session, 2, &mut presenter).unwrap();
        let step = svc
            .advance_after_delay(&mut session, &mut presenter, &cancel)
            .await;
        assert_eq!(step, LoopStep::Question { index: 1 });

        svc.answer_current(&mut session, 1, &mut presenter).unwrap();
        let step = svc
            .advance_after_delay(&mut session, &mut presenter, &cancel)
            .await;
        match step {
            LoopStep::Finished(summary) => {
                assert_eq!(summary.score(), 1);
                assert_eq!(summary.percentage(), 50);
            }
            other => panic!("expected results, got {other:?}"),
        }
        assert_eq!(presenter.results, vec![50]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_advance_leaves_cursor() {
        let svc = service();
        let mut session = svc.start(questions()).unwrap();
        let mut presenter = Recording::default();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let step = svc
            .advance_after_delay(&mut session, &mut presenter, &cancel)
            .await;
        assert_eq!(step, LoopStep::Cancelled);
        assert_eq!(session.cursor(), 0);
        assert!(presenter.questions.is_empty());
    }
}
