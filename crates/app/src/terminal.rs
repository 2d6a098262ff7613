use std::io::Write;

use quiz_core::{AnswerFeedback, Question, ResultsSummary, SessionProgress};
use quiz_services::{Presenter, ShareError, ShareRequest, ShareTarget};

/// Plain-text presenter. Write errors are dropped: a broken terminal has
/// nowhere left to report them.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn prompt(&mut self, text: &str) {
        let _ = write!(self.out, "{text}");
        let _ = self.out.flush();
    }

    pub fn notice(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_question(&mut self, progress: &SessionProgress, question: &Question) {
        let _ = writeln!(self.out);
        let _ = writeln!(
            self.out,
            "Question {} of {}    Score: {}",
            progress.position, progress.total, progress.score
        );
        let _ = writeln!(self.out, "{}", question.text());
        if let Some(image) = question.image() {
            let _ = writeln!(self.out, "[image: {image}]");
        }
        for (i, option) in question.options().iter().enumerate() {
            let _ = writeln!(self.out, "  {}) {option}", i + 1);
        }
    }

    fn show_feedback(&mut self, question: &Question, feedback: &AnswerFeedback) {
        let _ = writeln!(self.out, "{} {}", feedback.headline(), feedback.explanation);
        if !feedback.is_correct {
            let _ = writeln!(self.out, "The answer was: {}", question.correct_option());
        }
    }

    fn show_results(&mut self, summary: &ResultsSummary) {
        let tier = summary.performance();
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "Quiz Complete!");
        let _ = writeln!(
            self.out,
            "{}/{}",
            summary.score(),
            summary.total_questions()
        );
        let _ = writeln!(self.out, "{}%", summary.percentage());
        let _ = writeln!(self.out, "{}", tier.level());
        let _ = writeln!(self.out, "{}", tier.message());
        let _ = writeln!(
            self.out,
            "Completed in {} seconds",
            summary.elapsed_seconds()
        );
    }
}

/// Terminals have no share sheet, so sharing always lands on the "clipboard",
/// which here means printing the text for the user to copy.
pub struct TerminalShare<W: Write> {
    out: W,
}

impl<W: Write> TerminalShare<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ShareTarget for TerminalShare<W> {
    fn native_share(&mut self, _request: &ShareRequest) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), ShareError> {
        writeln!(self.out, "{text}")
            .and_then(|()| writeln!(self.out, "Results ready to copy!"))
            .map_err(|e| ShareError::Failed(e.to_string()))
    }
}

/// Turns a 1-based menu choice into an option index.
pub fn parse_choice(line: &str, option_count: usize) -> Option<usize> {
    let choice: usize = line.trim().parse().ok()?;
    (1..=option_count).contains(&choice).then(|| choice - 1)
}

/// Choice offered on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    TryAgain,
    Share,
    Quit,
}

impl ResultsAction {
    pub const PROMPT: &'static str = "[t]ry again / [s]hare / [q]uit: ";

    /// Accepts the first letter or the whole word, in any case.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "t" | "try" | "try again" => Some(Self::TryAgain),
            "s" | "share" => Some(Self::Share),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}
