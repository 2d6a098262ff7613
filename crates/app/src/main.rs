mod config;
mod terminal;

use std::io;

use quiz_core::{CurrentQuestion, QuizSession, ResultsSummary};
use quiz_services::{
    Clock, LoopStep, QuestionCatalog, QuizLoopService, ShareOutcome, ShareService,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Invocation, print_usage};
use crate::terminal::{ResultsAction, TerminalPresenter, TerminalShare, parse_choice};

type Input = Lines<BufReader<Stdin>>;

/// Next input line, or `None` on end of input or cancellation.
async fn read_line(input: &mut Input, cancel: &CancellationToken) -> io::Result<Option<String>> {
    tokio::select! {
        () = cancel.cancelled() => Ok(None),
        line = input.next_line() => line,
    }
}

async fn play(
    svc: &QuizLoopService,
    session: &mut QuizSession,
    presenter: &mut TerminalPresenter<io::Stdout>,
    input: &mut Input,
    cancel: &CancellationToken,
) -> Result<LoopStep, Box<dyn std::error::Error>> {
    let mut step = svc.render_current(session, presenter);

    while let LoopStep::Question { .. } = step {
        let option_count = match session.current_question() {
            CurrentQuestion::Question { question, .. } => question.option_count(),
            CurrentQuestion::Complete => break,
        };

        presenter.prompt(&format!("Your answer [1-{option_count}, q to quit]: "));
        let Some(line) = read_line(input, cancel).await? else {
            return Ok(LoopStep::Cancelled);
        };
        if line.trim().eq_ignore_ascii_case("q") {
            tracing::info!(cursor = session.cursor(), "quiz abandoned");
            return Ok(LoopStep::Cancelled);
        }
        let Some(selected) = parse_choice(&line, option_count) else {
            presenter.notice(&format!("Please pick a number between 1 and {option_count}."));
            continue;
        };

        svc.answer_current(session, selected, presenter)?;
        step = svc.advance_after_delay(session, presenter, cancel).await;
    }

    Ok(step)
}

/// Results menu. Returns `true` when the player asked to try again.
async fn results_menu(
    share: &ShareService,
    summary: &ResultsSummary,
    presenter: &mut TerminalPresenter<io::Stdout>,
    input: &mut Input,
    cancel: &CancellationToken,
) -> io::Result<bool> {
    loop {
        presenter.prompt(ResultsAction::PROMPT);
        let Some(line) = read_line(input, cancel).await? else {
            return Ok(false);
        };
        match ResultsAction::parse(&line) {
            Some(ResultsAction::TryAgain) => return Ok(true),
            Some(ResultsAction::Quit) => return Ok(false),
            Some(ResultsAction::Share) => {
                match share.share(summary, &mut TerminalShare::new(io::stdout())) {
                    Ok(ShareOutcome::Shared | ShareOutcome::Copied) => {}
                    Err(err) => {
                        // Sharing is optional; the quiz is already over.
                        tracing::warn!(error = %err, "sharing results failed");
                        presenter.notice("Could not share results.");
                    }
                }
            }
            None => presenter.notice("Please enter t, s or q."),
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let config = match AppConfig::from_env(|key| std::env::var(key).ok()).parse_args(&mut args)
    {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            return Err(e.into());
        }
    };

    // Logs go to stderr so they never interleave with the quiz screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.rust_log))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let catalog = match &config.questions {
        Some(path) => QuestionCatalog::from_json_file(path)?,
        None => QuestionCatalog::sample()?,
    };

    let svc = QuizLoopService::new(Clock::system()).with_feedback_delay(config.feedback_delay);
    let mut session = svc.start(catalog.into_questions())?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let mut presenter = TerminalPresenter::new(io::stdout());
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    let share = ShareService::new(config.share_url.clone());
    loop {
        let step = play(&svc, &mut session, &mut presenter, &mut input, &cancel).await?;
        let LoopStep::Finished(summary) = step else {
            let partial = svc.results(&session);
            tracing::info!(
                score = partial.score(),
                percentage = partial.percentage(),
                "quiz ended early"
            );
            break;
        };

        if !results_menu(&share, &summary, &mut presenter, &mut input, &cancel).await? {
            break;
        }
        session = svc.play_again(&session)?;
    }

    presenter.notice("Goodbye!");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
