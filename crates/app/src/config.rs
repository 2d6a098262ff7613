use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use quiz_services::DEFAULT_FEEDBACK_DELAY;

pub const DEFAULT_SHARE_URL: &str = "https://quiz.local/";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDelay { raw: String },
    InvalidPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --delay-ms value: {raw}"),
            ArgsError::InvalidPath { raw } => write!(f, "invalid --questions value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Runtime settings: defaults, then environment, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON question file; the built-in sample quiz runs when unset.
    pub questions: Option<PathBuf>,
    pub feedback_delay: Duration,
    pub share_url: String,
    pub rust_log: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            questions: None,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            share_url: DEFAULT_SHARE_URL.to_string(),
            rust_log: "info".to_string(),
        }
    }
}

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(AppConfig),
    Help,
}

impl AppConfig {
    /// Layers environment variables over the defaults.
    ///
    /// Unparseable values are ignored in favour of the default, as flags can
    /// still override them.
    pub fn from_env<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup("QUIZ_QUESTIONS").filter(|v| !v.trim().is_empty()) {
            config.questions = Some(PathBuf::from(path));
        }
        if let Some(ms) = lookup("QUIZ_FEEDBACK_DELAY_MS").and_then(|v| v.parse::<u64>().ok()) {
            config.feedback_delay = Duration::from_millis(ms);
        }
        if let Some(url) = lookup("QUIZ_SHARE_URL").filter(|v| !v.trim().is_empty()) {
            config.share_url = url;
        }
        if let Some(filter) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
            config.rust_log = filter;
        }
        config
    }

    /// Applies command-line flags on top of `self`.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags, missing values or bad numbers.
    pub fn parse_args(
        mut self,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Invocation, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidPath { raw: value });
                    }
                    self.questions = Some(PathBuf::from(value));
                }
                "--delay-ms" => {
                    let value = require_value(args, "--delay-ms")?;
                    let ms: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDelay { raw: value.clone() })?;
                    self.feedback_delay = Duration::from_millis(ms);
                }
                "--share-url" => {
                    self.share_url = require_value(args, "--share-url")?;
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Invocation::Run(self))
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz-app [--questions <file.json>] [--delay-ms <ms>] [--share-url <url>]");
    eprintln!();
    eprintln!("Without --questions the built-in sample quiz runs.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_FEEDBACK_DELAY_MS, QUIZ_SHARE_URL, RUST_LOG");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter().map(|s| (*s).to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_env(env(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.feedback_delay, Duration::from_millis(2000));
    }

    #[test]
    fn env_overrides_defaults_and_skips_garbage() {
        let config = AppConfig::from_env(env(&[
            ("QUIZ_QUESTIONS", "quiz.json"),
            ("QUIZ_FEEDBACK_DELAY_MS", "soon"),
            ("RUST_LOG", "debug"),
        ]));
        assert_eq!(config.questions, Some(PathBuf::from("quiz.json")));
        assert_eq!(config.feedback_delay, DEFAULT_FEEDBACK_DELAY);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn flags_override_env() {
        let base = AppConfig::from_env(env(&[("QUIZ_FEEDBACK_DELAY_MS", "500")]));
        let parsed = base
            .parse_args(&mut args(&["--delay-ms", "10", "--questions", "q.json"]))
            .unwrap();
        let Invocation::Run(config) = parsed else {
            panic!("expected run");
        };
        assert_eq!(config.feedback_delay, Duration::from_millis(10));
        assert_eq!(config.questions, Some(PathBuf::from("q.json")));
    }

    #[test]
    fn bad_flags_are_reported() {
        let err = AppConfig::default()
            .parse_args(&mut args(&["--delay-ms"]))
            .unwrap_err();
        assert_eq!(err, ArgsError::MissingValue { flag: "--delay-ms" });

        let err = AppConfig::default()
            .parse_args(&mut args(&["--delay-ms", "x"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid --delay-ms value: x");

        let err = AppConfig::default()
            .parse_args(&mut args(&["--nope"]))
            .unwrap_err();
        assert_eq!(err, ArgsError::UnknownArg("--nope".into()));
    }

    #[test]
    fn help_flag() {
        let parsed = AppConfig::default().parse_args(&mut args(&["-h"])).unwrap();
        assert_eq!(parsed, Invocation::Help);
    }
}
