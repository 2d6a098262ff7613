#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod presenter;
pub mod quiz_loop;
pub mod share;

pub use quiz_core::Clock;

pub use catalog::QuestionCatalog;
pub use error::{CatalogError, QuizLoopError, ShareError};
pub use presenter::Presenter;
pub use quiz_loop::{DEFAULT_FEEDBACK_DELAY, LoopStep, QuizLoopService};
pub use share::{ShareOutcome, ShareRequest, ShareService, ShareTarget};
