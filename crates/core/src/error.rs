use thiserror::Error;

use crate::model::{MediaValidationError, QuestionError};
use crate::session::SessionError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    MediaValidation(#[from] MediaValidationError),
    #[error(transparent)]
    QuestionValidation(#[from] QuestionError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
