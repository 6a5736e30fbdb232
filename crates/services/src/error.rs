//! Shared error types for the services crate.

use thiserror::Error;

use interview_core::ReportError;
use interview_core::model::TextError;

/// Errors emitted by session services.
///
/// `Input` is recoverable by re-prompting the user. The remaining variants
/// mean the host issued a command that is invalid for the current state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] TextError),
    #[error("no interview in progress")]
    NotStarted,
    #[error("session already completed")]
    Completed,
    #[error("session has unanswered questions")]
    NotFinished,
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl SessionError {
    /// True when the error came from user input rather than host misuse.
    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(self, SessionError::Input(_))
    }
}
