mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::InterviewSession;
pub use view::{AnswerReview, SessionReport, answer_reviews};
pub use workflow::{FlowPhase, InterviewFlow, SubmitOutcome};
