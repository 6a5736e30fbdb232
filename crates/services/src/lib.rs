#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use interview_core::Clock;

pub use error::SessionError;
pub use sessions::{
    AnswerReview, FlowPhase, InterviewFlow, InterviewSession, SessionProgress, SessionReport,
    SubmitOutcome, answer_reviews,
};
