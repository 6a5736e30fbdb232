use std::mem;

use tracing::{info, warn};

use interview_core::Clock;
use interview_core::model::{AnswerText, Feedback, JobTitle, Question, Report};

use super::progress::SessionProgress;
use super::service::InterviewSession;
use super::view::SessionReport;
use crate::error::SessionError;

/// Screen the host should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    /// Waiting for a job title.
    Input,
    /// Walking through the question battery.
    Questions,
    /// Session finished, report available.
    Report,
}

/// Result of submitting one answer through the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Feedback for the answer; the cursor moved to the next question.
    Continue {
        feedback: Feedback,
        progress: SessionProgress,
    },
    /// Feedback for the final answer and the aggregated report.
    Completed { feedback: Feedback, report: Report },
}

impl SubmitOutcome {
    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        match self {
            SubmitOutcome::Continue { feedback, .. } | SubmitOutcome::Completed { feedback, .. } => {
                feedback
            }
        }
    }
}

enum FlowState {
    Input,
    Questions(InterviewSession),
    Report {
        session: InterviewSession,
        report: Report,
    },
}

/// Host-owned state machine driving `Input -> Questions -> Report`.
///
/// Rejected commands leave the state untouched.
pub struct InterviewFlow {
    clock: Clock,
    state: FlowState,
}

impl Default for InterviewFlow {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl InterviewFlow {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            state: FlowState::Input,
        }
    }

    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        match self.state {
            FlowState::Input => FlowPhase::Input,
            FlowState::Questions(_) => FlowPhase::Questions,
            FlowState::Report { .. } => FlowPhase::Report,
        }
    }

    /// The active or finished session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&InterviewSession> {
        match &self.state {
            FlowState::Input => None,
            FlowState::Questions(session) | FlowState::Report { session, .. } => Some(session),
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match &self.state {
            FlowState::Report { report, .. } => Some(report),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match &self.state {
            FlowState::Questions(session) => session.current_question(),
            _ => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        self.session().map(InterviewSession::progress)
    }

    /// Start a new session for `job_title`, discarding any previous one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Input` when the title is blank.
    pub fn start(&mut self, job_title: &str) -> Result<&[Question], SessionError> {
        let title = JobTitle::parse(job_title).inspect_err(|err| {
            warn!(%err, "rejected job title");
        })?;
        let session = InterviewSession::start(title, self.clock.now());
        self.state = FlowState::Questions(session);
        Ok(self
            .session()
            .map(InterviewSession::questions)
            .unwrap_or_default())
    }

    /// Score and record an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Input` for a blank answer,
    /// `SessionError::NotStarted` before `start` and
    /// `SessionError::Completed` once the report phase is reached.
    pub fn submit_answer(&mut self, text: &str) -> Result<SubmitOutcome, SessionError> {
        let session = match &mut self.state {
            FlowState::Questions(session) => session,
            FlowState::Input => return Err(SessionError::NotStarted),
            FlowState::Report { .. } => return Err(SessionError::Completed),
        };

        let text = AnswerText::parse(text).inspect_err(|err| {
            warn!(%err, "rejected answer");
        })?;
        let feedback = session
            .submit_answer(text, self.clock.now())?
            .feedback()
            .clone();

        if !session.is_complete() {
            return Ok(SubmitOutcome::Continue {
                feedback,
                progress: session.progress(),
            });
        }

        let report = session.report()?;
        if let FlowState::Questions(session) = mem::replace(&mut self.state, FlowState::Input) {
            info!(total_score = report.total_score, "interview report ready");
            self.state = FlowState::Report {
                session,
                report: report.clone(),
            };
        }
        Ok(SubmitOutcome::Completed { feedback, report })
    }

    /// Step back to the previous question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AtFirstQuestion` at index 0,
    /// `SessionError::NotStarted` before `start` and
    /// `SessionError::Completed` in the report phase.
    pub fn go_to_previous(&mut self) -> Result<&Question, SessionError> {
        match &mut self.state {
            FlowState::Questions(session) => session.go_to_previous(),
            FlowState::Input => Err(SessionError::NotStarted),
            FlowState::Report { .. } => Err(SessionError::Completed),
        }
    }

    /// Summary view of the finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` outside the report phase.
    pub fn session_report(&self) -> Result<SessionReport, SessionError> {
        match &self.state {
            FlowState::Report { session, report } => SessionReport::build(session, report),
            _ => Err(SessionError::NotFinished),
        }
    }

    /// Drop all session state and return to `Input`.
    pub fn reset(&mut self) {
        if !matches!(self.state, FlowState::Input) {
            info!("interview session reset");
        }
        self.state = FlowState::Input;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
