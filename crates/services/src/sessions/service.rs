use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info};

use interview_core::model::{Answer, AnswerText, JobTitle, Question, QuestionId, Report};
use interview_core::{aggregate, analyze, generate};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory interview session for one job title.
///
/// Holds the generated battery, a cursor into it and every answer submitted
/// so far. Answers are append-only: moving back and answering again records a
/// second answer rather than replacing the first.
pub struct InterviewSession {
    job_title: JobTitle,
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Answer>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl InterviewSession {
    /// Start a session, generating the question battery for `job_title`.
    ///
    /// `started_at` should come from the services layer clock.
    #[must_use]
    pub fn start(job_title: JobTitle, started_at: DateTime<Utc>) -> Self {
        let questions = generate(&job_title);
        info!(job_title = %job_title, questions = questions.len(), "interview session started");
        Self {
            job_title,
            questions,
            current: 0,
            answers: Vec::new(),
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn job_title(&self) -> &JobTitle {
        &self.job_title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Zero-based cursor into `questions()`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question awaiting an answer, or `None` once complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: (self.current + 1).min(self.questions.len()),
            total: self.questions.len(),
            answered: self.answers.len(),
            is_complete: self.is_complete(),
        }
    }

    /// Look up a question of this session by id.
    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Score `text` against the current question, record it and advance.
    ///
    /// Submitting on the last question completes the session at
    /// `submitted_at`; the cursor stays on that question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn submit_answer(
        &mut self,
        text: AnswerText,
        submitted_at: DateTime<Utc>,
    ) -> Result<&Answer, SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::Completed);
        };

        let feedback = analyze(&text, question);
        let question_id = question.id;
        debug!(%question_id, overall = feedback.overall(), "answer recorded");

        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.completed_at = Some(submitted_at);
            info!(answers = self.answers.len() + 1, "interview session completed");
        }

        self.answers.push(Answer::new(question_id, text, feedback));
        Ok(&self.answers[self.answers.len() - 1])
    }

    /// Move the cursor back one question. Recorded answers are kept.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished and
    /// `SessionError::AtFirstQuestion` when the cursor is at index 0.
    pub fn go_to_previous(&mut self) -> Result<&Question, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.current == 0 {
            return Err(SessionError::AtFirstQuestion);
        }
        self.current -= 1;
        Ok(&self.questions[self.current])
    }

    /// Build the final report for a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` before the last question is
    /// answered. Propagates `SessionError::Report` from aggregation.
    pub fn report(&self) -> Result<Report, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotFinished);
        }
        Ok(aggregate(&self.answers)?)
    }
}

impl fmt::Debug for InterviewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterviewSession")
            .field("job_title", &self.job_title.as_str())
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
