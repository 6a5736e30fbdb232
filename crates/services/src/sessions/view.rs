use chrono::{DateTime, Utc};
use serde::Serialize;

use interview_core::model::{
    Answer, Feedback, Improvement, Question, QuestionCategory, QuestionId, Report, ScoreBand, Strength,
};

use super::service::InterviewSession;
use crate::error::SessionError;

/// Presentation-agnostic row describing one submitted answer.
///
/// Rows follow submission order, so a question answered twice appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerReview {
    /// 1-based submission index.
    pub position: usize,
    pub question_id: QuestionId,
    /// `None` only if the id does not belong to the session battery.
    pub question: Option<String>,
    pub category: Option<QuestionCategory>,
    pub answer: String,
    pub feedback: Feedback,
    pub band: ScoreBand,
}

impl AnswerReview {
    fn new(position: usize, question: Option<&Question>, answer: &Answer) -> Self {
        Self {
            position,
            question_id: answer.question_id(),
            question: question.map(|q| q.text.clone()),
            category: question.map(|q| q.category),
            answer: answer.text().to_string(),
            feedback: answer.feedback().clone(),
            band: answer.feedback().band(),
        }
    }
}

/// Everything the summary screen needs for a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub job_title: String,
    pub total_score: f64,
    pub rounded_total: u8,
    pub band: ScoreBand,
    pub strengths: Vec<Strength>,
    pub improvements: Vec<Improvement>,
    pub answers: Vec<AnswerReview>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl SessionReport {
    /// Combine a completed session with its aggregated report.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` if the session is still running.
    pub fn build(session: &InterviewSession, report: &Report) -> Result<Self, SessionError> {
        let completed_at = session.completed_at().ok_or(SessionError::NotFinished)?;
        Ok(Self {
            job_title: session.job_title().as_str().to_string(),
            total_score: report.total_score,
            rounded_total: report.rounded_total(),
            band: report.band(),
            strengths: report.strengths.clone(),
            improvements: report.improvements.clone(),
            answers: answer_reviews(session),
            started_at: session.started_at(),
            completed_at,
        })
    }

    /// Seconds between start and completion.
    #[must_use]
    pub fn duration_secs(&self) -> i64 {
        (self.completed_at - self.started_at).num_seconds()
    }
}

/// Per-answer review rows for `session`, in submission order.
#[must_use]
pub fn answer_reviews(session: &InterviewSession) -> Vec<AnswerReview> {
    session
        .answers()
        .iter()
        .enumerate()
        .map(|(idx, answer)| {
            AnswerReview::new(idx + 1, session.question(answer.question_id()), answer)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use interview_core::model::{AnswerText, JobTitle};
    use interview_core::time::fixed_now;

    fn completed_session() -> InterviewSession {
        let mut session =
            InterviewSession::start(JobTitle::parse("Gerente de Vendas").unwrap(), fixed_now());
        let done_at = fixed_now() + Duration::minutes(12);
        while !session.is_complete() {
            session
                .submit_answer(AnswerText::parse("Sim").unwrap(), done_at)
                .unwrap();
        }
        session
    }

    #[test]
    fn reviews_follow_submission_order() {
        let session = completed_session();
        let reviews = answer_reviews(&session);
        assert_eq!(reviews.len(), 10);
        assert_eq!(reviews[0].position, 1);
        assert_eq!(reviews[0].category, Some(QuestionCategory::General));
        assert_eq!(reviews[9].category, Some(QuestionCategory::Situational));
        assert_eq!(reviews[3].question.as_deref(), Some(session.questions()[3].text.as_str()));
        assert_eq!(reviews[0].band, ScoreBand::Weak);
    }

    #[test]
    fn report_view_carries_totals_and_timing() {
        let session = completed_session();
        let report = session.report().unwrap();
        let view = SessionReport::build(&session, &report).unwrap();

        assert_eq!(view.job_title, "Gerente de Vendas");
        assert_eq!(view.rounded_total, report.rounded_total());
        assert_eq!(view.duration_secs(), 12 * 60);
        assert_eq!(view.answers.len(), 10);
    }

    #[test]
    fn report_view_serializes_labels_as_snake_case() {
        let session = completed_session();
        let report = session.report().unwrap();
        let view = SessionReport::build(&session, &report).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["improvements"][0], "clarity");
        assert_eq!(json["answers"][0]["feedback"]["clarity"], 45);
    }
}
