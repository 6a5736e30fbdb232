use serde::{Deserialize, Serialize};

use crate::model::feedback::Feedback;
use crate::model::ids::QuestionId;
use crate::model::text::AnswerText;

/// A submitted answer together with the feedback computed at submission.
///
/// Fields are private so a recorded answer cannot be edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    question_id: QuestionId,
    text: AnswerText,
    feedback: Feedback,
}

impl Answer {
    #[must_use]
    pub fn new(question_id: QuestionId, text: AnswerText, feedback: Feedback) -> Self {
        Self {
            question_id,
            text,
            feedback,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}
