mod answer;
mod feedback;
mod ids;
mod question;
mod report;
mod text;

pub use ids::QuestionId;
pub use text::{AnswerText, JobTitle, Response, Text, TextError, TextKind, Title};

pub use answer::Answer;
pub use feedback::{Dimension, Feedback, SUGGESTION_THRESHOLD, ScoreBand};
pub use question::{Difficulty, Question, QuestionCategory};
pub use report::{Improvement, Report, Strength};
