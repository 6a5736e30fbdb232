use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::feedback::ScoreBand;

/// Positive trait detected across a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    ExcellentCommunication,
    PracticalExamples,
    Confidence,
    WellStructured,
}

impl Strength {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Strength::ExcellentCommunication => "excellent overall communication",
            Strength::PracticalExamples => "good use of practical examples",
            Strength::Confidence => "demonstrates confidence in answers",
            Strength::WellStructured => "well-structured answers",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Area the candidate should work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Improvement {
    Clarity,
    PracticalExamples,
    Confidence,
}

impl Improvement {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Improvement::Clarity => "work on clarity and objectivity",
            Improvement::PracticalExamples => "include more practical examples",
            Improvement::Confidence => "show more confidence in answers",
        }
    }
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final performance report for a completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Mean of every answer's overall score, unrounded.
    pub total_score: f64,
    pub strengths: Vec<Strength>,
    pub improvements: Vec<Improvement>,
}

impl Report {
    /// Total score rounded for display.
    #[must_use]
    pub fn rounded_total(&self) -> u8 {
        // total_score is a mean of values in [0, 100].
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = self.total_score.round().clamp(0.0, 100.0) as u8;
        rounded
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.total_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_total_rounds_to_nearest() {
        let report = Report {
            total_score: 72.6,
            strengths: Vec::new(),
            improvements: Vec::new(),
        };
        assert_eq!(report.rounded_total(), 73);
        assert_eq!(report.band(), ScoreBand::Fair);
    }

    #[test]
    fn labels_render_through_display() {
        assert_eq!(
            Strength::ExcellentCommunication.to_string(),
            "excellent overall communication"
        );
        assert_eq!(
            Improvement::PracticalExamples.to_string(),
            "include more practical examples"
        );
    }
}
