use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores below this are flagged with a suggestion.
pub const SUGGESTION_THRESHOLD: u8 = 70;

//
// ─── DIMENSION ─────────────────────────────────────────────────────────────────
//

/// One of the four heuristic sub-scores computed per answer.
///
/// Declaration order is the order suggestions are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Clarity,
    Structure,
    Confidence,
    Examples,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Clarity,
        Dimension::Structure,
        Dimension::Confidence,
        Dimension::Examples,
    ];

    /// Advice attached to an answer when this dimension scores low.
    #[must_use]
    pub fn suggestion(self) -> &'static str {
        match self {
            Dimension::Clarity => "Try to be more specific and objective in your answer",
            Dimension::Structure => "Organize your answer better: situation, action, result",
            Dimension::Confidence => {
                "Show more confidence and avoid words like 'talvez' or 'acho que'"
            }
            Dimension::Examples => "Include practical examples or personal experiences",
        }
    }
}

//
// ─── SCORE BAND ────────────────────────────────────────────────────────────────
//

/// Coarse rating used for inline score indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 80 and above.
    Strong,
    /// 60 to 79.
    Fair,
    /// Below 60.
    Weak,
}

impl ScoreBand {
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Strong
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Fair => "fair",
            ScoreBand::Weak => "weak",
        };
        f.write_str(label)
    }
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Heuristic evaluation of a single answer.
///
/// `overall` is always the mean of the four sub-scores, rounded half up, and
/// `suggestions` list every dimension below [`SUGGESTION_THRESHOLD`]. Both
/// are derived, so deserialization reads only the sub-scores and rebuilds
/// the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SubScores")]
pub struct Feedback {
    clarity: u8,
    structure: u8,
    confidence: u8,
    examples: u8,
    overall: u8,
    suggestions: Vec<String>,
}

#[derive(Deserialize)]
struct SubScores {
    clarity: u8,
    structure: u8,
    confidence: u8,
    examples: u8,
}

impl From<SubScores> for Feedback {
    fn from(raw: SubScores) -> Self {
        Feedback::from_scores(raw.clarity, raw.structure, raw.confidence, raw.examples)
    }
}

impl Feedback {
    /// Builds feedback from the four sub-scores, deriving `overall` and the
    /// suggestion list. Scores above 100 are clamped.
    #[must_use]
    pub fn from_scores(clarity: u8, structure: u8, confidence: u8, examples: u8) -> Self {
        let clarity = clarity.min(100);
        let structure = structure.min(100);
        let confidence = confidence.min(100);
        let examples = examples.min(100);

        let mut feedback = Self {
            clarity,
            structure,
            confidence,
            examples,
            overall: rounded_mean(&[clarity, structure, confidence, examples]),
            suggestions: Vec::new(),
        };
        feedback.suggestions = Dimension::ALL
            .iter()
            .filter(|dimension| feedback.score(**dimension) < SUGGESTION_THRESHOLD)
            .map(|dimension| dimension.suggestion().to_string())
            .collect();
        feedback
    }

    #[must_use]
    pub fn clarity(&self) -> u8 {
        self.clarity
    }

    #[must_use]
    pub fn structure(&self) -> u8 {
        self.structure
    }

    #[must_use]
    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    #[must_use]
    pub fn examples(&self) -> u8 {
        self.examples
    }

    #[must_use]
    pub fn overall(&self) -> u8 {
        self.overall
    }

    /// Advice for each low dimension, in [`Dimension::ALL`] order.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    #[must_use]
    pub fn score(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Clarity => self.clarity,
            Dimension::Structure => self.structure,
            Dimension::Confidence => self.confidence,
            Dimension::Examples => self.examples,
        }
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(f64::from(self.overall))
    }
}

fn rounded_mean(scores: &[u8]) -> u8 {
    let len = u32::try_from(scores.len()).unwrap_or(u32::MAX).max(1);
    let sum: u32 = scores.iter().map(|s| u32::from(*s)).sum();
    // Half rounds up: (sum + len/2) / len.
    u8::try_from((sum + len / 2) / len).unwrap_or(100)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
