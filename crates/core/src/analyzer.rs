//! Heuristic scoring of a single free-text answer.
//!
//! Every rule is a plain text check; nothing here understands language.

use tracing::debug;

use crate::model::{AnswerText, Feedback, Question};

/// Word counts in this range (inclusive) read as clear.
const CLEAR_WORD_RANGE: std::ops::RangeInclusive<usize> = 20..=150;

/// Trimmed answers longer than this many characters count as structured.
const STRUCTURED_MIN_CHARS: usize = 50;

const HEDGING_MARKERS: [&str; 4] = ["talvez", "acho que", "não sei", "meio que"];

const EXAMPLE_MARKERS: [&str; 5] = ["exemplo", "experiência", "situação", "quando", "vez que"];

const CLARITY_CLEAR: u8 = 85;
const CLARITY_TOO_SHORT: u8 = 45;
const CLARITY_TOO_LONG: u8 = 70;

const STRUCTURE_OK: u8 = 80;
const STRUCTURE_WEAK: u8 = 50;

const CONFIDENCE_OK: u8 = 85;
const CONFIDENCE_HEDGING: u8 = 60;

const EXAMPLES_PRESENT: u8 = 90;
const EXAMPLES_MISSING: u8 = 40;

/// Scores `answer` and returns its feedback.
///
/// `_question` is part of the contract but scoring is identical for every
/// category and difficulty.
#[must_use]
pub fn analyze(answer: &AnswerText, _question: &Question) -> Feedback {
    let trimmed = answer.as_str().trim();
    let lower = trimmed.to_lowercase();

    let words = word_count(trimmed);
    let clarity = if CLEAR_WORD_RANGE.contains(&words) {
        CLARITY_CLEAR
    } else if words < *CLEAR_WORD_RANGE.start() {
        CLARITY_TOO_SHORT
    } else {
        CLARITY_TOO_LONG
    };

    let structure = if trimmed.chars().count() > STRUCTURED_MIN_CHARS {
        STRUCTURE_OK
    } else {
        STRUCTURE_WEAK
    };

    let confidence = if contains_any(&lower, &HEDGING_MARKERS) {
        CONFIDENCE_HEDGING
    } else {
        CONFIDENCE_OK
    };

    let examples = if contains_any(&lower, &EXAMPLE_MARKERS) {
        EXAMPLES_PRESENT
    } else {
        EXAMPLES_MISSING
    };

    let feedback = Feedback::from_scores(clarity, structure, confidence, examples);
    debug!(
        words,
        clarity,
        structure,
        confidence,
        examples,
        overall = feedback.overall(),
        "scored answer"
    );
    feedback
}

/// Number of whitespace-delimited tokens.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
