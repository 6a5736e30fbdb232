//! Reduces a session's answers into the final [`Report`].

use thiserror::Error;
use tracing::debug;

use crate::model::{Answer, Dimension, Feedback, Improvement, Report, Strength};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("cannot build a report without answers")]
    NoAnswers,
}

/// Sub-scores at or above this count toward a strength.
const STRENGTH_SCORE: u8 = 80;

/// Sub-scores below this count toward an improvement.
const WEAK_SCORE: u8 = 70;

const EXCELLENT_TOTAL: f64 = 80.0;

/// `(strength, dimension, minimum answers scoring >= STRENGTH_SCORE)`.
const STRENGTH_RULES: [(Strength, Dimension, usize); 3] = [
    (Strength::PracticalExamples, Dimension::Examples, 6),
    (Strength::Confidence, Dimension::Confidence, 7),
    (Strength::WellStructured, Dimension::Structure, 6),
];

/// `(improvement, dimension, minimum answers scoring < WEAK_SCORE)`.
const IMPROVEMENT_RULES: [(Improvement, Dimension, usize); 3] = [
    (Improvement::Clarity, Dimension::Clarity, 3),
    (Improvement::PracticalExamples, Dimension::Examples, 4),
    (Improvement::Confidence, Dimension::Confidence, 3),
];

/// Builds the final report from every recorded answer.
///
/// # Errors
///
/// Returns `ReportError::NoAnswers` if `answers` is empty.
pub fn aggregate(answers: &[Answer]) -> Result<Report, ReportError> {
    let feedback: Vec<&Feedback> = answers.iter().map(Answer::feedback).collect();
    aggregate_feedback(&feedback)
}

/// Same as [`aggregate`], over bare feedback records.
///
/// # Errors
///
/// Returns `ReportError::NoAnswers` if `feedback` is empty.
pub fn aggregate_feedback(feedback: &[&Feedback]) -> Result<Report, ReportError> {
    if feedback.is_empty() {
        return Err(ReportError::NoAnswers);
    }

    let sum: u32 = feedback.iter().map(|f| u32::from(f.overall())).sum();
    #[allow(clippy::cast_precision_loss)]
    let total_score = f64::from(sum) / feedback.len() as f64;

    let count = |dimension: Dimension, pred: fn(u8) -> bool| {
        feedback
            .iter()
            .filter(|f| pred(f.score(dimension)))
            .count()
    };

    let mut strengths = Vec::new();
    if total_score >= EXCELLENT_TOTAL {
        strengths.push(Strength::ExcellentCommunication);
    }
    strengths.extend(
        STRENGTH_RULES
            .iter()
            .filter(|(_, dimension, min)| count(*dimension, |s| s >= STRENGTH_SCORE) >= *min)
            .map(|(strength, _, _)| *strength),
    );

    let improvements: Vec<Improvement> = IMPROVEMENT_RULES
        .iter()
        .filter(|(_, dimension, min)| count(*dimension, |s| s < WEAK_SCORE) >= *min)
        .map(|(improvement, _, _)| *improvement)
        .collect();

    debug!(
        answers = feedback.len(),
        total_score,
        strengths = strengths.len(),
        improvements = improvements.len(),
        "aggregated report"
    );

    Ok(Report {
        total_score,
        strengths,
        improvements,
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerText, QuestionId};

    fn answer(id: u32, clarity: u8, structure: u8, confidence: u8, examples: u8) -> Answer {
        Answer::new(
            QuestionId::new(id),
            AnswerText::parse("resposta").unwrap(),
            Feedback::from_scores(clarity, structure, confidence, examples),
        )
    }

    fn repeat(n: u32, f: impl Fn(u32) -> Answer) -> Vec<Answer> {
        (1..=n).map(f).collect()
    }

    #[test]
    fn empty_answers_are_rejected() {
        assert_eq!(aggregate(&[]), Err(ReportError::NoAnswers));
    }

    #[test]
    fn all_ninety_is_excellent() {
        let answers = repeat(10, |i| answer(i, 90, 90, 90, 90));
        let report = aggregate(&answers).unwrap();
        assert_eq!(report.total_score, 90.0);
        assert_eq!(
            report.strengths,
            vec![
                Strength::ExcellentCommunication,
                Strength::PracticalExamples,
                Strength::Confidence,
                Strength::WellStructured,
            ]
        );
        assert!(report.improvements.is_empty());
    }

    #[test]
    fn all_fifty_has_no_excellence_and_flags_clarity() {
        let answers = repeat(10, |i| answer(i, 50, 50, 50, 50));
        let report = aggregate(&answers).unwrap();
        assert_eq!(report.total_score, 50.0);
        assert!(report.strengths.is_empty());
        assert_eq!(
            report.improvements,
            vec![
                Improvement::Clarity,
                Improvement::PracticalExamples,
                Improvement::Confidence,
            ]
        );
    }

    #[test]
    fn total_score_keeps_fraction() {
        let answers = vec![answer(1, 85, 80, 85, 90), answer(2, 45, 50, 85, 40)];
        // overall 85 and 55
        let report = aggregate(&answers).unwrap();
        assert_eq!(report.total_score, 70.0);

        let answers = vec![
            answer(1, 85, 80, 85, 90),
            answer(2, 45, 50, 85, 40),
            answer(3, 45, 50, 85, 40),
        ];
        let report = aggregate(&answers).unwrap();
        assert!((report.total_score - 65.0).abs() < f64::EPSILON);
    }

    #[test]
    fn strength_thresholds_are_inclusive() {
        // exactly 6 answers with examples >= 80, 4 without
        let answers = repeat(10, |i| {
            if i <= 6 {
                answer(i, 85, 50, 60, 90)
            } else {
                answer(i, 85, 50, 60, 40)
            }
        });
        let report = aggregate(&answers).unwrap();
        assert_eq!(report.strengths, vec![Strength::PracticalExamples]);
        assert_eq!(
            report.improvements,
            vec![Improvement::PracticalExamples, Improvement::Confidence]
        );
    }

    #[test]
    fn confidence_needs_seven_answers() {
        let six = repeat(10, |i| answer(i, 85, 50, if i <= 6 { 85 } else { 60 }, 40));
        assert!(!aggregate(&six).unwrap().strengths.contains(&Strength::Confidence));

        let seven = repeat(10, |i| answer(i, 85, 50, if i <= 7 { 85 } else { 60 }, 40));
        assert!(aggregate(&seven).unwrap().strengths.contains(&Strength::Confidence));
    }

    #[test]
    fn improvement_needs_minimum_count() {
        let two_unclear = repeat(10, |i| answer(i, if i <= 2 { 45 } else { 85 }, 80, 85, 90));
        assert!(aggregate(&two_unclear).unwrap().improvements.is_empty());

        let three_unclear = repeat(10, |i| answer(i, if i <= 3 { 45 } else { 85 }, 80, 85, 90));
        assert_eq!(
            aggregate(&three_unclear).unwrap().improvements,
            vec![Improvement::Clarity]
        );
    }

    #[test]
    fn structure_needs_six_answers() {
        let five = repeat(10, |i| answer(i, 85, if i <= 5 { 80 } else { 50 }, 60, 40));
        assert!(!aggregate(&five).unwrap().strengths.contains(&Strength::WellStructured));

        let six = repeat(10, |i| answer(i, 85, if i <= 6 { 80 } else { 50 }, 60, 40));
        assert!(aggregate(&six).unwrap().strengths.contains(&Strength::WellStructured));
    }

    #[test]
    fn missing_examples_needs_four_answers() {
        let three = repeat(10, |i| answer(i, 85, 80, 85, if i <= 3 { 40 } else { 90 }));
        assert!(aggregate(&three).unwrap().improvements.is_empty());

        let four = repeat(10, |i| answer(i, 85, 80, 85, if i <= 4 { 40 } else { 90 }));
        assert_eq!(
            aggregate(&four).unwrap().improvements,
            vec![Improvement::PracticalExamples]
        );
    }

    #[test]
    fn hedging_needs_three_answers() {
        let two = repeat(10, |i| answer(i, 85, 80, if i <= 2 { 60 } else { 85 }, 90));
        assert!(aggregate(&two).unwrap().improvements.is_empty());

        let three = repeat(10, |i| answer(i, 85, 80, if i <= 3 { 60 } else { 85 }, 90));
        assert_eq!(
            aggregate(&three).unwrap().improvements,
            vec![Improvement::Confidence]
        );
    }

    #[test]
    fn stored_answers_cannot_inflate_the_total() {
        let json = r#"{"question_id":1,"text":"Sim","feedback":{"clarity":45,
            "structure":50,"confidence":85,"examples":40,"overall":100,"suggestions":[]}}"#;
        let stored: Answer = serde_json::from_str(json).unwrap();
        assert_eq!(stored.feedback().overall(), 55);

        let answers = vec![stored; 10];
        let report = aggregate(&answers).unwrap();
        assert_eq!(report.total_score, 55.0);
        assert_eq!(report.strengths, vec![Strength::Confidence]);
    }
}
