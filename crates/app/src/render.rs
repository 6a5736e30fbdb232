//! Plain-text rendering for the terminal host.

use std::fmt::Write as _;

use interview_core::RoleTrack;
use interview_core::model::{Feedback, Question};
use services::{SessionProgress, SessionReport};

/// Header and prompt for the question being asked.
#[must_use]
pub fn question(progress: &SessionProgress, question: &Question) -> String {
    format!(
        "\n[{}/{}] {} · {} ({}%)\n{}\n",
        progress.position,
        progress.total,
        question.category,
        question.difficulty,
        progress.percent(),
        question.text
    )
}

/// Inline indicator shown right after an answer is scored.
#[must_use]
pub fn feedback(feedback: &Feedback) -> String {
    let mut out = format!(
        "  score {} ({}) | clarity {} · structure {} · confidence {} · examples {}\n",
        feedback.overall(),
        feedback.band(),
        feedback.clarity(),
        feedback.structure(),
        feedback.confidence(),
        feedback.examples()
    );
    for suggestion in feedback.suggestions() {
        let _ = writeln!(out, "  - {suggestion}");
    }
    out
}

#[must_use]
pub fn question_list(title: &str, track: RoleTrack, questions: &[Question]) -> String {
    let mut out = format!("Questions for {title} ({track:?} track)\n");
    for q in questions {
        let _ = writeln!(out, "{:>2}. [{}] {}", q.id.value(), q.category, q.text);
    }
    out
}

/// Summary screen for a finished session.
#[must_use]
pub fn report(report: &SessionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nPerformance report for {}", report.job_title);
    let _ = writeln!(
        out,
        "Overall score: {}% ({})",
        report.rounded_total, report.band
    );

    out.push_str("\nStrengths:\n");
    if report.strengths.is_empty() {
        out.push_str("  (none yet)\n");
    }
    for strength in &report.strengths {
        let _ = writeln!(out, "  + {strength}");
    }

    if !report.improvements.is_empty() {
        out.push_str("\nAreas to improve:\n");
        for improvement in &report.improvements {
            let _ = writeln!(out, "  - {improvement}");
        }
    }

    out.push_str("\nPer question:\n");
    for row in &report.answers {
        let prompt = row.question.as_deref().unwrap_or("(unknown question)");
        let _ = writeln!(
            out,
            "  {:>2}. {}% ({}) {}",
            row.position, row.feedback.overall(), row.band, prompt
        );
        for suggestion in row.feedback.suggestions() {
            let _ = writeln!(out, "      - {suggestion}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::model::{Difficulty, QuestionCategory, QuestionId};

    #[test]
    fn question_header_shows_progress() {
        let progress = SessionProgress {
            position: 4,
            total: 10,
            answered: 3,
            is_complete: false,
        };
        let q = Question::new(
            QuestionId::new(4),
            "Explique o conceito de Clean Code.",
            QuestionCategory::Technical,
            Difficulty::Intermediate,
        );
        let text = question(&progress, &q);
        assert!(text.contains("[4/10] Technical · Intermediate (40%)"));
        assert!(text.contains("Clean Code"));
    }

    #[test]
    fn feedback_lists_suggestions() {
        let fb = Feedback::from_scores(45, 50, 85, 40);
        let text = feedback(&fb);
        assert!(text.contains("score 55 (weak)"));
        assert_eq!(text.lines().count(), 1 + fb.suggestions().len());
    }
}
