//! Report formatting for the question bank and quiz results.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::types::{Difficulty, OutputFormat, QuestionSet, QuizSummary};

/// Format the whole bank, every difficulty, for output.
pub fn format_question_set(set: &QuestionSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_bank_human(set),
        OutputFormat::Json => format_json(set),
    }
}

/// Format the final result of a finished quiz.
pub fn format_summary(summary: &QuizSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_summary_human(summary),
        OutputFormat::Json => format_json(summary),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_bank_human(set: &QuestionSet) -> String {
    let mut out = String::new();

    for difficulty in Difficulty::ALL {
        let questions = set.get(difficulty);
        if questions.is_empty() {
            continue;
        }

        let marker = if difficulty == Difficulty::TRAVERSED {
            " (played)"
        } else {
            ""
        };
        out.push_str(&format!(
            "=== {} ({}){} ===\n",
            capitalize(&difficulty.to_string()),
            questions.len(),
            marker
        ));

        for (i, question) in questions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, question.prompt));
            for option in &question.options {
                let bullet = if *option == question.correct_option { "✓" } else { "·" };
                out.push_str(&format!("   {} {}\n", bullet, option));
            }
        }
        out.push('\n');
    }

    out.push_str(&format!("Total questions: {}\n", set.len()));
    out
}

fn format_summary_human(summary: &QuizSummary) -> String {
    let mut out = String::new();
    out.push_str("=== Quiz Completed ===\n");
    out.push_str(&format!(
        "Final score: {} out of {}\n",
        summary.score, summary.total
    ));
    out.push_str(&format!("Accuracy:    {}%\n", summary.accuracy));
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Plain data structs; serialization cannot fail
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::builtin;

    fn sample_summary() -> QuizSummary {
        QuizSummary {
            score: 1,
            total: 2,
            accuracy: "50.00".into(),
        }
    }

    // --- Human format tests ---

    #[test]
    fn human_bank_lists_every_bucket() {
        let output = format_question_set(&builtin().unwrap(), OutputFormat::Human);

        assert!(output.contains("=== Easy (2) (played) ==="));
        assert!(output.contains("=== Medium (2) ==="));
        assert!(output.contains("=== Hard (2) ==="));
        assert!(output.contains("1. What is the chemical symbol for gold?"));
        assert!(output.contains("✓ Au"));
        assert!(output.contains("· Ag"));
        assert!(output.contains("Total questions: 6"));
    }

    #[test]
    fn human_bank_skips_empty_buckets() {
        let mut set = builtin().unwrap();
        set.hard.clear();
        let output = format_question_set(&set, OutputFormat::Human);

        assert!(!output.contains("=== Hard"));
        assert!(output.contains("Total questions: 4"));
    }

    #[test]
    fn human_summary_shows_score_and_accuracy() {
        let output = format_summary(&sample_summary(), OutputFormat::Human);

        assert!(output.contains("=== Quiz Completed ==="));
        assert!(output.contains("Final score: 1 out of 2"));
        assert!(output.contains("Accuracy:    50.00%"));
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("easy"), "Easy");
        assert_eq!(capitalize(""), "");
    }

    // --- JSON format tests ---

    #[test]
    fn json_bank_round_trips_through_loader() {
        let set = builtin().unwrap();
        let output = format_question_set(&set, OutputFormat::Json);
        let reparsed = crate::questions::parse(&output).expect("JSON output must reload");
        assert_eq!(reparsed, set);
    }

    #[test]
    fn json_summary_has_expected_fields() {
        let output = format_summary(&sample_summary(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["score"], 1);
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["accuracy"], "50.00");
    }
}
