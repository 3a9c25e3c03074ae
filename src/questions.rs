//! Question bank loading and validation.
//!
//! Structure:
//! - Built-in bank: embedded JSON, parsed on demand
//! - Pure functions: parsing, validation
//! - Effect functions: reading a replacement bank from disk

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Difficulty, OPTIONS_PER_QUESTION, Question, QuestionSet};

/// The bank shipped with the binary.
const BUILTIN_BANK: &str = include_str!("../assets/questions.json");

/// Why a question bank was rejected.
#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("failed to read question file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid question file")]
    Parse(#[from] serde_json::Error),

    #[error("{difficulty} question {index}: expected 4 options, found {found}")]
    OptionCount {
        difficulty: Difficulty,
        index: usize,
        found: usize,
    },

    #[error("{difficulty} question {index}: option {option:?} appears more than once")]
    DuplicateOption {
        difficulty: Difficulty,
        index: usize,
        option: String,
    },

    #[error("{difficulty} question {index}: correct option {correct:?} is not one of the options")]
    UnknownCorrectOption {
        difficulty: Difficulty,
        index: usize,
        correct: String,
    },

    #[error("{difficulty} question {index}: prompt is empty")]
    EmptyPrompt { difficulty: Difficulty, index: usize },

    #[error("the {0} round has no questions")]
    EmptyRound(Difficulty),

    #[error("a quiz needs at least one question")]
    NoQuestions,
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// The built-in question bank.
///
/// # Errors
/// Only if the embedded data is malformed, which the test suite rules out.
pub fn builtin() -> Result<QuestionSet, QuestionError> {
    parse(BUILTIN_BANK)
}

/// Parse and validate a bank from JSON text.
pub fn parse(json: &str) -> Result<QuestionSet, QuestionError> {
    let set: QuestionSet = serde_json::from_str(json)?;
    validate(&set)?;
    Ok(set)
}

/// Check every bank invariant.
///
/// Every question in every bucket must be well-formed. Only the traversed
/// bucket has to be non-empty; the others may be absent.
pub fn validate(set: &QuestionSet) -> Result<(), QuestionError> {
    for difficulty in Difficulty::ALL {
        for (index, question) in set.get(difficulty).iter().enumerate() {
            validate_question(question, difficulty, index)?;
        }
    }

    if set.get(Difficulty::TRAVERSED).is_empty() {
        return Err(QuestionError::EmptyRound(Difficulty::TRAVERSED));
    }

    Ok(())
}

/// Check one question. `difficulty` and `index` only label the error.
pub fn validate_question(
    question: &Question,
    difficulty: Difficulty,
    index: usize,
) -> Result<(), QuestionError> {
    if question.prompt.trim().is_empty() {
        return Err(QuestionError::EmptyPrompt { difficulty, index });
    }

    if question.options.len() != OPTIONS_PER_QUESTION {
        return Err(QuestionError::OptionCount {
            difficulty,
            index,
            found: question.options.len(),
        });
    }

    let mut seen = HashSet::new();
    for option in &question.options {
        if !seen.insert(option.as_str()) {
            return Err(QuestionError::DuplicateOption {
                difficulty,
                index,
                option: option.clone(),
            });
        }
    }

    if question.correct_index().is_none() {
        return Err(QuestionError::UnknownCorrectOption {
            difficulty,
            index,
            correct: question.correct_option.clone(),
        });
    }

    Ok(())
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Read and validate a bank from a JSON file.
pub fn load_from_path(path: &Path) -> Result<QuestionSet, QuestionError> {
    let contents = fs::read_to_string(path).map_err(|source| QuestionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse(&contents)?;
    tracing::info!(path = %path.display(), questions = set.len(), "loaded question bank");
    Ok(set)
}

/// Load from `path` when given, otherwise the built-in bank.
pub fn load(path: Option<&Path>) -> Result<QuestionSet, QuestionError> {
    match path {
        Some(p) => load_from_path(p),
        None => builtin(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
