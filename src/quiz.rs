//! Quiz progression state machine: select → reveal → advance/finish → restart.
//!
//! Pure logic, no I/O. The phase is an enum so that a revealed answer always
//! carries a selection and a finished quiz carries none. Actions that arrive
//! in the wrong phase are silent no-ops; each action reports whether it was
//! applied so callers can log or ignore.

use std::sync::Arc;

use crate::questions::{QuestionError, validate_question};
use crate::types::{Difficulty, Question, QuestionSet, QuizSummary};

// ============================================================================
// STATE
// ============================================================================

/// Where the player is within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choosing an answer. `selected` is an option position.
    Answering { selected: Option<usize> },
    /// Answer locked in and shown alongside the explanation.
    Revealed { selected: usize },
    /// Advanced past the last question. Left only through restart.
    Finished,
}

/// Progression state over a fixed question sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    index: usize,
    score: usize,
    phase: Phase,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::initial()
    }
}

impl QuizState {
    /// Round 0, score 0, nothing selected.
    pub const fn initial() -> Self {
        QuizState {
            index: 0,
            score: 0,
            phase: Phase::Answering { selected: None },
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Selected option position, if any. Cleared once finished.
    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            Phase::Answering { selected } => selected,
            Phase::Revealed { selected } => Some(selected),
            Phase::Finished => None,
        }
    }

    /// True from reveal until the next question (and while finished).
    pub fn is_revealed(&self) -> bool {
        !matches!(self.phase, Phase::Answering { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

/// How an option should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// The correct option, after reveal.
    Correct,
    /// The player's wrong pick, after reveal.
    Incorrect,
    /// The player's pick, before reveal.
    Selected,
    Neutral,
}

// ============================================================================
// STATE MACHINE
// ============================================================================

/// A quiz over one fixed, non-empty question sequence.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Arc<[Question]>,
    state: QuizState,
}

impl Quiz {
    /// Start a quiz over `questions`.
    ///
    /// # Errors
    /// [`QuestionError::NoQuestions`] if the sequence is empty, or the
    /// first validation failure of any question.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::NoQuestions);
        }
        for (index, question) in questions.iter().enumerate() {
            validate_question(question, Difficulty::TRAVERSED, index)?;
        }
        Ok(Quiz {
            questions: questions.into(),
            state: QuizState::initial(),
        })
    }

    /// Start a quiz over the traversed bucket of a bank.
    pub fn from_set(set: &QuestionSet) -> Result<Self, QuestionError> {
        let round = set.get(Difficulty::TRAVERSED);
        if round.is_empty() {
            return Err(QuestionError::EmptyRound(Difficulty::TRAVERSED));
        }
        Self::new(round.to_vec())
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Fixed sequence length N, captured at construction.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.state.score
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The question on screen. None once finished.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_finished() {
            None
        } else {
            self.questions.get(self.state.index)
        }
    }

    /// Selected option text, if any.
    pub fn selected_option(&self) -> Option<&str> {
        let selected = self.state.selected()?;
        self.current_question()?
            .options
            .get(selected)
            .map(String::as_str)
    }

    fn is_last(&self) -> bool {
        self.state.index + 1 >= self.total()
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Select an option by its text. Last write wins.
    ///
    /// No-op unless answering, or when `option` is not one of the current
    /// question's options.
    pub fn select(&mut self, option: &str) -> bool {
        match self.current_question().and_then(|q| q.position(option)) {
            Some(position) => self.select_index(position),
            None => {
                tracing::debug!(option, "ignoring selection of unknown option");
                false
            }
        }
    }

    /// Select an option by position. No-op unless answering or out of range.
    pub fn select_index(&mut self, position: usize) -> bool {
        let in_range = self
            .current_question()
            .is_some_and(|q| position < q.options.len());

        match self.state.phase {
            Phase::Answering { .. } if in_range => {
                self.state.phase = Phase::Answering {
                    selected: Some(position),
                };
                true
            }
            phase => {
                tracing::debug!(?phase, position, "ignoring select");
                false
            }
        }
    }

    /// Answering → Revealed. Requires a selection.
    pub fn reveal(&mut self) -> bool {
        match self.state.phase {
            Phase::Answering {
                selected: Some(selected),
            } => {
                self.state.phase = Phase::Revealed { selected };
                true
            }
            phase => {
                tracing::debug!(?phase, "ignoring reveal");
                false
            }
        }
    }

    /// Score the revealed answer, then move on or finish.
    ///
    /// No-op unless revealed. On the last question the index stays put and
    /// the quiz finishes.
    pub fn advance(&mut self) -> bool {
        let Phase::Revealed { selected } = self.state.phase else {
            tracing::debug!(phase = ?self.state.phase, "ignoring advance");
            return false;
        };

        let correct = self.questions[self.state.index].correct_index() == Some(selected);
        if correct {
            self.state.score += 1;
        }

        if self.is_last() {
            self.state.phase = Phase::Finished;
            tracing::info!(score = self.state.score, total = self.total(), "quiz finished");
        } else {
            self.state.index += 1;
            self.state.phase = Phase::Answering { selected: None };
        }
        true
    }

    /// The single Next/Finish button: reveal first, advance second.
    pub fn primary(&mut self) -> bool {
        match self.state.phase {
            Phase::Answering { .. } => self.reveal(),
            Phase::Revealed { .. } => self.advance(),
            Phase::Finished => false,
        }
    }

    /// Whether the primary button is usable.
    pub fn primary_enabled(&self) -> bool {
        match self.state.phase {
            Phase::Answering { selected } => selected.is_some(),
            Phase::Revealed { .. } => true,
            Phase::Finished => false,
        }
    }

    /// Label of the primary button.
    pub fn primary_label(&self) -> &'static str {
        if self.is_last() {
            "Finish Quiz"
        } else {
            "Next Question"
        }
    }

    /// Back to the initial state, from anywhere.
    pub fn restart(&mut self) {
        self.state = QuizState::initial();
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    /// Classify an option of the current question for rendering.
    pub fn classify(&self, position: usize) -> OptionMark {
        let Some(question) = self.current_question() else {
            return OptionMark::Neutral;
        };

        match self.state.phase {
            Phase::Revealed { selected } => {
                if question.correct_index() == Some(position) {
                    OptionMark::Correct
                } else if selected == position {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Neutral
                }
            }
            Phase::Answering {
                selected: Some(selected),
            } if selected == position => OptionMark::Selected,
            _ => OptionMark::Neutral,
        }
    }

    /// `score / N * 100` with two decimals.
    pub fn accuracy(&self) -> String {
        format_accuracy(self.state.score, self.total())
    }

    /// Final result. Only available once finished.
    pub fn final_score(&self) -> Option<QuizSummary> {
        self.is_finished().then(|| QuizSummary {
            score: self.state.score,
            total: self.total(),
            accuracy: self.accuracy(),
        })
    }

    /// Header text: "Round i of N" or "Quiz Completed!".
    pub fn round_label(&self) -> String {
        if self.is_finished() {
            "Quiz Completed!".to_string()
        } else {
            format!("Round {} of {}", self.state.index + 1, self.total())
        }
    }
}

/// Percentage with exactly two decimals, rounding half up.
///
/// Integer arithmetic, so ties such as 1/32 (3.125) round the same way on
/// every platform.
pub fn format_accuracy(score: usize, total: usize) -> String {
    if total == 0 {
        return "0.00".to_string();
    }
    let hundredths = (score * 20_000 + total) / (2 * total);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

// ============================================================================
// TESTS
// ============================================================================
