//! Domain types for nsmq-quiz.
//!
//! Question data, the final summary, and runtime configuration.
//! Progression state lives in [`crate::quiz`]; these are the inputs and outputs.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Default background track, relative to the crate root.
pub const DEFAULT_AUDIO_ASSET: &str = "assets/background.mp3";

/// Static outbound contact reference shown in the footer.
pub const CONTACT_URL: &str = "https://wa.me/551784926";

/// Absolute path of the default track under the crate root.
///
/// The track is not bundled. Place a file there or pass `--audio`.
pub fn default_audio_asset() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_AUDIO_ASSET)
}

// ============================================================================
// QUESTIONS
// ============================================================================

/// Difficulty bucket of the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The only bucket the state machine walks through.
    pub const TRAVERSED: Difficulty = Difficulty::Easy;

    /// All buckets in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", label)
    }
}

/// A single multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The text shown to the player.
    pub prompt: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// Must equal one of `options`.
    pub correct_option: String,
    /// Shown once the answer is revealed.
    pub explanation: String,
}

impl Question {
    /// Position of `option` among this question's options.
    pub fn position(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| o == option)
    }

    /// Position of the correct option.
    pub fn correct_index(&self) -> Option<usize> {
        self.position(&self.correct_option)
    }
}

/// The question bank: one ordered sequence per difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default)]
    pub easy: Vec<Question>,
    #[serde(default)]
    pub medium: Vec<Question>,
    #[serde(default)]
    pub hard: Vec<Question>,
}

impl QuestionSet {
    /// Questions for a difficulty.
    pub fn get(&self, difficulty: Difficulty) -> &[Question] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Total number of questions across all buckets.
    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// Final outcome of a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    /// Correct answers.
    pub score: usize,
    /// Length of the traversed sequence (not the number answered).
    pub total: usize,
    /// `score / total * 100`, two decimals.
    pub accuracy: String,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for the background audio channel.
#[derive(Debug, Clone)]
pub struct AudioConfig {
    /// Track to loop while unmuted.
    pub asset: PathBuf,
    /// Start with the mute flag set.
    pub start_muted: bool,
    /// When false, a silent sink is used regardless of build features.
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            asset: default_audio_asset(),
            start_muted: false,
            enabled: true,
        }
    }
}

/// Configuration for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Replacement question bank (None = built-in bank).
    pub questions: Option<PathBuf>,
    pub audio: AudioConfig,
    /// Log directory (None = platform cache dir).
    pub log_dir: Option<PathBuf>,
}

// ============================================================================
// TESTS
// ============================================================================
