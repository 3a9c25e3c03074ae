//! TUI state algebra: pure types, zero effects.
//!
//! The quiz progression itself lives in [`crate::quiz`]. This module adds
//! what only the terminal needs: an option cursor, the screen derived from
//! the quiz phase, semantic actions, and transition results.

use crossterm::event::KeyEvent;

use crate::audio::BackgroundAudio;
use crate::quiz::Quiz;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key press from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal resized; redraw.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Quiz plus the option cursor. Everything pure transitions may touch.
#[derive(Debug, Clone)]
pub struct Session {
    pub quiz: Quiz,
    /// Focused option row on the question screen.
    pub cursor: usize,
}

impl Session {
    pub fn new(quiz: Quiz) -> Self {
        Session { quiz, cursor: 0 }
    }

    pub fn screen(&self) -> Screen {
        if self.quiz.is_finished() {
            Screen::Summary
        } else {
            Screen::Question
        }
    }
}

/// Top-level TUI model.
///
/// The session is mutated only by [`super::update::update`]. The audio
/// channel is mutated only by the effects layer.
#[derive(Debug)]
pub struct App {
    pub session: Session,

    /// Background track and mute flag.
    pub audio: BackgroundAudio,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(quiz: Quiz, audio: BackgroundAudio) -> Self {
        App {
            session: Session::new(quiz),
            audio,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// Which view is on screen. Derived from the quiz phase, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// A question, its options, and after reveal the explanation.
    Question,
    /// Final score and accuracy.
    Summary,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the option cursor up.
    MoveUp,
    /// Move the option cursor down.
    MoveDown,
    /// Select the option under the cursor.
    Choose,
    /// Select option n (1-based) directly.
    Pick(u8),
    /// The Next / Finish / Restart button.
    Primary,
    /// Start over (summary screen).
    Restart,
    /// Flip the background audio mute flag.
    ToggleMute,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Session updated in place (possibly unchanged); redraw.
    Stay,
    /// Quit the application.
    Quit,
    /// Execute a side effect outside the pure layer.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Flip the mute flag and re-sync playback.
    ToggleMute,
}

// ============================================================================
// TESTS
// ============================================================================
