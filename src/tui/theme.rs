//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: correct answer
//! - Red: the player's wrong pick
//! - Blue: question text and the selected option before reveal
//! - Cyan: interactive elements (keybinding hints, primary button)
//! - Yellow: trophy and the summary score
//! - Dim: de-emphasized (footer, disabled button)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Correct option after reveal.
pub const STYLE_CORRECT: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Wrong pick after reveal.
pub const STYLE_INCORRECT: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Selected option before reveal.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

/// Interactive element / keybinding hint.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

/// Score and trophy on the summary screen.
pub const STYLE_AWARD: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Question prompt.
pub const STYLE_PROMPT: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

/// Explanation box text.
pub const STYLE_EXPLANATION: Style = Style::new().fg(Color::Blue);

/// Cursor row in the option list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Primary button when usable.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Primary button when disabled.
pub const STYLE_BUTTON_DISABLED: Style = Style::new().fg(Color::DarkGray);

/// Mute indicator while audible.
pub const STYLE_SOUND_ON: Style = Style::new().fg(Color::Cyan);

/// Mute indicator while muted.
pub const STYLE_SOUND_OFF: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
