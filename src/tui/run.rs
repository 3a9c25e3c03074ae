//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only TUI module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and owns the background audio channel for the lifetime of the screen.
//!
//! Architecture: a key reader thread feeds an mpsc channel. The event loop
//! renders, blocks on the channel, and runs each action to completion
//! before taking the next one.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::audio::open_background;
use crate::quiz::Quiz;
use crate::types::{AudioConfig, QuizSummary};

use super::state::{Action, App, AppEvent, Effect, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Option cursor
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(' ') => Some(Action::Choose),
        KeyCode::Char(c @ '1'..='4') => Some(Action::Pick(c as u8 - b'0')),

        // Buttons
        KeyCode::Enter => Some(Action::Primary),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('m') => Some(Action::ToggleMute),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                // Windows reports releases too; act on presses only
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event read failed");
                    break;
                }
            };
            if tx.send(event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive quiz until the user quits.
///
/// The audio channel is acquired when the screen comes up and released when
/// it goes away. Returns the final summary if the quiz was finished at exit.
pub fn run(quiz: Quiz, audio: &AudioConfig) -> io::Result<Option<QuizSummary>> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(quiz, open_background(audio));
    tracing::info!(questions = app.session.quiz.total(), "quiz started");

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    let result = event_loop(&mut terminal, &mut app, &rx);

    restore_terminal()?;
    result?;

    let summary = app.session.quiz.final_score();
    // Teardown: pause, rewind and release before returning to the shell
    drop(app);
    Ok(summary)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => return Ok(()), // reader thread gone
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    match update(&mut app.session, &action) {
                        Transition::Stay => {}
                        Transition::Quit => app.should_quit = true,
                        Transition::Effect(effect) => handle_effect(effect, app),
                    }
                }
            }
            AppEvent::Resize => {}
        }
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect, app: &mut App) {
    match effect {
        Effect::ToggleMute => {
            app.audio.toggle_mute();
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
