//! Pure rendering: map App state to ratatui widget trees.
//!
//! `render()` lays out the shared chrome (header, round bar, button, help,
//! footer) and dispatches the content area on the current Screen.
//! Widget-building functions are pure; the only effect is
//! Frame::render_widget() writing to the terminal buffer.

use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::audio::MuteState;
use crate::quiz::{OptionMark, Quiz};
use crate::types::CONTACT_URL;

use super::state::{App, Screen, Session};
use super::theme;

/// Application name in the header.
const APP_TITLE: &str = "NSMQ Ghana Quiz";

const AUTHOR: &str = "Aristocrat Jnr";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let screen = app.screen();

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // round
        Constraint::Min(0),    // content
        Constraint::Length(1), // primary button
        Constraint::Length(1), // help
        Constraint::Length(2), // footer
    ])
    .split(area);

    render_header(app.audio.mute_state(), frame, chunks[0]);
    frame.render_widget(render_round(&app.session.quiz), chunks[1]);

    match screen {
        Screen::Question => render_question(&app.session, frame, chunks[2]),
        Screen::Summary => render_summary(&app.session.quiz, frame, chunks[2]),
    }

    frame.render_widget(render_button(&app.session.quiz), chunks[3]);
    frame.render_widget(render_help(screen), chunks[4]);
    frame.render_widget(render_footer(chrono::Local::now().year()), chunks[5]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title on the left, mute indicator on the right.
fn render_header(mute: MuteState, frame: &mut Frame, area: Rect) {
    let halves = Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).split(area);

    let title = Paragraph::new(Line::from(Span::styled(APP_TITLE, theme::STYLE_TITLE)));
    frame.render_widget(title, halves[0]);
    frame.render_widget(render_mute_indicator(mute), halves[1]);
}

fn render_mute_indicator(mute: MuteState) -> Paragraph<'static> {
    let (symbol, style) = if mute.is_muted() {
        ("✕", theme::STYLE_SOUND_OFF)
    } else {
        ("♪", theme::STYLE_SOUND_ON)
    };
    Paragraph::new(
        Line::from(Span::styled(format!("{} {}", symbol, mute.label()), style)).right_aligned(),
    )
}

fn render_round(quiz: &Quiz) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(quiz.round_label(), theme::STYLE_IMPORTANT)).centered())
}

/// The single primary button: Next/Finish while playing, Restart after.
fn render_button(quiz: &Quiz) -> Paragraph<'static> {
    let (label, style) = if quiz.is_finished() {
        ("Restart Quiz".to_string(), theme::STYLE_BUTTON)
    } else if quiz.primary_enabled() {
        (format!("{} ›", quiz.primary_label()), theme::STYLE_BUTTON)
    } else {
        (format!("{} ›", quiz.primary_label()), theme::STYLE_BUTTON_DISABLED)
    };

    Paragraph::new(Line::from(Span::styled(format!("[ {} ]", label), style)).centered())
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Question => "[1-4] pick  [j/k] move  [Space] choose  [Enter] next  [m] mute  [q] quit",
        Screen::Summary => "[Enter/r] restart  [m] mute  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

/// Copyright line, then the contact link.
fn render_footer(year: i32) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            format!(
                "© {} NSMQ Ghana. All rights reserved. Developed by {}",
                year, AUTHOR
            ),
            theme::STYLE_DIM,
        )),
        Line::from(vec![
            Span::styled("Contact: ", theme::STYLE_DIM),
            Span::styled(CONTACT_URL, theme::STYLE_INTERACTIVE),
        ]),
    ])
}

// ============================================================================
// SCREEN: QUESTION
// ============================================================================

fn render_question(session: &Session, frame: &mut Frame, area: Rect) {
    let quiz = &session.quiz;
    let Some(question) = quiz.current_question() else {
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", question.prompt), theme::STYLE_PROMPT)),
        Line::from(""),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let mark = quiz.classify(i);
        let spans = vec![
            Span::raw("  "),
            Span::styled(format!("{} ", mark_symbol(mark)), mark_style(mark)),
            Span::styled(format!("{}. ", i + 1), theme::STYLE_DIM),
            Span::styled(option.clone(), mark_style(mark)),
        ];

        let line = if i == session.cursor && !quiz.state().is_revealed() {
            Line::from(spans).style(theme::STYLE_CURSOR)
        } else {
            Line::from(spans)
        };
        lines.push(line);
    }

    let chunks = Layout::vertical([
        Constraint::Length(lines.len() as u16 + 1),
        Constraint::Min(0),
    ])
    .split(area);

    let options = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(options, chunks[0]);

    if quiz.state().is_revealed() {
        let explanation = Paragraph::new(Span::styled(
            question.explanation.clone(),
            theme::STYLE_EXPLANATION,
        ))
        .block(Block::default().borders(Borders::ALL).title(" Explanation "))
        .wrap(Wrap { trim: true });
        frame.render_widget(explanation, chunks[1]);
    }
}

fn mark_symbol(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Correct => "✓",
        OptionMark::Incorrect => "✗",
        OptionMark::Selected => "●",
        OptionMark::Neutral => "○",
    }
}

fn mark_style(mark: OptionMark) -> ratatui::style::Style {
    match mark {
        OptionMark::Correct => theme::STYLE_CORRECT,
        OptionMark::Incorrect => theme::STYLE_INCORRECT,
        OptionMark::Selected => theme::STYLE_SELECTED,
        OptionMark::Neutral => ratatui::style::Style::new(),
    }
}

// ============================================================================
// SCREEN: SUMMARY
// ============================================================================

fn render_summary(quiz: &Quiz, frame: &mut Frame, area: Rect) {
    let Some(summary) = quiz.final_score() else {
        return;
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("★  Congratulations!  ★", theme::STYLE_AWARD)).centered(),
        Line::from(""),
        Line::from(vec![
            Span::raw("Your final score: "),
            Span::styled(
                format!("{} out of {}", summary.score, summary.total),
                theme::STYLE_IMPORTANT,
            ),
        ])
        .centered(),
        Line::from(vec![
            Span::raw("Accuracy: "),
            Span::styled(format!("{}%", summary.accuracy), theme::STYLE_IMPORTANT),
        ])
        .centered(),
        Line::from(""),
        Line::from(Span::styled("◉  ◉  ◉", theme::STYLE_AWARD)).centered(),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioChannel, AudioSink, SilentSink};
    use crate::questions::builtin;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn make_app(muted: bool) -> App {
        let quiz = Quiz::from_set(&builtin().unwrap()).unwrap();
        let audio = AudioChannel::activate(muted, || Ok(Box::new(SilentSink) as Box<dyn AudioSink>));
        App::new(quiz, audio)
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal
            .draw(|frame| render(app, frame))
            .expect("render should not panic");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn finish(app: &mut App, answers: &[&str]) {
        for answer in answers {
            app.session.quiz.select(answer);
            app.session.quiz.primary();
            app.session.quiz.primary();
        }
    }

    #[test]
    fn question_screen_shows_prompt_and_options() {
        let content = screen_text(&make_app(false));
        assert!(content.contains(APP_TITLE));
        assert!(content.contains("Round 1 of 2"));
        assert!(content.contains("What is the chemical symbol for gold?"));
        for option in ["Au", "Ag", "Fe", "Cu"] {
            assert!(content.contains(option), "missing option {}", option);
        }
        assert!(content.contains("Next Question"));
    }

    #[test]
    fn explanation_hidden_until_reveal() {
        let mut app = make_app(false);
        app.session.quiz.select("Fe");
        let before = screen_text(&app);
        assert!(!before.contains("aurum"));
        assert!(before.contains("●"));

        app.session.quiz.reveal();
        let after = screen_text(&app);
        assert!(after.contains("Explanation"));
        assert!(after.contains("aurum"));
        assert!(after.contains("✓"), "correct option marked");
        assert!(after.contains("✗"), "wrong pick marked");
    }

    #[test]
    fn last_question_offers_finish() {
        let mut app = make_app(false);
        finish(&mut app, &["Au"]);
        let content = screen_text(&app);
        assert!(content.contains("Round 2 of 2"));
        assert!(content.contains("Finish Quiz"));
    }

    #[test]
    fn summary_shows_score_and_accuracy() {
        let mut app = make_app(false);
        finish(&mut app, &["Au", "3.16"]);
        let content = screen_text(&app);
        assert!(content.contains("Quiz Completed!"));
        assert!(content.contains("Congratulations!"));
        assert!(content.contains("1 out of 2"));
        assert!(content.contains("50.00%"));
        assert!(content.contains("Restart Quiz"));
    }

    #[test]
    fn header_reflects_mute_flag() {
        assert!(screen_text(&make_app(false)).contains("Unmuted"));

        let muted = screen_text(&make_app(true));
        assert!(muted.contains("Muted"));
        assert!(!muted.contains("Unmuted"));
    }

    #[test]
    fn footer_shows_contact_link() {
        assert!(screen_text(&make_app(false)).contains(CONTACT_URL));
    }

    #[test]
    fn footer_carries_copyright_for_current_year() {
        let content = screen_text(&make_app(false));
        let year = chrono::Local::now().year();
        assert!(content.contains(&format!("© {} NSMQ Ghana.", year)));
        assert!(content.contains("All rights reserved."));
        assert!(content.contains("Developed by Aristocrat Jnr"));
    }

    #[test]
    fn footer_year_is_a_parameter() {
        let backend = TestBackend::new(80, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(render_footer(2024), frame.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(text.contains("© 2024 NSMQ Ghana."));
        assert!(text.contains(CONTACT_URL));
    }

    #[test]
    fn renders_on_tiny_terminal() {
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = make_app(false);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        app.session.quiz.select("Au");
        app.session.quiz.reveal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        app.session.quiz.advance();
        finish(&mut app, &["3.14"]);
        assert!(app.session.quiz.is_finished());
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn help_differs_per_screen() {
        // Smoke test: both variants build
        let _ = render_help(Screen::Question);
        let _ = render_help(Screen::Summary);
        assert_eq!(mark_symbol(OptionMark::Neutral), "○");
    }
}
