//! Pure state transitions: (Session, Action) → Transition.
//!
//! Fully testable without a terminal. Each screen defines which actions it
//! accepts. Unhandled actions leave the session unchanged.

use crate::types::OPTIONS_PER_QUESTION;

use super::state::{Action, Effect, Screen, Session, Transition};

/// Pure state transition function.
///
/// Mutates the session in place and tells the effects boundary what else
/// to do.
pub fn update(session: &mut Session, action: &Action) -> Transition {
    // Available on every screen
    match action {
        Action::Quit => return Transition::Quit,
        Action::ToggleMute => return Transition::Effect(Effect::ToggleMute),
        _ => {}
    }

    match session.screen() {
        Screen::Question => update_question(session, action),
        Screen::Summary => update_summary(session, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Question: move the cursor, pick an option, reveal, advance.
fn update_question(session: &mut Session, action: &Action) -> Transition {
    let option_count = session
        .quiz
        .current_question()
        .map_or(OPTIONS_PER_QUESTION, |q| q.options.len());

    match action {
        Action::MoveUp => {
            session.cursor = session.cursor.saturating_sub(1);
        }
        Action::MoveDown => {
            session.cursor = (session.cursor + 1).min(option_count.saturating_sub(1));
        }
        Action::Choose => {
            session.quiz.select_index(session.cursor);
        }
        Action::Pick(n) => {
            let position = usize::from(*n).wrapping_sub(1);
            if position < option_count && session.quiz.select_index(position) {
                session.cursor = position;
            }
        }
        Action::Primary => {
            let index_before = session.quiz.state().index();
            session.quiz.primary();
            if session.quiz.state().index() != index_before {
                // New question: cursor back to the first option
                session.cursor = 0;
            }
        }
        // Restart lives on the summary screen only
        Action::Restart | Action::Quit | Action::ToggleMute => {}
    }
    Transition::Stay
}

/// Summary: Enter or r starts over.
fn update_summary(session: &mut Session, action: &Action) -> Transition {
    if matches!(action, Action::Primary | Action::Restart) {
        session.quiz.restart();
        session.cursor = 0;
    }
    Transition::Stay
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{OptionMark, Quiz, QuizState};
    use crate::types::Question;

    fn session() -> Session {
        let questions = vec![
            Question {
                prompt: "Gold?".into(),
                options: vec!["Au".into(), "Ag".into(), "Fe".into(), "Cu".into()],
                correct_option: "Au".into(),
                explanation: "aurum".into(),
            },
            Question {
                prompt: "Pi?".into(),
                options: vec!["3.14".into(), "3.16".into(), "3.12".into(), "3.18".into()],
                correct_option: "3.14".into(),
                explanation: "3.14159".into(),
            },
        ];
        Session::new(Quiz::new(questions).unwrap())
    }

    fn apply(session: &mut Session, actions: &[Action]) {
        for action in actions {
            assert_eq!(update(session, action), Transition::Stay);
        }
    }

    // -- Global --

    #[test]
    fn quit_from_any_screen() {
        let mut s = session();
        assert_eq!(update(&mut s, &Action::Quit), Transition::Quit);

        apply(&mut s, &[Action::Pick(1), Action::Primary, Action::Primary]);
        apply(&mut s, &[Action::Pick(1), Action::Primary, Action::Primary]);
        assert_eq!(s.screen(), Screen::Summary);
        assert_eq!(update(&mut s, &Action::Quit), Transition::Quit);
    }

    #[test]
    fn toggle_mute_is_an_effect_and_leaves_quiz_alone() {
        let mut s = session();
        apply(&mut s, &[Action::Pick(2)]);
        let before = s.quiz.state().clone();
        assert_eq!(
            update(&mut s, &Action::ToggleMute),
            Transition::Effect(Effect::ToggleMute)
        );
        assert_eq!(s.quiz.state(), &before);
    }

    // -- Question screen --

    #[test]
    fn cursor_moves_and_clamps() {
        let mut s = session();
        apply(&mut s, &[Action::MoveUp]);
        assert_eq!(s.cursor, 0);
        apply(&mut s, &[Action::MoveDown, Action::MoveDown, Action::MoveDown, Action::MoveDown]);
        assert_eq!(s.cursor, 3);
        apply(&mut s, &[Action::MoveUp]);
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn choose_selects_option_under_cursor() {
        let mut s = session();
        apply(&mut s, &[Action::MoveDown, Action::Choose]);
        assert_eq!(s.quiz.selected_option(), Some("Ag"));
        assert_eq!(s.quiz.classify(1), OptionMark::Selected);
    }

    #[test]
    fn pick_selects_and_moves_cursor() {
        let mut s = session();
        apply(&mut s, &[Action::Pick(3)]);
        assert_eq!(s.quiz.selected_option(), Some("Fe"));
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn pick_out_of_range_is_noop() {
        let mut s = session();
        apply(&mut s, &[Action::Pick(0), Action::Pick(5)]);
        assert_eq!(s.quiz.selected_option(), None);
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn primary_without_selection_is_noop() {
        let mut s = session();
        apply(&mut s, &[Action::Primary]);
        assert_eq!(s.quiz.state(), &QuizState::initial());
    }

    #[test]
    fn pick_after_reveal_keeps_answer_and_cursor() {
        let mut s = session();
        apply(&mut s, &[Action::Pick(2), Action::Primary, Action::Pick(1)]);
        assert_eq!(s.quiz.selected_option(), Some("Ag"));
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn advancing_resets_cursor() {
        let mut s = session();
        apply(&mut s, &[Action::Pick(4), Action::Primary]);
        assert_eq!(s.cursor, 3);
        apply(&mut s, &[Action::Primary]);
        assert_eq!(s.quiz.state().index(), 1);
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn restart_ignored_mid_quiz() {
        let mut s = session();
        apply(&mut s, &[Action::Pick(1), Action::Primary, Action::Primary, Action::Restart]);
        assert_eq!(s.quiz.state().index(), 1);
        assert_eq!(s.quiz.score(), 1);
    }

    // -- Full run --

    #[test]
    fn full_run_through_keys_scores_half() {
        let mut s = session();
        apply(&mut s, &[Action::Pick(1), Action::Primary, Action::Primary]);
        apply(&mut s, &[Action::Pick(2), Action::Primary, Action::Primary]);

        assert_eq!(s.screen(), Screen::Summary);
        let summary = s.quiz.final_score().unwrap();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.accuracy, "50.00");
    }

    // -- Summary screen --

    #[test]
    fn summary_restart_returns_initial_state() {
        for key in [Action::Restart, Action::Primary] {
            let mut s = session();
            apply(&mut s, &[Action::Pick(1), Action::Primary, Action::Primary]);
            apply(&mut s, &[Action::Pick(1), Action::Primary, Action::Primary]);
            assert_eq!(s.screen(), Screen::Summary);

            apply(&mut s, &[key]);
            assert_eq!(s.screen(), Screen::Question);
            assert_eq!(s.quiz.state(), &QuizState::initial());
            assert_eq!(s.cursor, 0);
        }
    }

    #[test]
    fn summary_ignores_selection_keys() {
        let mut s = session();
        apply(&mut s, &[Action::Pick(1), Action::Primary, Action::Primary]);
        apply(&mut s, &[Action::Pick(1), Action::Primary, Action::Primary]);
        apply(&mut s, &[Action::Pick(2), Action::MoveDown, Action::Choose]);
        assert_eq!(s.screen(), Screen::Summary);
        assert_eq!(s.quiz.score(), 2);
    }
}
