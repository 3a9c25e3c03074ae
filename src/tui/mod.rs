//! TUI module for the interactive quiz.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (Session, Screen, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal, key reader, audio)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
