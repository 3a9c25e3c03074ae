//! nsmq-quiz: a terminal multiple-choice quiz with reveal, scoring and
//! background audio.

pub mod audio;
pub mod logging;
pub mod questions;
pub mod quiz;
pub mod report;
pub mod tui;
pub mod types;
