//! nsmq-quiz CLI
//!
//! Play the quiz in the terminal, list the question bank, or check a
//! replacement bank before using it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use nsmq_quiz::logging;
use nsmq_quiz::questions::{self, QuestionError};
use nsmq_quiz::quiz::Quiz;
use nsmq_quiz::report::{format_question_set, format_summary};
use nsmq_quiz::tui;
use nsmq_quiz::types::{
    AudioConfig, Difficulty, OutputFormat, PlayConfig, default_audio_asset,
};

#[derive(Parser)]
#[command(name = "nsmq-quiz")]
#[command(about = "Multiple-choice science quiz in the terminal")]
#[command(version)]
// Top-level play flags and a subcommand are one or the other, never both
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz (default)
    Play(PlayArgs),

    /// Print the question bank, every difficulty
    Questions {
        /// Question bank JSON file (default: built-in bank)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Validate a question bank file
    Check {
        /// Question bank JSON file
        path: PathBuf,
    },
}

#[derive(clap::Args, Clone)]
struct PlayArgs {
    /// Question bank JSON file (default: built-in bank)
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Background track to loop. Not bundled: put a file at the default
    /// path or point this at your own
    #[arg(long, default_value_os_t = default_audio_asset())]
    audio: PathBuf,

    /// Start with background audio muted
    #[arg(long)]
    muted: bool,

    /// Never open an audio device
    #[arg(long)]
    no_audio: bool,

    /// Directory for the log file (default: platform cache dir)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl From<PlayArgs> for PlayConfig {
    fn from(args: PlayArgs) -> Self {
        PlayConfig {
            questions: args.questions,
            audio: AudioConfig {
                asset: args.audio,
                start_muted: args.muted,
                enabled: !args.no_audio,
            },
            log_dir: args.log_dir,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_play(cli.play.into()),
        Some(Commands::Play(args)) => cmd_play(args.into()),
        Some(Commands::Questions { questions, format }) => {
            cmd_questions(questions, format.into())
        }
        Some(Commands::Check { path }) => cmd_check(path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(config: PlayConfig) -> Result<(), String> {
    let log_dir = config.log_dir.clone().unwrap_or_else(logging::default_log_dir);

    // Held until exit so buffered log lines are flushed
    let _log_guard = match logging::init(&log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Note: logging disabled: {}", e);
            None
        }
    };

    let set = questions::load(config.questions.as_deref()).map_err(describe)?;
    let quiz = Quiz::from_set(&set).map_err(describe)?;

    let summary = tui::run(quiz, &config.audio).map_err(|e| e.to_string())?;

    if let Some(summary) = summary {
        print!("{}", format_summary(&summary, OutputFormat::Human));
    }

    Ok(())
}

fn cmd_questions(path: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let set = questions::load(path.as_deref()).map_err(describe)?;
    print!("{}", format_question_set(&set, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn cmd_check(path: PathBuf) -> Result<(), String> {
    let set = questions::load_from_path(&path).map_err(describe)?;

    println!("{}: OK", path.display());
    for difficulty in Difficulty::ALL {
        let count = set.get(difficulty).len();
        let note = if difficulty == Difficulty::TRAVERSED { "  (played)" } else { "" };
        println!("  {:<7} {:>3} questions{}", difficulty.to_string(), count, note);
    }

    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

/// Render an error with its source chain on one line.
fn describe(error: QuestionError) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = std::error::Error::source(cause);
    }
    message
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn play_config(args: &[&str]) -> PlayConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            None => cli.play.into(),
            Some(Commands::Play(args)) => args.into(),
            Some(_) => panic!("expected a play invocation"),
        }
    }

    #[test]
    fn play_flags_work_with_and_without_subcommand() {
        for args in [
            &["nsmq-quiz", "--no-audio", "--muted"][..],
            &["nsmq-quiz", "play", "--no-audio", "--muted"][..],
        ] {
            let config = play_config(args);
            assert!(!config.audio.enabled, "{:?}", args);
            assert!(config.audio.start_muted, "{:?}", args);
        }
    }

    #[test]
    fn path_flags_reach_play_config() {
        let config = play_config(&[
            "nsmq-quiz",
            "--questions",
            "bank.json",
            "--audio",
            "loop.ogg",
            "--log-dir",
            "logs",
        ]);
        assert_eq!(config.questions, Some(PathBuf::from("bank.json")));
        assert_eq!(config.audio.asset, PathBuf::from("loop.ogg"));
        assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn flags_before_subcommand_are_rejected() {
        assert!(Cli::try_parse_from(["nsmq-quiz", "--no-audio", "play"]).is_err());
        assert!(Cli::try_parse_from(["nsmq-quiz", "--muted", "questions"]).is_err());
    }

    #[test]
    fn bare_invocation_plays_with_defaults() {
        let config = play_config(&["nsmq-quiz"]);
        assert!(config.audio.enabled);
        assert!(!config.audio.start_muted);
        assert!(config.questions.is_none());
        assert_eq!(config.audio.asset, default_audio_asset());
    }

    #[test]
    fn questions_and_check_subcommands_parse() {
        let cli = Cli::try_parse_from(["nsmq-quiz", "questions", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Questions {
                format: OutputFormatArg::Json,
                questions: None,
            })
        ));

        let cli = Cli::try_parse_from(["nsmq-quiz", "check", "bank.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check { path }) if path == PathBuf::from("bank.json")));
    }
}
