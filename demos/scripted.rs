//! Drive the quiz without a terminal UI.
//!
//! Run with: cargo run --example scripted [answer...]
//!
//! Each answer is submitted to the current question. An answer that is not
//! one of its options is ignored and the next answer goes to the same
//! question. With no arguments the run answers "Au" then "3.16" against the
//! built-in bank.

use std::env;

use nsmq_quiz::audio::{AudioChannel, AudioSink, SilentSink};
use nsmq_quiz::questions::builtin;
use nsmq_quiz::quiz::Quiz;
use nsmq_quiz::report::format_summary;
use nsmq_quiz::types::OutputFormat;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let answers: Vec<String> = if args.is_empty() {
        vec!["Au".to_string(), "3.16".to_string()]
    } else {
        args
    };

    let set = builtin().expect("built-in question bank is valid");
    let mut quiz = Quiz::from_set(&set).expect("built-in bank has questions");

    let mut audio = AudioChannel::activate(false, || Ok(Box::new(SilentSink) as Box<dyn AudioSink>));
    println!("Audio: {}", audio.mute_state().label());

    for answer in &answers {
        let Some(question) = quiz.current_question() else {
            break;
        };
        println!("\n{}", quiz.round_label());
        println!("  {}", question.prompt);

        if !quiz.select(answer) {
            println!("  '{}' is not an option, ignored", answer);
            continue;
        }
        quiz.reveal();

        let question = quiz.current_question().expect("still on a question after reveal");
        let verdict = if question.correct_option == *answer {
            "correct"
        } else {
            "wrong"
        };
        println!("  Answered {}: {}", answer, verdict);
        println!("  {}", question.explanation);
        println!("  [{}]", quiz.primary_label());

        quiz.advance();
    }

    audio.toggle_mute();
    println!("\nAudio: {}", audio.mute_state().label());

    match quiz.final_score() {
        Some(summary) => print!("\n{}", format_summary(&summary, OutputFormat::Human)),
        None => println!(
            "\nStopped at {} with {} of {} correct so far",
            quiz.round_label(),
            quiz.score(),
            quiz.total()
        ),
    }
}
