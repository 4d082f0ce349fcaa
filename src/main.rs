use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quiz_review::session::{DEFAULT_ADVANCE_DELAY, DEFAULT_REVIEW_INTERVAL};
use quiz_review::{logging, Quiz, SessionConfig, DEFAULT_QUESTIONS_PATH};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Normal-mode answers between review rounds of missed questions
    #[arg(short = 'i', long, default_value_t = DEFAULT_REVIEW_INTERVAL,
          value_parser = clap::value_parser!(u32).range(1..))]
    review_interval: u32,

    /// Milliseconds to wait after an answer before moving on
    #[arg(short = 'd', long, default_value_t = DEFAULT_ADVANCE_DELAY.as_millis() as u64)]
    advance_delay_ms: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Ring the terminal bell on wrong answers
    #[arg(long)]
    bell: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init(args.log_file.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let config = SessionConfig {
        review_interval: args.review_interval,
        advance_delay: Duration::from_millis(args.advance_delay_ms),
    };

    let mut quiz = match Quiz::from_json(&args.questions, config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if args.bell {
        quiz = quiz.with_bell();
    }

    if let Err(e) = quiz.run() {
        tracing::error!(error = %e, "quiz stopped");
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
