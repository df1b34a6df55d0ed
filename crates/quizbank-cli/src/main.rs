//! quizbank CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizbank", version, about = "Quiz scoring and mastery tracking backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the full question bank
    Questions {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Submit a batch of answers and update mastery
    Submit {
        /// Path to a JSON file with [{"question_id": ..., "choice": ...}]
        #[arg(long)]
        answers: PathBuf,

        /// Student identifier (defaults to the configured student)
        #[arg(long)]
        student: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Save the full submission report JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show a student's topic mastery
    Progress {
        /// Student identifier
        student: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show study notes for a topic
    Notes {
        /// Topic name (exact match)
        #[arg(long)]
        topic: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate a question bank file
    Validate {
        /// Path to the question bank JSON (defaults to the configured bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizbank_core=info".parse().unwrap())
                .add_directive("quizbank_store=info".parse().unwrap())
                .add_directive("quizbank_cli=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Questions { format, config } => commands::questions::execute(format, config),
        Commands::Submit {
            answers,
            student,
            format,
            output,
            config,
        } => commands::submit::execute(answers, student, format, output, config).await,
        Commands::Progress {
            student,
            format,
            config,
        } => commands::progress::execute(student, format, config).await,
        Commands::Notes { topic, format } => commands::notes::execute(topic, format),
        Commands::Validate { bank, config } => commands::validate::execute(bank, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
