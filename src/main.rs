//! vision-guide: inspect the question catalog, analyze answer files, render
//! vision reports and manage saved questionnaire sessions.
//!
//! Usage:
//!   vision-guide questions --category social
//!   vision-guide analyze answers.json --pretty
//!   vision-guide report answers.json --format markdown --generate
//!   vision-guide session save answers.json --index 7
//!   vision-guide follow-up time_3 "Early mornings before anyone is awake"

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use prettytable::{Table, row};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use vision_guide::catalog::{self, Category};
use vision_guide::config::Config;
use vision_guide::generation::{self, prompts};
use vision_guide::report::VisionReport;
use vision_guide::session::QuestionnaireSession;
use vision_guide::storage::SessionStore;
use vision_guide::{analyze_answers, load_answers};

#[derive(Parser)]
#[command(name = "vision-guide")]
#[command(about = "Five-wealth life vision questionnaire and analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog questions
    Questions {
        #[arg(long)]
        category: Option<Category>,
    },
    /// Analyze an answers file and print the result as JSON
    Analyze {
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Render a life vision report for an answers file
    Report {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,
        /// Ask the configured generator for the vision statement
        #[arg(long)]
        generate: bool,
    },
    /// Manage saved sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Generate follow-up questions for one answer
    FollowUp { question_id: String, answer: String },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Save answers as the active session
    Save {
        file: PathBuf,
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// List saved sessions, newest first
    List,
    /// Show a saved session and make it active
    Show { id: String },
    /// Forget the active session
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Markdown,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Questions { category } => questions(category),
        Commands::Analyze { file, pretty } => analyze(&file, pretty),
        Commands::Report {
            file,
            format,
            generate,
        } => report(&config, &file, format, generate).await,
        Commands::Session { action } => session(&config, action),
        Commands::FollowUp {
            question_id,
            answer,
        } => follow_up(&config, &question_id, &answer).await,
    }
}

fn questions(category: Option<Category>) -> Result<()> {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    let mut table = Table::new();
    table.add_row(row!["ID", "Category", "Type", "Required", "Question"]);
    for c in categories {
        for q in catalog::questions_of(c) {
            table.add_row(row![q.id, c.title(), q.kind.name(), q.required, q.prompt]);
        }
    }
    table.printstd();
    Ok(())
}

fn analyze(file: &Path, pretty: bool) -> Result<()> {
    let answers = load_answers(file)?;
    let analysis = analyze_answers(&answers);
    let out = if pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };
    println!("{}", out);
    Ok(())
}

async fn report(config: &Config, file: &Path, format: ReportFormat, generate: bool) -> Result<()> {
    let answers = load_answers(file)?;
    let analysis = analyze_answers(&answers);
    let mut report = VisionReport::build(&analysis);
    if generate {
        let generator = generation::create_generator(&config.generation);
        report = report.with_generated_vision(generator.as_ref(), &answers).await;
    }

    match format {
        ReportFormat::Markdown => print!("{}", report.render_markdown()),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn session(config: &Config, action: SessionAction) -> Result<()> {
    let store = SessionStore::from_config(&config.storage);
    match action {
        SessionAction::Save { file, index } => {
            let answers = load_answers(&file)?;
            let session = QuestionnaireSession::resume(answers, index);
            let saved = store.save_session(&session)?;
            println!(
                "✅ Saved {} ({} answers, question {})",
                saved.session_id,
                saved.answers.len(),
                saved.current_question_index + 1
            );
        }
        SessionAction::List => {
            let sessions = store.saved_sessions();
            if sessions.is_empty() {
                println!("No saved sessions in {}.", store.root().display());
                return Ok(());
            }
            let mut table = Table::new();
            table.add_row(row!["Session", "Last Updated", "Answers", "Question"]);
            for s in sessions {
                table.add_row(row![
                    s.session_id,
                    s.last_updated.format("%Y-%m-%d %H:%M:%S"),
                    s.answers.len(),
                    s.current_question_index + 1
                ]);
            }
            table.printstd();
        }
        SessionAction::Show { id } => {
            let saved = store
                .load_session(&id)?
                .with_context(|| format!("No saved session '{}'", id))?;
            let progress = saved.to_session();
            println!("{}", serde_json::to_string_pretty(&saved)?);
            eprintln!(
                "Resumed at {} ({:.0}% through the questionnaire)",
                progress.current_category().title(),
                progress.progress()
            );
        }
        SessionAction::Clear => {
            store.clear_all()?;
            println!("Active session cleared.");
        }
    }
    Ok(())
}

async fn follow_up(config: &Config, question_id: &str, answer: &str) -> Result<()> {
    let question = catalog::question(question_id)
        .with_context(|| format!("Unknown question id '{}'", question_id))?;
    let context = json!({
        "category": question.category,
        "questionType": question.kind.name(),
    });

    let generator = generation::create_generator(&config.generation);
    let reply = generator
        .generate(&prompts::follow_up_prompt(question.prompt, answer, &context))
        .await?;
    for line in generation::parse_lines(&reply) {
        println!("- {}", line);
    }
    Ok(())
}
