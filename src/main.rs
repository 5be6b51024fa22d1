//! Binary entry point for quranqa.
//!
//! This binary provides the CLI interface for the question-answering responder.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr/print_stdout in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quranqa::corpus::VerseSearcher;
use quranqa::models::MatchMethod;
use quranqa::services::{self, KnowledgeStore, Responder};
use quranqa::{FileCorpus, QaConfig, observability};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// quranqa - answers Urdu questions about the Quran.
#[derive(Parser)]
#[command(name = "quranqa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "QURANQA_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for random response choices.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Answer a question.
    Ask {
        /// The question.
        question: String,

        /// Print the full response as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List popular questions.
    Popular,

    /// Print a random fact.
    Fact,

    /// List categories with sample questions.
    Categories,

    /// Search question texts.
    Search {
        /// Substring to look for.
        query: String,
    },

    /// Search the verse corpus directly.
    Verses {
        /// The search query.
        query: String,

        /// Maximum number of results.
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Enrich the knowledge-base file with keywords, links and curated pools.
    Enrich {
        /// Show what would be changed without writing the file.
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.seed);
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_settings(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration: file (explicit or default location), then environment.
fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<QaConfig> {
    let config = match path {
        Some(path) => QaConfig::load_from_file(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => QaConfig::load_default(),
    }
    .with_env_overrides();

    Ok(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

/// Runs the selected command.
fn run_command(command: Commands, config: &QaConfig) -> Result<()> {
    match command {
        Commands::Ask { question, json } => cmd_ask(config, &question, json),
        Commands::Popular => cmd_popular(config),
        Commands::Fact => cmd_fact(config),
        Commands::Categories => cmd_categories(config),
        Commands::Search { query } => cmd_search(config, &query),
        Commands::Verses { query, limit } => cmd_verses(config, &query, limit),
        Commands::Enrich { dry_run } => cmd_enrich(config, dry_run),
    }
}

fn rng(config: &QaConfig) -> StdRng {
    config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

fn cmd_ask(config: &QaConfig, question: &str, json: bool) -> Result<()> {
    let store = KnowledgeStore::open(&config.data_file);
    let responder = Responder::from_config(config);
    let response = responder.respond(question, &store.snapshot(), &mut rng(config));

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", response.answer);
    if let Some(fact) = &response.fact {
        println!("\n💡 {fact}");
    }
    let suggestions = response.suggestions();
    if !suggestions.is_empty() {
        println!();
        for suggestion in suggestions {
            println!("  • {suggestion}");
        }
    }
    Ok(())
}

fn cmd_popular(config: &QaConfig) -> Result<()> {
    let store = KnowledgeStore::open(&config.data_file);
    for question in services::popular_questions(&store.snapshot()) {
        println!("{question}");
    }
    Ok(())
}

fn cmd_fact(config: &QaConfig) -> Result<()> {
    let store = KnowledgeStore::open(&config.data_file);
    println!("{}", services::daily_fact(&store.snapshot(), &mut rng(config)));
    Ok(())
}

fn cmd_categories(config: &QaConfig) -> Result<()> {
    let store = KnowledgeStore::open(&config.data_file);
    for summary in services::categories(&store.snapshot()) {
        println!("{} ({})", summary.title, summary.category);
        for question in &summary.questions {
            println!("  - {question}");
        }
    }
    Ok(())
}

fn cmd_search(config: &QaConfig, query: &str) -> Result<()> {
    let store = KnowledgeStore::open(&config.data_file);
    let hits = services::quick_search(&store.snapshot(), query);
    if hits.is_empty() {
        println!("No matching questions.");
    }
    for hit in hits {
        println!("{}\n  {}", hit.question, hit.preview);
    }
    Ok(())
}

fn cmd_verses(config: &QaConfig, query: &str, limit: usize) -> Result<()> {
    let path = config
        .corpus_file
        .as_ref()
        .context("no corpus configured (set corpus_file or QURANQA_CORPUS_FILE)")?;
    let corpus = FileCorpus::new(path);
    let result = corpus.search(query)?;

    println!("Total matches: {}", result.total_matches);
    let hits = result
        .primary_match
        .iter()
        .chain(result.other_matches.iter())
        .take(limit);
    for (i, hit) in hits.enumerate() {
        let methods: Vec<&str> = hit.methods.iter().map(MatchMethod::as_str).collect();
        println!(
            "{}. 📖 {}\n   📝 {}\n   ✓ {:.2} ({})",
            i + 1,
            hit.record.reference,
            hit.record.verse,
            hit.score,
            methods.join(", ")
        );
    }
    Ok(())
}

fn cmd_enrich(config: &QaConfig, dry_run: bool) -> Result<()> {
    let path = &config.data_file;
    let mut data = services::load_knowledge_data(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let report = services::enrich(&mut data);

    println!(
        "{} questions, {} keywords added, {} records linked",
        report.questions, report.keywords_added, report.related_filled
    );
    if dry_run {
        println!("Dry run: {} not modified.", path.display());
        return Ok(());
    }

    services::save_knowledge_data(path, &data)
        .with_context(|| format!("saving {}", path.display()))?;
    println!("Saved {}", path.display());
    Ok(())
}
