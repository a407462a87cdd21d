//! vendor-topsis binary entry point.
//!
//! Ranks wedding vendors described in a JSON/YAML session document.
//! Logs go to stderr; stdout carries the export so it can be piped.

use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use vendor_topsis::adapters::document::{AlternativeInput, SessionDocument};
use vendor_topsis::adapters::storage::{FileRecordStore, InMemoryRecordStore};
use vendor_topsis::application::{
    GetRankingHistoryHandler, GetRankingHistoryQuery, RunRankingCommand, RunRankingHandler,
};
use vendor_topsis::config::{AppConfig, LoggingConfig, StorageBackend, StorageConfig};
use vendor_topsis::domain::analysis::{chart_entries, export_as_delimited_text};
use vendor_topsis::domain::ranking::{CriteriaSet, RankingSession};
use vendor_topsis::ports::RankingRecordStore;

#[derive(Parser)]
#[command(
    name = "vendor-topsis",
    version,
    about = "Rank wedding vendors against weighted yes/no questions using TOPSIS"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the vendors in a session document (.json, .yaml or .yml)
    Rank {
        /// Session document to read
        input: PathBuf,
        /// Write the export to a file instead of stdout; without a value the
        /// configured export file name is used
        #[arg(short, long)]
        output: Option<Option<PathBuf>>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
        /// Append the ranking to the record store
        #[arg(long)]
        record: bool,
    },
    /// Print the built-in vendor criteria
    Criteria,
    /// Print a blank session document to fill in
    Template,
    /// Show recorded rankings, most recent first
    History {
        /// Number of records to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Delimited text with one row per vendor
    Csv,
    /// Ranked results as JSON
    Json,
    /// Chart entries (name, score, colour, rank) as JSON
    Chart,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::Chart => "json",
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

fn record_store(storage: &StorageConfig) -> Arc<dyn RankingRecordStore> {
    match storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryRecordStore::new()),
        StorageBackend::File => Arc::new(FileRecordStore::new(&storage.path)),
    }
}

async fn run(command: Commands, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Rank {
            input,
            output,
            format,
            record,
        } => {
            let document = SessionDocument::load(&input).await?;
            let cmd = RunRankingCommand {
                alternatives: document.alternatives()?,
                criteria: document.criteria(),
                record,
            };
            let criteria = cmd.criteria.clone();

            let handler = RunRankingHandler::new(record_store(&config.storage));
            let result = handler.handle(cmd).await?;
            let results = &result.report.results;

            let rendered = match format {
                OutputFormat::Csv => export_as_delimited_text(results, &criteria),
                OutputFormat::Json => serde_json::to_string_pretty(results)?,
                OutputFormat::Chart => serde_json::to_string_pretty(&chart_entries(results))?,
            };

            let output = output.map(|path| {
                path.unwrap_or_else(|| config.export.output_path(format.extension()))
            });

            match output {
                Some(path) => {
                    tokio::fs::write(&path, rendered).await?;
                    tracing::info!(path = %path.display(), "Export written");
                }
                None => println!("{rendered}"),
            }

            if let Some(winner) = result.report.winner() {
                eprintln!("Top vendor: {} ({})", winner.name, winner.percentage);
            }
            if let Some(id) = result.record_id {
                eprintln!("Recorded as {id}");
            }
        }
        Commands::Criteria => {
            let criteria = CriteriaSet::vendor();
            for (label, criterion) in criteria.labels().iter().zip(criteria.iter()) {
                let polarity = if criterion.benefit { "benefit" } else { "cost" };
                println!(
                    "{label}\t{:.2}\t{polarity}\t{}\t{}",
                    criterion.weight, criterion.category, criterion.text
                );
            }
        }
        Commands::Template => {
            let session = RankingSession::new(CriteriaSet::vendor());
            let document = SessionDocument {
                criteria: None,
                alternatives: session
                    .alternatives()
                    .iter()
                    .map(|alt| AlternativeInput {
                        name: alt.name.clone(),
                        responses: alt.responses.iter().map(|r| r.raw()).collect(),
                        color: None,
                    })
                    .collect(),
            };
            print!("{}", serde_yaml::to_string(&document)?);
        }
        Commands::History { limit } => {
            let handler = GetRankingHistoryHandler::new(record_store(&config.storage));
            let records = handler.handle(GetRankingHistoryQuery { limit }).await?;
            if records.is_empty() {
                eprintln!("No rankings recorded yet");
            }
            for record in records {
                println!(
                    "{}\t{}\t{} vendors\t{}",
                    record.computed_at,
                    record.id,
                    record.results.len(),
                    record.winner_name().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}
