mod actors;
mod budget;
mod engine;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::budget::{Categorizer, KeywordTable, DEFAULT_SAVINGS_PERCENT, DEFAULT_WINDOW_DAYS};
use crate::engine::{BudgetEngine, UserReport, DEFAULT_BACKPRESSURE};
use crate::models::{Transaction, TransactionKind};
use crate::storage::{TransactionStorage, DEFAULT_LIST_LIMIT};
use crate::types::{Percent, UserId};

#[derive(Parser)]
#[command(
    name = "budget-engine",
    version,
    about = "Categorizes income and expense transactions and suggests a monthly budget"
)]
struct Cli {
    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, global = true, env = "BUDGET_LOG_LEVEL", default_value = "error")]
    log_level: String,

    /// CSV file with a `keyword,category` header replacing the built-in keyword table
    #[arg(long, global = true, env = "BUDGET_KEYWORDS")]
    keywords: Option<PathBuf>,

    /// Rows buffered between the CSV reader and the per-user workers
    #[arg(long, global = true, env = "BUDGET_BACKPRESSURE", default_value_t = DEFAULT_BACKPRESSURE)]
    backpressure: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ingest a transactions CSV and print one JSON budget report per user
    Budget {
        /// CSV with a `user,date,description,amount,category,type` header
        input: PathBuf,
        /// Trailing days of expenses the budget is built from
        #[arg(long, env = "BUDGET_WINDOW_DAYS", default_value_t = DEFAULT_WINDOW_DAYS)]
        window_days: u32,
        /// Percent set aside as savings
        #[arg(long, env = "BUDGET_SAVINGS_PERCENT", default_value_t = Percent::from(DEFAULT_SAVINGS_PERCENT))]
        savings_percent: Percent,
        /// Date the window ends on (YYYY-MM-DD), defaults to today in UTC
        #[arg(long, env = "BUDGET_TODAY")]
        today: Option<NaiveDate>,
    },
    /// Ingest a transactions CSV and print a user's most recent transactions as JSON
    Transactions {
        input: PathBuf,
        #[arg(long)]
        user: UserId,
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
        /// Date given to rows without one (YYYY-MM-DD), defaults to today in UTC
        #[arg(long, env = "BUDGET_TODAY")]
        today: Option<NaiveDate>,
    },
    /// Print the category a single transaction would be given
    Categorize {
        description: String,
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,
        #[arg(long, value_parser = parse_kind, default_value = "expense")]
        kind: TransactionKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let categorizer = load_categorizer(cli.keywords.as_deref())?;

    match cli.command {
        Command::Budget { input, window_days, savings_percent, today } => {
            let mut engine = BudgetEngine::new(Arc::new(TransactionStorage::new()))
                .with_categorizer(categorizer)
                .with_backpressure(cli.backpressure)
                .with_window_days(window_days)
                .with_savings_percent(savings_percent);

            if let Some(today) = today {
                engine = engine.with_today(today);
            }

            ingest(&engine, &input).await?;
            write_reports_to_stdout(&engine.reports())?;
        }
        Command::Transactions { input, user, limit, today } => {
            let mut engine = BudgetEngine::new(Arc::new(TransactionStorage::new()))
                .with_categorizer(categorizer)
                .with_backpressure(cli.backpressure);

            if let Some(today) = today {
                engine = engine.with_today(today);
            }

            ingest(&engine, &input).await?;
            write_transactions_to_stdout(&engine.transactions(user, limit))?;
        }
        Command::Categorize { description, amount, kind } => {
            println!("{}", categorizer.categorize(&description, amount, kind));
        }
    }

    Ok(())
}

async fn ingest(engine: &BudgetEngine, input: &Path) -> Result<()> {
    let timer = Instant::now();
    engine.run(input).await?;
    let duration = timer.elapsed();

    info!("Ingested {} in: {duration:?}", input.display());

    Ok(())
}

fn load_categorizer(keywords: Option<&Path>) -> Result<Categorizer> {
    let Some(path) = keywords else {
        return Ok(Categorizer::default());
    };

    let table = KeywordTable::from_csv_path(path)
        .with_context(|| format!("Could not load keyword table from {}", path.display()))?;

    if table.is_empty() {
        warn!("Keyword table {} has no rules, only the amount fallback will apply", path.display());
    } else {
        info!("Loaded [{}] keyword rules from {}", table.len(), path.display());
    }

    Ok(Categorizer::new(table))
}

fn parse_kind(value: &str) -> Result<TransactionKind, String> {
    TransactionKind::parse(value).ok_or_else(|| format!("'{value}' is not 'income' or 'expense'"))
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the JSON output, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_reports_to_stdout(reports: &[UserReport]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    for report in reports {
        serde_json::to_writer(&mut output, report)?;
        writeln!(output)?;
    }

    output.flush()?;

    Ok(())
}

fn write_transactions_to_stdout(transactions: &[Transaction]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, transactions)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
