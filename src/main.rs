//! Personal Ledger CLI
//!
//! Ingests one bank statement export into a fresh in-memory ledger and logs
//! the resulting transactions.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=info cargo run -- ingest --format ocbc-account --file statement.csv --month 2025-12
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` to see the booked transactions, `debug` for per-row progress

use chrono::Local;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use log::info;
use personal_ledger::{
    ingest, AccountingRepository, InMemoryRepository, Result, StatementFormat, YearMonth,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

/// Personal finance ledger
#[derive(Debug, Parser)]
#[command(name = "personal-ledger", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a statement export and book its rows
    Ingest {
        /// Statement layout of the input file
        #[arg(long, value_enum)]
        format: StatementFormat,

        /// Path to the csv FILE, not a directory
        #[arg(short, long)]
        file: PathBuf,

        /// Only book rows in this month, as yyyy-mm
        #[arg(short, long)]
        month: Option<YearMonth>,
    },
}

fn main() {
    env_logger::init();

    let last_month = YearMonth::previous(Local::now().date_naive());
    let matches = Cli::command()
        .mut_subcommand("ingest", |ingest| {
            ingest.mut_arg("month", |arg| {
                arg.help(format!(
                    "Only book rows in this month, as yyyy-mm (e.g. {})",
                    last_month
                ))
            })
        })
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Ingest {
            format,
            file,
            month,
        } => {
            info!("Ingesting {} from {}", format.name(), file.display());
            let reader = BufReader::new(File::open(&file)?);

            let mut repo = InMemoryRepository::new();
            let summary = ingest(reader, format, month, &mut repo)?;

            for view in repo.list_transactions()? {
                info!(
                    "#{} {} '{}' credit {} debit {} postings {:?}",
                    view.id, view.date, view.name, view.credit, view.debit, view.posting_ids
                );
            }
            info!(
                "Completed: {} transactions booked",
                summary.expenses + summary.incomes
            );
        }
    }

    Ok(())
}
