//! Tenet CLI binary.
//!
//! Provides the command-line interface for evaluating a company against the
//! investor philosophies.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::{path::PathBuf, process};
use tenet_eval::BandPolicy;
use tenet_traits::StatementKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tenet")]
#[command(about = "Evaluate stocks against famous investors' selection criteria", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the company data comes from.
#[derive(Args, Debug, Clone)]
pub(crate) struct SourceArgs {
    /// Directory of cached company data
    #[arg(long, default_value = "./cache")]
    pub(crate) cache_dir: PathBuf,

    /// Download fresh data even if cached
    #[arg(short, long)]
    pub(crate) update: bool,

    /// Read the company from a snapshot or scraped-tables file instead of downloading it
    #[arg(long, value_name = "FILE")]
    pub(crate) offline: Option<PathBuf>,

    /// JSON map of ISIN to ticker used to resolve ISIN identifiers
    #[arg(long, value_name = "FILE")]
    pub(crate) isin_directory: Option<PathBuf>,

    /// Settings file (thresholds, band policy, periods)
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Language of the report (en, fr)
    #[arg(short, long, default_value = "en")]
    pub(crate) language: String,
}

/// Output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Format {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Boundary treatment of the "meets some" band.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bands {
    /// 0.5 < ratio < 0.7
    Strict,
    /// 0.5 <= ratio <= 0.7
    Inclusive,
}

impl From<Bands> for BandPolicy {
    fn from(bands: Bands) -> Self {
        match bands {
            Bands::Strict => Self::Strict,
            Bands::Inclusive => Self::Inclusive,
        }
    }
}

/// Statement selector for `inspect`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Statement {
    /// Income statement
    Income,
    /// Balance sheet
    Balance,
    /// Cash flow statement
    CashFlow,
    /// Financial ratios
    Ratios,
}

impl From<Statement> for StatementKind {
    fn from(statement: Statement) -> Self {
        match statement {
            Statement::Income => Self::IncomeStatement,
            Statement::Balance => Self::BalanceSheet,
            Statement::CashFlow => Self::CashFlow,
            Statement::Ratios => Self::Ratios,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List available philosophies
    Philosophies {
        /// Filter by style (value, growth, momentum)
        #[arg(short, long)]
        style: Option<String>,

        /// Show the checks and aliases of each philosophy
        #[arg(long)]
        details: bool,
    },

    /// Evaluate a company against the philosophies
    Analyze {
        /// Ticker symbol or ISIN
        id: String,

        /// Philosophies to apply, by name or alias (default: all)
        #[arg(short, long, value_delimiter = ',')]
        philosophy: Vec<String>,

        /// Band boundary policy, overriding the settings file
        #[arg(long, value_enum)]
        bands: Option<Bands>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the net income history and next year's estimate
    Forecast {
        /// Ticker symbol or ISIN
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the key ratios with their grades
    Ratios {
        /// Ticker symbol or ISIN
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print one of the company's statements
    Inspect {
        /// Ticker symbol or ISIN
        id: String,

        /// Statement to print
        #[arg(short, long, value_enum, default_value = "income")]
        statement: Statement,

        #[command(flatten)]
        source: SourceArgs,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `debug` with `--verbose` and `warn` without.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Philosophies { style, details } => {
            cmd::philosophies::list_philosophies(style.as_deref(), details)?;
        }
        Commands::Analyze {
            id,
            philosophy,
            bands,
            format,
            source,
        } => {
            cmd::analyze::analyze(&id, &philosophy, bands, format, &source).await?;
        }
        Commands::Forecast { id, format, source } => {
            cmd::forecast::forecast(&id, format, &source).await?;
        }
        Commands::Ratios { id, format, source } => {
            cmd::ratios::ratios(&id, format, &source).await?;
        }
        Commands::Inspect {
            id,
            statement,
            source,
        } => {
            cmd::inspect::inspect(&id, statement.into(), &source).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "tenet",
            "analyze",
            "aapl",
            "--philosophy",
            "value,growth",
            "--bands",
            "inclusive",
            "--format",
            "json",
            "--language",
            "fr",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Analyze {
            id,
            philosophy,
            bands,
            format,
            source,
        } = cli.command
        else {
            panic!("expected analyze");
        };
        assert_eq!(id, "aapl");
        assert_eq!(philosophy, ["value", "growth"]);
        assert_eq!(bands, Some(Bands::Inclusive));
        assert_eq!(format, Format::Json);
        assert_eq!(source.language, "fr");
        assert_eq!(source.cache_dir, PathBuf::from("./cache"));
        assert!(!source.update);
    }

    #[test]
    fn test_inspect_statement() {
        let cli = Cli::try_parse_from(["tenet", "inspect", "AAPL", "-s", "cash-flow"]).unwrap();
        let Commands::Inspect { statement, .. } = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(StatementKind::from(statement), StatementKind::CashFlow);
    }
}
