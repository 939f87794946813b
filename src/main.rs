//! jargon - run functional programming snippets from the command line
//!
//! Usage:
//!   jargon list
//!   jargon run <NAME>... [--data-file <PATH>] [--seed <SEED>] [--sample-size <N>]
//!   jargon run --all
//!
//! `JARGON_DATA_FILE`, `JARGON_SEED` and `JARGON_SAMPLE_SIZE` supply the
//! defaults that the flags override.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use jargon::config::RunnerConfig;
use jargon::snippets::{self, CATALOG, Snippet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jargon")]
#[command(about = "Functional programming vocabulary, one runnable snippet per term")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every snippet with the term it demonstrates
    List,
    /// Run snippets by name
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Snippet names, run in the order given
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    names: Vec<String>,

    /// Run every snippet in catalog order
    #[arg(long)]
    all: bool,

    /// File read by the continuation snippet
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Seed for the random numbers in the lazy evaluation snippet
    #[arg(long)]
    seed: Option<u64>,

    /// How many random numbers the lazy evaluation snippet takes
    #[arg(long)]
    sample_size: Option<usize>,
}

impl RunArgs {
    fn config(&self) -> anyhow::Result<RunnerConfig> {
        let mut config = RunnerConfig::from_env().context("failed to load configuration")?;
        if let Some(data_file) = &self.data_file {
            config = config.with_data_file(data_file);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(sample_size) = self.sample_size {
            config = config.with_sample_size(sample_size);
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jargon=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            snippets::list(&mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run(args) => run(&args),
    }
}

fn run(args: &RunArgs) -> anyhow::Result<ExitCode> {
    let config = args.config()?;
    tracing::debug!(
        data_file = %config.data_file.display(),
        seed = ?config.seed,
        sample_size = config.sample_size,
        "configuration loaded"
    );

    let selected: Vec<&Snippet> = if args.all {
        CATALOG.iter().collect()
    } else {
        snippets::select(args.names.as_slice())?
    };

    let failures = snippets::run_all(&selected, &mut io::stdout().lock(), &config)?;
    if failures == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(failures, "some snippets failed");
        Ok(ExitCode::FAILURE)
    }
}
