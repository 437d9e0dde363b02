use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pif2pass::config::{default_store_dir, DEFAULT_CONCURRENCY, DEFAULT_INSERT_COMMAND};
use pif2pass::importer::{ImportOptions, Importer, Outcome, FORCE_HINT};
use pif2pass::stores::pass::PassStore;
use pif2pass::{Config, Store};

#[derive(Parser)]
#[command(name = "pif2pass")]
#[command(version)]
#[command(about = "Import a 1Password .1pif export into a pass/gopass store", long_about = None)]
struct Cli {
    /// 1Password interchange export (.1pif)
    file: PathBuf,

    /// Overwrite existing passwords
    #[arg(short, long)]
    force: bool,

    /// Insert several passwords concurrently
    #[arg(short, long)]
    parallel: bool,

    /// Concurrent insertions with --parallel
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    jobs: usize,

    /// Password store directory
    #[arg(long, env = "PASSWORD_STORE_DIR")]
    store_dir: Option<PathBuf>,

    /// Program used as `<cmd> insert -m <title>`
    #[arg(long, env = "PIF2PASS_INSERT_COMMAND", default_value = DEFAULT_INSERT_COMMAND)]
    insert_command: String,

    /// Print what would be imported without touching the store
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_store_dir(self.store_dir.clone().unwrap_or_else(default_store_dir))
            .with_insert_command(&self.insert_command)
            .with_force(self.force)
            .with_parallel(self.parallel, self.jobs)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    let credentials = pif2pass::read_export(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    println!("Read {} passwords.", credentials.len());

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&credentials)?);
        return Ok(());
    }

    let config = cli.config();
    let mut store = PassStore::new(&config);
    store.init().await?;

    let importer = Importer::new(&store, ImportOptions::from(&config));
    let report = importer
        .import(&credentials, |outcome| match outcome {
            Outcome::Imported { title } => println!("Imported {}", title),
            Outcome::Failed { title, .. } => eprintln!("ERROR: Failed to import {}", title),
        })
        .await;

    if let Some(summary) = report.failure_summary() {
        eprintln!("{}", summary);
        eprintln!("{}", FORCE_HINT);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
