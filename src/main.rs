use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledger_contracts::{config, dispatch, SqliteStore, Surface};

#[derive(Debug, Parser)]
#[command(
    name = "ledger-contracts",
    version,
    about = "Contract registry on a single-key ledger"
)]
struct Args {
    /// SQLite ledger file (defaults to the configured or data-dir path)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Print query results hex-encoded instead of as text
    #[arg(long, global = true)]
    hex: bool,

    #[command(subcommand)]
    command: CallCommand,
}

#[derive(Debug, Subcommand)]
enum CallCommand {
    /// Write the first contract and reset the index
    Init {
        customer: String,
        provider: String,
        period: String,
        status: String,
    },
    /// Mutating call: create_contract | transaction
    Invoke {
        function: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Read-only call: read | list_contracts
    Query {
        function: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl CallCommand {
    fn into_call(self) -> (Surface, String, Vec<String>) {
        match self {
            CallCommand::Init {
                customer,
                provider,
                period,
                status,
            } => (
                Surface::Init,
                "init".to_string(),
                vec![customer, provider, period, status],
            ),
            CallCommand::Invoke { function, args } => (Surface::Invoke, function, args),
            CallCommand::Query { function, args } => (Surface::Query, function, args),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load()?;
    init_tracing(&config.log_level);

    let db_path = args
        .db
        .or_else(|| config.resolved_store_path())
        .context("no ledger path available; pass --db")?;
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create data dir {}", parent.display()))?;
    }
    let mut store = SqliteStore::open(&db_path)?;
    let registry = config.registry();

    let (surface, function, call_args) = args.command.into_call();
    let output = dispatch(&registry, &mut store, surface, &function, &call_args)
        .with_context(|| format!("{surface} '{function}' failed"))?;

    if let Some(bytes) = output {
        print_bytes(&bytes, args.hex)?;
    }
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_bytes(bytes: &[u8], as_hex: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if as_hex {
        writeln!(stdout, "0x{}", hex::encode(bytes))?;
    } else {
        match std::str::from_utf8(bytes) {
            Ok(text) => writeln!(stdout, "{text}")?,
            Err(_) => writeln!(stdout, "0x{}", hex::encode(bytes))?,
        }
    }
    Ok(())
}
