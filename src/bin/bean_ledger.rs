// src/bin/bean_ledger.rs
//! Run contract calls against a local SQLCipher ledger
//!
//! The contract state and the in-process bean bank share one database,
//! each in its own namespace.

use anyhow::{Context, Result};
use bean_ledger::aliases::DbPassphrase;
use bean_ledger::{
    export_state_to_json, load_config, open_ledger_db, BeanBank, Chaincode, SqliteState,
};
use clap::{Parser, Subcommand};
use rpassword::prompt_password;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bean-ledger", version, about = "Bean ledger contract runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// State-changing call, e.g. `invoke setprice L1 seller1 100`
    Invoke { function: String, args: Vec<String> },
    /// Read-only call, e.g. `query read L1key`
    Query { function: String, args: Vec<String> },
    /// Credit beans to an address in the bean bank
    Fund { address: String, amount: u64 },
    /// Show an address's bean balance
    Balance { address: String },
    /// List every stored version of a contract key
    History { key: String },
    /// Write a JSON snapshot of the contract namespace
    Export { path: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = load_config().context("Failed to load ledger configuration")?;

    let passphrase = match config.db_passphrase() {
        Some(p) => p,
        None => DbPassphrase::new(
            prompt_password("Ledger database key: ").context("Failed to read database key")?,
        ),
    };

    let conn = open_ledger_db(&config.ledger.path, Some(&passphrase)).with_context(|| {
        format!(
            "Failed to open ledger at {} (wrong key?)",
            config.ledger.path.display()
        )
    })?;

    let mut state = SqliteState::new(&conn, config.ledger.namespace.as_str());
    let mut bank = BeanBank::new(
        config.transfer.contract.as_str(),
        SqliteState::new(&conn, config.transfer.contract.as_str()),
    )
    .with_function(config.transfer.function.as_str());

    match cli.command {
        Command::Invoke { function, args } => {
            let chaincode = Chaincode::new(config)?;
            info!("Protocol variant: {}", chaincode.variant());
            let out = chaincode.invoke(&mut state, &mut bank, &function, args.as_slice())?;
            print_payload(out);
        }
        Command::Query { function, args } => {
            let chaincode = Chaincode::new(config)?;
            let out = chaincode.query(&mut state, &mut bank, &function, args.as_slice())?;
            print_payload(out);
        }
        Command::Fund { address, amount } => {
            let balance = bank.mint(&address, amount)?;
            println!("{address}: {balance}");
        }
        Command::Balance { address } => {
            println!("{address}: {}", bank.balance(&address)?);
        }
        Command::History { key } => {
            let history = state.history(&key)?;
            if history.is_empty() {
                warn!("No history for {key}");
            }
            for v in history {
                println!(
                    "v{} {} {}",
                    v.version,
                    v.written_at,
                    String::from_utf8_lossy(&v.value)
                );
            }
        }
        Command::Export { path } => {
            let count = export_state_to_json(&state, &path)?;
            println!("Exported {count} entr(ies) → {path}");
            println!("SECURITY: this file holds the secret and every payload in plaintext");
        }
    }

    Ok(())
}

fn print_payload(out: Option<Vec<u8>>) {
    match out {
        Some(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
        None => println!("OK"),
    }
}
