//! Land registry command-line adapter.
//!
//! Translates subcommands into registry operations and prints results as
//! JSON on stdout. All invariants live in the core; this binary is plumbing.
//!
//! # Usage
//!
//! ```bash
//! # Register a parcel against a persistent data directory
//! land-registry --data /var/lib/land-registry add \
//!     --location "Plot 7" --owner Alice --reference CAD-001
//!
//! # Environment variable instead of the flag
//! LAND_REGISTRY__DATA=/var/lib/land-registry land-registry list
//!
//! # Transfer and inspect the audit log
//! land-registry transfer <land-id> --to Bob
//! land-registry transactions
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use land_registry_storage::{
    LandRegistry, StorageEngine, StoreError, SystemClock, TransactionLog,
};
use land_registry_types::config::ValidationConfig;
use land_registry_types::{LandId, LandPayload, RegistryError};

/// Database file name inside the data directory.
const DB_FILE: &str = "registry.redb";

#[derive(Debug, Parser)]
#[command(name = "land-registry", version, about = "Land parcel ownership ledger")]
struct Cli {
    /// Data directory for the registry database.
    #[arg(long, env = "LAND_REGISTRY__DATA", global = true)]
    data: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all registered lands.
    List,
    /// Look up a land by id.
    Get {
        /// Land identifier.
        land_id: String,
    },
    /// Register a new land parcel.
    Add {
        /// Human-readable location of the parcel.
        #[arg(long)]
        location: String,
        /// Initial holder.
        #[arg(long)]
        owner: String,
        /// External cadastral reference.
        #[arg(long = "reference")]
        unique_identifier: String,
    },
    /// Replace a land's details wholesale.
    Update {
        /// Land identifier.
        land_id: String,
        /// Human-readable location of the parcel.
        #[arg(long)]
        location: String,
        /// Holder to record.
        #[arg(long)]
        owner: String,
        /// External cadastral reference.
        #[arg(long = "reference")]
        unique_identifier: String,
    },
    /// Remove a land from the registry.
    Delete {
        /// Land identifier.
        land_id: String,
    },
    /// Transfer a land to a new owner.
    Transfer {
        /// Land identifier.
        land_id: String,
        /// Receiving owner.
        #[arg(long)]
        to: String,
    },
    /// List the transfer audit log.
    Transactions,
}

/// Top-level error type for the binary, wrapping core and I/O failures.
#[derive(Debug)]
enum CliError {
    Registry(RegistryError),
    Store(StoreError),
    Io(std::io::Error),
    Render(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Registry(e) => write!(f, "{e}"),
            CliError::Store(e) => write!(f, "storage error: {e}"),
            CliError::Io(e) => write!(f, "i/o error: {e}"),
            CliError::Render(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        CliError::Registry(err)
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        CliError::Store(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Render(err)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (data_dir, ephemeral) = resolve_data_dir(cli.data)?;
    if ephemeral {
        tracing::warn!(
            data_dir = %data_dir.display(),
            "No data directory configured; using a shared temp location. \
             Set --data or LAND_REGISTRY__DATA for persistent storage."
        );
    }

    let engine = StorageEngine::open(data_dir.join(DB_FILE))?;
    let registry = LandRegistry::new(&engine, Arc::new(SystemClock), ValidationConfig::default());
    let log = TransactionLog::new(&engine);

    match cli.command {
        Command::List => print_json(&registry.list_lands()?),
        Command::Get { land_id } => print_json(&registry.get_land(&LandId::new(land_id))?),
        Command::Add { location, owner, unique_identifier } => {
            let payload = LandPayload { location, owner, unique_identifier };
            print_json(&registry.add_land(&payload)?)
        },
        Command::Update { land_id, location, owner, unique_identifier } => {
            let payload = LandPayload { location, owner, unique_identifier };
            print_json(&registry.update_land(&LandId::new(land_id), &payload)?)
        },
        Command::Delete { land_id } => print_json(&registry.delete_land(&LandId::new(land_id))?),
        Command::Transfer { land_id, to } => {
            print_json(&registry.transfer_land(&LandId::new(land_id), &to)?)
        },
        Command::Transactions => print_json(&log.list_transactions()?),
    }
}

/// Resolve the data directory, falling back to a shared temp location.
///
/// Returns the directory and whether it is ephemeral.
fn resolve_data_dir(configured: Option<PathBuf>) -> Result<(PathBuf, bool), std::io::Error> {
    let (dir, ephemeral) = match configured {
        Some(dir) => (dir, false),
        None => (std::env::temp_dir().join("land-registry"), true),
    };
    std::fs::create_dir_all(&dir)?;
    Ok((dir, ephemeral))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_transfer_requires_to_flag() {
        let result = Cli::try_parse_from(["land-registry", "transfer", "l-1"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["land-registry", "transfer", "l-1", "--to", "Bob"]).unwrap();
        match cli.command {
            Command::Transfer { land_id, to } => {
                assert_eq!(land_id, "l-1");
                assert_eq!(to, "Bob");
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_add_takes_reference_flag() {
        let cli = Cli::try_parse_from([
            "land-registry",
            "add",
            "--location",
            "Plot 7",
            "--owner",
            "Alice",
            "--reference",
            "CAD-001",
        ])
        .unwrap();
        match cli.command {
            Command::Add { location, owner, unique_identifier } => {
                assert_eq!(location, "Plot 7");
                assert_eq!(owner, "Alice");
                assert_eq!(unique_identifier, "CAD-001");
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
