//! ChatVault - local assistant data store
//!
//! Main entry point for the ChatVault CLI.

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chatvault::backup::BackupService;
use chatvault::cli::{Cli, Commands};
use chatvault::commands;
use chatvault::config::Config;
use chatvault::db::DatabaseService;
use chatvault::storage::{sled::DB_PATH_ENV, KeyValueStore, SledStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    // Mirror a CLI data-dir override into the environment so every
    // store constructed in this process points at the same place.
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(DB_PATH_ENV, data_dir);
        tracing::info!("Using database override from CLI: {}", data_dir.display());
    }

    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path)?;
    config.validate()?;

    // Configured path applies only when no CLI/env override is present
    let store = match (&cli.data_dir, &config.storage.path) {
        (None, Some(path)) if std::env::var(DB_PATH_ENV).is_err() => SledStore::open(path)?,
        _ => SledStore::open_default()?,
    };
    let store: Arc<dyn KeyValueStore> = Arc::new(store);

    let db = DatabaseService::new(store.clone());
    let backup = BackupService::new(store);

    match cli.command {
        Commands::Sessions { command } => {
            commands::sessions::handle_sessions(&db, command).await?;
        }
        Commands::Notifications { command } => {
            commands::notifications::handle_notifications(&db, command).await?;
        }
        Commands::Data { command } => {
            commands::data::handle_data(&db, &backup, command).await?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
