use std::path::PathBuf;

use clap::CommandFactory;
use clap::Parser;
use routes::cli::commands::Cli;
use routes::cli::commands::Commands;
use routes::cli::handlers::handle_add_command;
use routes::cli::handlers::handle_config_command;
use routes::cli::handlers::handle_display_command;
use routes::cli::handlers::handle_select_command;
use routes::cli::handlers::handle_stats_command;
use routes::config::AppConfig;
use routes::database::Database;
use routes::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging so the configured level applies
    let config = AppConfig::load()?;

    // Initialize logging; --verbose overrides the configured level
    if cli.verbose {
        routes::logging::init_logging_with_level("debug")?;
    } else {
        routes::logging::init_logging_with_config(&config)?;
    }

    // No subcommand: print help and exit cleanly
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Execute the requested command
    match command {
        Commands::Add { db, first, second } => {
            let db = open_store(&config, db).await?;
            handle_add_command(&db, &first, &second).await?;
            db.close().await;
        }
        Commands::Display { db } => {
            let db = open_store(&config, db).await?;
            handle_display_command(&db).await?;
            db.close().await;
        }
        Commands::Select { db, second } => {
            let db = open_store(&config, db).await?;
            handle_select_command(&db, &second).await?;
            db.close().await;
        }
        Commands::Stats { db } => {
            let db = open_store(&config, db).await?;
            handle_stats_command(&db).await?;
            db.close().await;
        }
        Commands::Config => {
            handle_config_command(&config)?;
        }
    }

    Ok(())
}

/// Resolve the store path, open it and ensure the schema exists
async fn open_store(config: &AppConfig, db: Option<PathBuf>) -> Result<Database> {
    let path = config.resolve_database_path(db)?;

    let db = Database::open(&path).await?;
    db.init_schema().await?;

    info!("Route store ready at {}", path.display());

    Ok(db)
}
