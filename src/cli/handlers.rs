//! Command handlers for the routes CLI

use crate::cli::output::print_route_table;
use crate::database::Database;
use crate::AppConfig;
use crate::Result;

/// Handle the add command
pub async fn handle_add_command(db: &Database, first: &str, second: &str) -> Result<()> {
    db.add_route(first, second).await?;

    tracing::info!("Route recorded: {} -> {}", first, second);

    Ok(())
}

/// Handle the display command
pub async fn handle_display_command(db: &Database) -> Result<()> {
    let routes = db.list_routes().await?;

    print_route_table(&routes);

    Ok(())
}

/// Handle the select command
pub async fn handle_select_command(db: &Database, second: &str) -> Result<()> {
    let routes = db.find_routes_by_destination(second).await?;

    print_route_table(&routes);

    Ok(())
}

/// Handle the stats command
pub async fn handle_stats_command(db: &Database) -> Result<()> {
    let stats = db.stats().await?;

    println!("Origins: {}", stats.origins);
    println!("Routes:  {}", stats.routes);

    Ok(())
}

/// Handle the config command
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config)?;

    println!("{rendered}");

    Ok(())
}
