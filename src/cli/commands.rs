//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "routes")]
#[command(about = "Record and query travel routes in a local SQLite store")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new route
    Add {
        /// Path to the route store (default: individual.data in the home directory)
        #[arg(long)]
        db: Option<PathBuf>,
        /// Departure point
        #[arg(short, long)]
        first: String,
        /// Destination point
        #[arg(short, long)]
        second: String,
    },
    /// Show all routes
    Display {
        /// Path to the route store (default: individual.data in the home directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Select routes arriving at a destination
    Select {
        /// Path to the route store (default: individual.data in the home directory)
        #[arg(long)]
        db: Option<PathBuf>,
        /// Name of the destination point
        #[arg(long)]
        second: String,
    },
    /// Show row counts for the store
    Stats {
        /// Path to the route store (default: individual.data in the home directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Show current configuration
    Config,
}
