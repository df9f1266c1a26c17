pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod logging;
pub mod models;

pub use config::AppConfig;
pub use errors::*;
