use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

/// Default file name for the route store inside the home directory
pub const DEFAULT_STORE_FILE: &str = "individual.data";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Route store location; falls back to individual.data in the home directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Load configuration from the default config file path
    pub fn load() -> crate::Result<Self> {
        // config.toml is optional for this tool; every setting has a default
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else {
            Ok(Self::default())
        }
    }

    /// Get the configured log level
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    /// Resolve the route store path.
    ///
    /// Precedence: `--db` flag, then the config file, then
    /// `individual.data` in the user's home directory.
    pub fn resolve_database_path(&self, flag: Option<PathBuf>) -> crate::Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path);
        }
        if let Some(path) = &self.database.path {
            return Ok(path.clone());
        }
        let home = dirs::home_dir().ok_or(crate::RoutesError::HomeDirectory)?;
        Ok(home.join(DEFAULT_STORE_FILE))
    }
}
