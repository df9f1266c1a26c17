use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutesError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine the user's home directory")]
    HomeDirectory,
}

pub type Result<T> = std::result::Result<T, RoutesError>;
