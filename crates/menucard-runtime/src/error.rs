use std::path::PathBuf;

/// Result type for menucard-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be written as TOML
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Refused to overwrite an existing config file
    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
