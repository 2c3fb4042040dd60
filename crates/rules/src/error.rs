//! Error types for rule parsing and database loading.

use std::path::PathBuf;

/// Errors that can occur while parsing rules or loading reference tables.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV read error while loading a reference database.
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// Rule file has no comment header. Every rule file must start with at
    /// least one `#` comment line; parsing cannot locate the header end
    /// without one.
    #[error("rule file has no comment header: {}", .0.display())]
    MissingHeader(PathBuf),
}

/// Result alias for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;
