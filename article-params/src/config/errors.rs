use thiserror::Error;

/// Errors emitted while reading the application config file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
