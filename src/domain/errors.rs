// src/domain/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// Errors raised while loading or resolving the application configuration.
/// These are fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing endpoint in configuration: {0}")]
    UnknownEndpoint(String),

    #[error("Invalid URL in configuration: {0}")]
    InvalidUrl(String),

    #[error("Missing {0} environment variable")]
    MissingVariable(&'static str),

    #[error("Unsupported currency code: {0}")]
    UnsupportedCurrency(String),

    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by a single score fetch. Recoverable; published on the
/// error channel and never fatal to the model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type FetchResult<T> = Result<T, FetchError>;
