// src/config.rs
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::errors::{AppResult, ConfigError};
use crate::domain::model::Currency;

/// Default path of the credit score endpoint on the upstream mock service.
const DEFAULT_CREDIT_SCORE_PATH: &str = "mockcredit/values";

/// Names of endpoints provided by the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Provides the credit score report.
    CreditScore,
}

impl Endpoint {
    /// Key of the endpoint in the configured endpoint map.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::CreditScore => "creditScore",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream score API configuration
    pub api: ApiConfig,

    /// Currency of monetary amounts in the credit report
    pub currency: Currency,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Score API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// URL where the endpoint service is located
    pub base_url: String,

    /// Maps endpoint names to paths below the base URL
    pub endpoints: HashMap<String, String>,
}

impl ApiConfig {
    /// Returns the complete URL of the endpoint with the given name.
    ///
    /// The endpoint path is appended to the base URL. An endpoint missing
    /// from the map is a configuration error naming that endpoint.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ConfigError> {
        let path = self
            .endpoints
            .get(endpoint.name())
            .ok_or_else(|| ConfigError::UnknownEndpoint(endpoint.name().to_string()))?;

        // join() replaces the last path segment unless the base ends in '/'
        let base = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };
        let base = Url::parse(&base)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        base.join(path)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", path, e)))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,

    /// Log to file
    pub to_file: bool,

    /// Log file path
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let api = ApiConfig {
            base_url: env::var("SCORE_API_BASE_URL")
                .map_err(|_| ConfigError::MissingVariable("SCORE_API_BASE_URL"))?,
            endpoints: HashMap::from([(
                Endpoint::CreditScore.name().to_string(),
                env::var("SCORE_API_CREDIT_SCORE_PATH")
                    .unwrap_or_else(|_| DEFAULT_CREDIT_SCORE_PATH.to_string()),
            )]),
        };

        let currency = env::var("CURRENCY_CODE")
            .unwrap_or_else(|_| "ZAR".to_string())
            .parse::<Currency>()?;

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            to_file: env::var("LOG_TO_FILE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            file_path: env::var("LOG_FILE_PATH").ok(),
        };

        Ok(Config {
            api,
            currency,
            logging,
        })
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(path).map_err(ConfigError::Io)?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(ConfigError::Io)?;

        let config: Config = serde_json::from_str(&contents).map_err(ConfigError::Parse)?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::Parse)?;

        std::fs::write(path, contents).map_err(ConfigError::Io)?;

        Ok(())
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();

        let log_level = match self.logging.level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        builder.filter_level(log_level);

        if self.logging.to_file {
            if let Some(file_path) = &self.logging.file_path {
                let file = File::create(file_path).map_err(ConfigError::Io)?;

                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }

        builder.init();

        Ok(())
    }
}
