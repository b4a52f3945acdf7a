//! Configuration management for the stillpoint application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. The only required setting is the API credential;
//! its absence is a startup-time error that prevents the session from starting.
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY`: Credential for the chat completions service (required)
//! - `STILLPOINT_API_BASE`: Base URL of the service (defaults to https://api.openai.com/v1)
//! - `STILLPOINT_MODEL`: Chat model identifier (defaults to gpt-4)
//! - `STILLPOINT_TIMEOUT_SECS`: Request timeout in seconds (defaults to 30)
//! - `STILLPOINT_EXPORT_DIR`: Directory for exported questions (defaults to the current directory)

use crate::constants::{
    DEFAULT_API_BASE, DEFAULT_CHAT_MODEL, DEFAULT_EXPORT_DIR, DEFAULT_TIMEOUT_SECS,
    ENV_VAR_API_BASE, ENV_VAR_API_KEY, ENV_VAR_EXPORT_DIR, ENV_VAR_MODEL, ENV_VAR_TIMEOUT_SECS,
    MAX_TIMEOUT_SECS, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the stillpoint application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use stillpoint::Config;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let config = Config {
///     api_key: "sk-test".to_string(),
///     api_base: "http://127.0.0.1:8080".to_string(),
///     model: "gpt-4".to_string(),
///     timeout: Duration::from_secs(10),
///     export_dir: PathBuf::from("/tmp"),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Bearer credential for the chat completions service.
    pub api_key: String,

    /// Base URL of the chat completions service, without a trailing slash.
    pub api_base: String,

    /// Chat model identifier.
    pub model: String,

    /// Timeout applied to each generation request.
    pub timeout: Duration,

    /// Directory that `export` writes `reflection.txt` into.
    pub export_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &REDACTED_PLACEHOLDER)
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("export_dir", &self.export_dir)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `OPENAI_API_KEY` is unset or empty
    /// - `STILLPOINT_TIMEOUT_SECS` is not a positive integer
    /// - The export directory path expansion fails
    /// - The resulting configuration fails [`Config::validate`]
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use stillpoint::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Using model {}", config.model),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let api_key = env::var(ENV_VAR_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "{} is not set. Export your API key before starting a session",
                    ENV_VAR_API_KEY
                ))
            })?;

        let api_base = env::var(ENV_VAR_API_BASE)
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let model = env::var(ENV_VAR_MODEL).unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

        let timeout = match env::var(ENV_VAR_TIMEOUT_SECS) {
            Ok(raw) => Duration::from_secs(Self::parse_timeout_secs(&raw)?),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let export_dir_str =
            env::var(ENV_VAR_EXPORT_DIR).unwrap_or_else(|_| DEFAULT_EXPORT_DIR.to_string());

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&export_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand export path: {}", e)))?;

        let config = Config {
            api_key,
            api_base,
            model,
            timeout,
            export_dir: PathBuf::from(expanded_path.into_owned()),
        };

        config.validate()?;
        Ok(config)
    }

    fn parse_timeout_secs(raw: &str) -> AppResult<u64> {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 && secs <= MAX_TIMEOUT_SECS => Ok(secs),
            _ => Err(AppError::Config(format!(
                "{} must be between 1 and {} seconds, got '{}'",
                ENV_VAR_TIMEOUT_SECS, MAX_TIMEOUT_SECS, raw
            ))),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the API key is empty or contains whitespace,
    /// the API base is not an http(s) URL, the model is empty, the timeout is zero
    /// or longer than `MAX_TIMEOUT_SECS`, or the export directory is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Config("API key is empty".to_string()));
        }

        if self.api_key.chars().any(char::is_whitespace) {
            return Err(AppError::Config(
                "API key cannot contain whitespace".to_string(),
            ));
        }

        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model name is empty".to_string()));
        }

        if self.timeout.is_zero() {
            return Err(AppError::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        if self.timeout > Duration::from_secs(MAX_TIMEOUT_SECS) {
            return Err(AppError::Config(format!(
                "Request timeout must be at most {} seconds",
                MAX_TIMEOUT_SECS
            )));
        }

        if self.export_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Export directory path is empty".to_string()));
        }

        Ok(())
    }
}
