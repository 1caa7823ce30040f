use crate::constants::{
    DEFAULT_API_DOMAIN, DEFAULT_CONCURRENCY, DEFAULT_LANGUAGE, DEFAULT_WATCH_LIST, LOG_FILE_NAME,
    env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// API domain serving the team endpoints. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Language segment of the team endpoint path.
    #[serde(default = "default_language")]
    pub language: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds. Requests never time out when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
    /// Team names whose players are collected.
    #[serde(default = "default_watch_list")]
    pub watch_list: Vec<String>,
    /// Highest team ID to try. Polling is unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u64>,
    /// Number of team requests kept in flight.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_api_domain() -> String {
    DEFAULT_API_DOMAIN.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_watch_list() -> Vec<String> {
    DEFAULT_WATCH_LIST.iter().map(|team| team.to_string()).collect()
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            language: default_language(),
            log_file_path: None,
            http_timeout_seconds: None,
            watch_list: default_watch_list(),
            max_attempts: None,
            concurrency: default_concurrency(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the defaults; nothing is written.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `SQUAD_WATCH_API_DOMAIN` - Override API domain
    /// - `SQUAD_WATCH_LOG_FILE` - Override log file path
    /// - `SQUAD_WATCH_HTTP_TIMEOUT` - HTTP timeout in seconds
    /// - `SQUAD_WATCH_MAX_ATTEMPTS` - Highest team ID to try
    /// - `SQUAD_WATCH_CONCURRENCY` - Requests kept in flight
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `SQUAD_WATCH_*` environment variables on top of the current values.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = Some(timeout);
        }

        if let Some(max_attempts) = std::env::var(env_vars::MAX_ATTEMPTS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.max_attempts = Some(max_attempts);
        }

        if let Some(concurrency) = std::env::var(env_vars::CONCURRENCY)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.concurrency = concurrency;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not found, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", config.api_domain);
        println!("────────────────────────────────────");
        println!("Language:");
        println!("{}", config.language);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        match config.http_timeout_seconds {
            Some(seconds) => println!("{seconds} seconds"),
            None => println!("none"),
        }
        println!("────────────────────────────────────");
        println!("Watch-list:");
        println!("{}", config.watch_list.join(", "));
        println!("────────────────────────────────────");
        println!("Max Attempts:");
        match config.max_attempts {
            Some(max) => println!("{max}"),
            None => println!("unbounded"),
        }
        println!("────────────────────────────────────");
        println!("Concurrency:");
        println!("{}", config.concurrency);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist. An API domain without
    /// a scheme is saved with `https://`; an explicit `http://` is kept.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain = if !self.api_domain.starts_with("https://")
            && !self.api_domain.starts_with("http://")
        {
            format!("https://{}", self.api_domain)
        } else {
            self.api_domain.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
