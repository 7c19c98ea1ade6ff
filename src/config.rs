//! # Application Configuration
//!
//! Settings are read from the environment (after `.env` has been loaded by
//! the binary). Every section carries defaults and its own validation.

use crate::encoding::TextEncoding;
use crate::errors::{AppError, AppResult};
use crate::observability_config::ObservabilityConfig;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Database configuration settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:files/database.db".to_string(),
            max_connections: 5,
            connect_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.url.trim().is_empty() {
            return Err(AppError::Config("Database URL cannot be empty".to_string()));
        }

        if !self.url.starts_with("sqlite:") {
            return Err(AppError::Config(
                "Database URL must start with 'sqlite:'".to_string(),
            ));
        }

        if self.max_connections == 0 {
            return Err(AppError::Config("Max connections cannot be 0".to_string()));
        }

        if self.connect_timeout_secs == 0 {
            return Err(AppError::Config("Connect timeout cannot be 0".to_string()));
        }

        if self.connect_timeout_secs > 300 {
            return Err(AppError::Config(
                "Connect timeout cannot be greater than 300 seconds".to_string(),
            ));
        }

        Ok(())
    }
}

/// Locations of the input files
#[derive(Debug, Clone)]
pub struct PathsConfig {
    /// Root of the `<category>/<recipe>.txt` tree
    pub recipes_dir: PathBuf,
    /// Unit pattern table
    pub measures_path: PathBuf,
    /// Price list
    pub prices_path: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            recipes_dir: PathBuf::from("files/recipes"),
            measures_path: PathBuf::from("files/measures.json"),
            prices_path: PathBuf::from("files/prices.json"),
        }
    }
}

impl PathsConfig {
    pub fn validate(&self) -> AppResult<()> {
        for (name, path) in [
            ("RECIPES_DIR", &self.recipes_dir),
            ("MEASURES_PATH", &self.measures_path),
            ("PRICES_PATH", &self.prices_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(AppError::Config(format!("{name} cannot be empty")));
            }
        }
        Ok(())
    }
}

/// Where entity spans come from
#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
    /// NER service endpoint; takes precedence over `annotations_path`
    pub url: Option<String>,
    /// Annotation export replayed when no service is configured
    pub annotations_path: Option<PathBuf>,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            url: None,
            annotations_path: None,
            timeout_secs: 30,
        }
    }
}

impl AnnotatorConfig {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(url) = &self.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::Config(format!(
                    "ANNOTATOR_URL must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Config("Annotator timeout cannot be 0".to_string()));
        }

        if self.timeout_secs > 300 {
            return Err(AppError::Config(
                "Annotator timeout cannot be greater than 300 seconds".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether any annotation source is configured
    pub fn is_configured(&self) -> bool {
        self.url.is_some() || self.annotations_path.is_some()
    }
}

/// Text encoding of each input source
#[derive(Debug, Clone, Copy)]
pub struct SourceEncodings {
    pub recipes: TextEncoding,
    pub measures: TextEncoding,
    pub annotations: TextEncoding,
    /// Price list as read by the unpriced report
    pub prices_report: TextEncoding,
    /// Price list as read by the price update
    pub prices_update: TextEncoding,
}

impl Default for SourceEncodings {
    fn default() -> Self {
        Self {
            recipes: TextEncoding::Utf8,
            measures: TextEncoding::Latin1,
            annotations: TextEncoding::Latin1,
            prices_report: TextEncoding::Latin1,
            prices_update: TextEncoding::Utf8,
        }
    }
}

/// Unified application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub paths: PathsConfig,
    pub annotator: AnnotatorConfig,
    pub encodings: SourceEncodings,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        // Database
        if let Ok(url) = env::var("DATABASE_URL") {
            config.database.url = url;
        }
        config.database.max_connections =
            parse_var("DATABASE_MAX_CONNECTIONS", config.database.max_connections)?;
        config.database.connect_timeout_secs = parse_var(
            "DATABASE_CONNECT_TIMEOUT_SECS",
            config.database.connect_timeout_secs,
        )?;

        // Input files
        if let Ok(dir) = env::var("RECIPES_DIR") {
            config.paths.recipes_dir = PathBuf::from(dir);
        }
        if let Ok(path) = env::var("MEASURES_PATH") {
            config.paths.measures_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("PRICES_PATH") {
            config.paths.prices_path = PathBuf::from(path);
        }

        // Annotator
        config.annotator.url = non_empty_var("ANNOTATOR_URL");
        config.annotator.annotations_path = non_empty_var("ANNOTATIONS_PATH").map(PathBuf::from);
        config.annotator.timeout_secs =
            parse_var("ANNOTATOR_TIMEOUT_SECS", config.annotator.timeout_secs)?;

        // Encodings
        let encodings = &mut config.encodings;
        encodings.recipes = parse_var("RECIPES_ENCODING", encodings.recipes)?;
        encodings.measures = parse_var("MEASURES_ENCODING", encodings.measures)?;
        encodings.annotations = parse_var("ANNOTATIONS_ENCODING", encodings.annotations)?;
        encodings.prices_report = parse_var("PRICES_REPORT_ENCODING", encodings.prices_report)?;
        encodings.prices_update = parse_var("PRICES_UPDATE_ENCODING", encodings.prices_update)?;

        config.observability = ObservabilityConfig::from_env();

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> AppResult<()> {
        self.database.validate()?;
        self.paths.validate()?;
        self.annotator.validate()?;
        self.observability.validate().map_err(AppError::Config)?;
        Ok(())
    }

    /// Get a summary of the current configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Configuration: db_url={}, recipes_dir={}, measures={}, annotator={}, log_format={}, metrics_enabled={}",
            self.database.url,
            self.paths.recipes_dir.display(),
            self.paths.measures_path.display(),
            self.annotator
                .url
                .as_deref()
                .or(self.annotator.annotations_path.as_ref().and_then(|p| p.to_str()))
                .unwrap_or("none"),
            self.observability.log_format,
            self.observability.enable_metrics
        )
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{name} has an invalid value: '{value}'"))),
        Err(_) => Ok(default),
    }
}
