//! # Application Error Types
//!
//! This module defines the error types shared by the recipe pipeline.
//! `RecipeError` covers the parsing/normalization core, `AppError` is the
//! general application error used by configuration, persistence and the CLI.

use std::fmt;

/// Errors raised by the ingredient interpretation and recipe parsing core
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeError {
    /// A numeric span could not be converted into a quantity
    MalformedQuantity(String),
    /// A recipe file has no recognizable yield/serving-count line
    MissingServings {
        /// Recipe display name
        recipe: String,
    },
    /// A unit pattern from the configuration does not compile
    InvalidUnitPattern {
        /// Unit name the pattern belongs to
        unit: String,
        /// Regex compilation message
        message: String,
    },
    /// Reading a source file failed
    Io(String),
    /// A configuration or annotation file could not be decoded
    Parse(String),
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeError::MalformedQuantity(text) => write!(f, "Malformed quantity: {text:?}"),
            RecipeError::MissingServings { recipe } => {
                write!(f, "{recipe}: rations was not found")
            }
            RecipeError::InvalidUnitPattern { unit, message } => {
                write!(f, "Invalid pattern for unit {unit:?}: {message}")
            }
            RecipeError::Io(msg) => write!(f, "I/O error: {msg}"),
            RecipeError::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for RecipeError {}

impl From<std::io::Error> for RecipeError {
    fn from(err: std::io::Error) -> Self {
        RecipeError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RecipeError {
    fn from(err: serde_json::Error) -> Self {
        RecipeError::Parse(err.to_string())
    }
}

/// General application error type for consistent error handling
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration validation errors
    Config(String),
    /// Validation errors (prices, review input, etc.)
    Validation(String),
    /// Database operation errors
    Database(String),
    /// Recipe parsing and ingredient interpretation errors
    Recipe(RecipeError),
    /// File system errors
    FileSystem(String),
    /// Network/communication errors (annotator service)
    Network(String),
    /// Internal application errors
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "[CONFIG] {}", msg),
            AppError::Validation(msg) => write!(f, "[VALIDATION] {}", msg),
            AppError::Database(msg) => write!(f, "[DATABASE] {}", msg),
            AppError::Recipe(err) => write!(f, "[RECIPE] {}", err),
            AppError::FileSystem(msg) => write!(f, "[FILESYSTEM] {}", msg),
            AppError::Network(msg) => write!(f, "[NETWORK] {}", msg),
            AppError::Internal(msg) => write!(f, "[INTERNAL] {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<RecipeError> for AppError {
    fn from(err: RecipeError) -> Self {
        AppError::Recipe(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileSystem(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Standardized error logging utilities for consistent error reporting
pub mod error_logging {
    use tracing::error;

    /// Log database operation errors with contextual information
    pub fn log_database_error(
        error: &impl std::fmt::Display,
        operation: &str,
        recipe_id: Option<&str>,
    ) {
        error!(
            error = %error,
            operation = %operation,
            recipe_id = ?recipe_id,
            "Database operation failed"
        );
    }

    /// Log recipe processing errors with recipe-specific context
    pub fn log_recipe_error(
        error: &impl std::fmt::Display,
        operation: &str,
        recipe_key: &str,
        category: Option<&str>,
    ) {
        error!(
            error = %error,
            operation = %operation,
            recipe_key = %recipe_key,
            category = ?category,
            "Recipe processing failed"
        );
    }

    /// Log annotator errors with endpoint context
    pub fn log_network_error(
        error: &impl std::fmt::Display,
        operation: &str,
        endpoint: Option<&str>,
    ) {
        error!(
            error = %error,
            operation = %operation,
            endpoint = ?endpoint,
            "Network operation failed"
        );
    }

    /// Log file system errors with path context
    pub fn log_filesystem_error(error: &impl std::fmt::Display, operation: &str, path: Option<&str>) {
        error!(
            error = %error,
            operation = %operation,
            path = ?path,
            "File system operation failed"
        );
    }

    /// Log configuration errors during startup
    pub fn log_config_error(error: &impl std::fmt::Display, config_key: &str, operation: &str) {
        error!(
            error = %error,
            config_key = %config_key,
            operation = %operation,
            "Configuration error"
        );
    }
}
