//! Error types for site configuration loading

use crate::search::SearchEngine;
use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration specific errors
///
/// Every variant is a load-time failure. Once a `SiteConfig` exists nothing
/// can fail except a strict-mode locale lookup (`UnknownLocale`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Parse error
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// Root path is neither empty nor `/`-prefixed without a trailing `/`
    #[error("Invalid rootPath '{value}': must be empty or start with '/' and not end with '/'")]
    InvalidRootPath { value: String },

    /// Port outside the TCP range
    #[error("Invalid port {value}: must be between 1 and 65535")]
    InvalidPort { value: i64 },

    /// Domain carries a scheme, a path or is empty
    #[error("Invalid domain '{value}': {reason}")]
    InvalidDomain { value: String, reason: String },

    /// Search engine not in the supported set
    #[error("Invalid defaultSearchEngine '{}'. Valid engines: {}", .value, valid_engines())]
    InvalidSearchEngine { value: String },

    /// Default language is not one of the configured locales
    #[error("defaultLanguage '{locale}' is not a configured locale")]
    UnknownDefaultLocale { locale: String },

    /// Locale key is malformed or collides with another after normalization
    #[error("Invalid locale key '{locale}': {reason}")]
    InvalidLocaleKey { locale: String, reason: String },

    /// A field inside a locale block failed validation
    #[error("Invalid content for locale '{locale}' at {field}: {message}")]
    InvalidLocaleContent {
        locale: String,
        field: String,
        message: String,
    },

    /// No locale blocks configured
    #[error("At least one locale must be configured")]
    EmptyLocaleSet,

    /// Strict lookup of a locale that is not configured
    #[error("Unknown locale: {locale}")]
    UnknownLocale { locale: String },

    /// Several validation failures found in one load
    #[error("Configuration rejected with {} errors: {}", .0.len(), join_errors(.0))]
    Rejected(Vec<ConfigError>),
}

fn valid_engines() -> String {
    SearchEngine::ALL
        .iter()
        .map(|engine| engine.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigError {
    /// Iterate over the individual failures, flattening `Rejected`
    pub fn iter(&self) -> Box<dyn Iterator<Item = &ConfigError> + '_> {
        match self {
            ConfigError::Rejected(errors) => Box::new(errors.iter().flat_map(|e| e.iter())),
            other => Box::new(std::iter::once(other)),
        }
    }

    /// Collapse a list of validation failures into a single error
    ///
    /// Returns `None` for an empty list.
    pub fn from_failures(mut errors: Vec<ConfigError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(ConfigError::Rejected(errors)),
        }
    }

    /// Locale the failure is attached to, if any
    pub fn locale(&self) -> Option<&str> {
        match self {
            ConfigError::UnknownDefaultLocale { locale }
            | ConfigError::InvalidLocaleKey { locale, .. }
            | ConfigError::InvalidLocaleContent { locale, .. }
            | ConfigError::UnknownLocale { locale } => Some(locale),
            _ => None,
        }
    }
}
