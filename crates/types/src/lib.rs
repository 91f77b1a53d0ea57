//! Shared types for the site configuration workspace
//!
//! This crate contains the per-locale content records, the search engine
//! enum and the error taxonomy used by the loader and its consumers.

pub mod error;
pub mod locale;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use error::{ConfigError, Result};
pub use locale::{LinkItem, LocaleContent, LocaleKey, MenuItem, TitledContent, TitledList};
pub use search::SearchEngine;
