//! Site configuration management
//!
//! This crate parses site configuration from YAML/JSON files, embedded
//! defaults and environment variables, validates it exhaustively and hands
//! out an immutable [`SiteConfig`].

pub mod loader;
pub mod schema;
pub mod site;
pub mod validation;

pub use loader::ConfigLoader;
pub use schema::*;
pub use site::SiteConfig;
pub use validation::*;
