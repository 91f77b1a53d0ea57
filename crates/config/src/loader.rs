//! Configuration loader implementation

use crate::schema::RawSiteConfig;
use crate::site::SiteConfig;
use anyhow::Context;
use figment::{
    providers::{Env, Format, Json, Yaml},
    Figment,
};
use site_types::{ConfigError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Prefix for environment overrides (`SITE_PORT`, `SITE_DOMAIN`)
pub const ENV_PREFIX: &str = "SITE_";

/// Keys that may be overridden from the environment
const ENV_OVERRIDES: [&str; 2] = ["port", "domain"];

/// Configuration loader that handles YAML/JSON files and environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file and environment variables
    ///
    /// Files ending in `.json` are read as JSON, anything else as YAML.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<SiteConfig> {
        let config_path = config_path.as_ref();

        // Check if config file exists
        if !config_path.exists() {
            return Err(ConfigError::FileNotFound {
                path: config_path.display().to_string(),
            });
        }

        let is_json = config_path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let figment = if is_json {
            Figment::new().merge(Json::file(config_path))
        } else {
            Figment::new().merge(Yaml::file(config_path))
        };
        debug!(path = %config_path.display(), json = is_json, "Reading site configuration");

        // Override port/domain with environment variables (prefixed with SITE_)
        let figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_OVERRIDES));

        let raw = Self::extract(figment)?;
        let config = Self::from_raw(raw)?;

        info!(path = %config_path.display(), "Site configuration loaded");
        Ok(config)
    }

    /// Load configuration from a YAML string (no environment overrides)
    pub fn load_from_str(yaml_content: &str) -> Result<SiteConfig> {
        let raw = Self::extract(Figment::new().merge(Yaml::string(yaml_content)))?;
        Self::from_raw(raw)
    }

    /// Load configuration from a JSON string (no environment overrides)
    pub fn load_from_json_str(json_content: &str) -> Result<SiteConfig> {
        let raw = Self::extract(Figment::new().merge(Json::string(json_content)))?;
        Self::from_raw(raw)
    }

    /// Validate an in-memory raw configuration
    pub fn from_raw(raw: RawSiteConfig) -> Result<SiteConfig> {
        let (config, report) = SiteConfig::validated(raw).map_err(|e| {
            warn!(error = %e, "Site configuration rejected");
            e
        })?;

        for issue in &report.warnings {
            warn!(field = %issue.field, "{}", issue.message);
        }
        debug!(
            locales = config.locales().len(),
            default_language = %config.default_language(),
            "{}",
            report.summary()
        );

        Ok(config)
    }

    /// The built-in sample configuration
    pub fn embedded() -> Result<SiteConfig> {
        Self::from_raw(RawSiteConfig::default())
    }

    /// Create example configuration file
    pub fn create_example<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
        let yaml_content = serde_yaml::to_string(&RawSiteConfig::default())
            .context("Failed to serialize example configuration")?;

        std::fs::write(path.as_ref(), yaml_content)
            .context("Failed to write example configuration file")?;

        Ok(())
    }

    fn extract(figment: Figment) -> Result<RawSiteConfig> {
        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
