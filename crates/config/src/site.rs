//! Validated, immutable site configuration

use crate::schema::RawSiteConfig;
use crate::validation::{ConfigValidator, ValidationReport};
use serde::{Deserialize, Serialize};
use site_types::{utils, ConfigError, LocaleContent, LocaleKey, Result, SearchEngine};
use std::collections::BTreeMap;

/// Site configuration that passed validation
///
/// Built once at startup and shared by reference (or `Arc`) with every
/// consumer. There are no setters; the only way in is through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSiteConfig", into = "RawSiteConfig")]
pub struct SiteConfig {
    root_path: String,
    port: u16,
    domain: String,
    default_search_engine: SearchEngine,
    default_language: LocaleKey,
    locales: BTreeMap<LocaleKey, LocaleContent>,
    strict_locales: bool,
}

impl SiteConfig {
    /// Validate raw configuration, keeping the report for its warnings
    pub fn validated(raw: RawSiteConfig) -> Result<(Self, ValidationReport)> {
        let report = ConfigValidator::validate(&raw);
        if let Some(error) = report.error() {
            return Err(error);
        }

        let config = Self::build(raw)?;
        Ok((config, report))
    }

    fn build(raw: RawSiteConfig) -> Result<Self> {
        let port = u16::try_from(raw.port).map_err(|_| ConfigError::InvalidPort { value: raw.port })?;

        let default_search_engine = raw
            .default_search_engine
            .parse::<SearchEngine>()
            .map_err(|_| ConfigError::InvalidSearchEngine {
                value: raw.default_search_engine.clone(),
            })?;

        let default_language = LocaleKey::parse(&raw.default_language).map_err(|_| {
            ConfigError::UnknownDefaultLocale {
                locale: raw.default_language.clone(),
            }
        })?;

        let locales = raw
            .locales
            .into_iter()
            .map(|(key, content)| {
                LocaleKey::parse(&key)
                    .map(|parsed| (parsed, content))
                    .map_err(|reason| ConfigError::InvalidLocaleKey { locale: key, reason })
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        if !locales.contains_key(&default_language) {
            return Err(ConfigError::UnknownDefaultLocale {
                locale: raw.default_language,
            });
        }

        Ok(Self {
            root_path: raw.root_path,
            port,
            domain: raw.domain,
            default_search_engine,
            default_language,
            locales,
            strict_locales: raw.strict_locales,
        })
    }

    /// Content for `locale`
    ///
    /// The key is normalized first (`zh_CN` finds `zh-cn`). An unconfigured
    /// locale falls back to the default language, or fails with
    /// `UnknownLocale` when `strictLocales` is set.
    pub fn get(&self, locale: &str) -> Result<&LocaleContent> {
        if let Some(content) = self.lookup(locale) {
            return Ok(content);
        }

        if self.strict_locales {
            return Err(ConfigError::UnknownLocale {
                locale: locale.to_string(),
            });
        }

        Ok(self.default_content())
    }

    /// Content for the default language
    pub fn default_content(&self) -> &LocaleContent {
        // Construction guarantees the default language is a configured locale
        &self.locales[&self.default_language]
    }

    fn lookup(&self, locale: &str) -> Option<&LocaleContent> {
        let key = LocaleKey::parse(locale).ok()?;
        self.locales.get(&key)
    }

    /// Whether `locale` is configured, after normalization
    pub fn has_locale(&self, locale: &str) -> bool {
        self.lookup(locale).is_some()
    }

    /// Prefix a root-relative link with the root path for output
    pub fn resolve_link(&self, link: &str) -> String {
        utils::join_root_path(&self.root_path, link)
    }

    /// Site-restricted search URL on the default engine
    pub fn search_url(&self, query: &str) -> String {
        self.default_search_engine.search_url(&self.domain, query)
    }

    /// Back to the raw, serializable shape
    pub fn to_raw(&self) -> RawSiteConfig {
        RawSiteConfig::from(self.clone())
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn default_search_engine(&self) -> SearchEngine {
        self.default_search_engine
    }

    pub fn default_language(&self) -> &LocaleKey {
        &self.default_language
    }

    pub fn locales(&self) -> &BTreeMap<LocaleKey, LocaleContent> {
        &self.locales
    }

    pub fn strict_locales(&self) -> bool {
        self.strict_locales
    }
}

impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSiteConfig) -> Result<Self> {
        Self::validated(raw).map(|(config, _)| config)
    }
}

impl From<SiteConfig> for RawSiteConfig {
    fn from(config: SiteConfig) -> Self {
        Self {
            root_path: config.root_path,
            port: i64::from(config.port),
            domain: config.domain,
            default_search_engine: config.default_search_engine.as_str().to_string(),
            default_language: config.default_language.to_string(),
            locales: config
                .locales
                .into_iter()
                .map(|(key, content)| (key.to_string(), content))
                .collect(),
            strict_locales: config.strict_locales,
        }
    }
}
