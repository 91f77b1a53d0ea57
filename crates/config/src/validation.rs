//! Configuration validation utilities

use crate::schema::RawSiteConfig;
use site_types::{utils, ConfigError, LocaleContent, LocaleKey, SearchEngine};
use std::collections::{BTreeSet, HashSet};

/// Configuration validator
///
/// Every check runs on every call; failures are collected rather than
/// returned at the first one.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate complete configuration
    pub fn validate(config: &RawSiteConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::validate_root_path(config, &mut report);
        Self::validate_port(config, &mut report);
        Self::validate_domain(config, &mut report);
        Self::validate_search_engine(config, &mut report);
        Self::validate_locales(config, &mut report);
        Self::validate_default_language(config, &mut report);
        Self::validate_menu_consistency(config, &mut report);

        report
    }

    fn validate_root_path(config: &RawSiteConfig, report: &mut ValidationReport) {
        if !utils::is_valid_root_path(&config.root_path) {
            report.add_error(ConfigError::InvalidRootPath {
                value: config.root_path.clone(),
            });
        }
    }

    fn validate_port(config: &RawSiteConfig, report: &mut ValidationReport) {
        if config.port < 1 || config.port > i64::from(u16::MAX) {
            report.add_error(ConfigError::InvalidPort { value: config.port });
        } else if config.port < 1024 {
            report.add_warning("port", "Port is below 1024, may require elevated privileges");
        }
    }

    fn validate_domain(config: &RawSiteConfig, report: &mut ValidationReport) {
        if let Err(reason) = utils::check_domain(&config.domain) {
            report.add_error(ConfigError::InvalidDomain {
                value: config.domain.clone(),
                reason,
            });
        }
    }

    fn validate_search_engine(config: &RawSiteConfig, report: &mut ValidationReport) {
        if config.default_search_engine.parse::<SearchEngine>().is_err() {
            report.add_error(ConfigError::InvalidSearchEngine {
                value: config.default_search_engine.clone(),
            });
        }
    }

    fn validate_locales(config: &RawSiteConfig, report: &mut ValidationReport) {
        if config.locales.is_empty() {
            report.add_error(ConfigError::EmptyLocaleSet);
            return;
        }

        let mut seen = HashSet::new();
        for (raw_key, content) in &config.locales {
            let label = match LocaleKey::parse(raw_key) {
                Ok(key) => {
                    if !seen.insert(key.clone()) {
                        report.add_error(ConfigError::InvalidLocaleKey {
                            locale: raw_key.clone(),
                            reason: format!("duplicates locale '{}' after normalization", key),
                        });
                    }
                    key.to_string()
                }
                Err(reason) => {
                    report.add_error(ConfigError::InvalidLocaleKey {
                        locale: raw_key.clone(),
                        reason,
                    });
                    raw_key.clone()
                }
            };

            Self::validate_locale_content(&label, content, report);
        }
    }

    fn validate_locale_content(locale: &str, content: &LocaleContent, report: &mut ValidationReport) {
        let content_error = |field: String, message: String| ConfigError::InvalidLocaleContent {
            locale: locale.to_string(),
            field,
            message,
        };

        if content.page_menu.is_empty() {
            report.add_error(content_error(
                "pageMenu".to_string(),
                "page menu must contain at least one item".to_string(),
            ));
        }

        let mut keys = HashSet::new();
        for (i, item) in content.page_menu.iter().enumerate() {
            if item.key.trim().is_empty() {
                report.add_error(content_error(
                    format!("pageMenu[{}].key", i),
                    "menu key cannot be empty".to_string(),
                ));
            } else if !keys.insert(item.key.as_str()) {
                report.add_error(content_error(
                    format!("pageMenu[{}].key", i),
                    format!("duplicate menu key '{}'", item.key),
                ));
            }
        }

        for (field, link) in content.links() {
            if !utils::is_root_relative_link(link) {
                report.add_error(content_error(
                    field,
                    format!("link '{}' must be a root-relative path starting with '/'", link),
                ));
            }
        }

        if content.copyright.trim().is_empty() {
            report.add_error(content_error(
                "copyright".to_string(),
                "copyright cannot be empty".to_string(),
            ));
        }

        if content.documentation.list.is_empty() {
            report.add_warning(
                &format!("{}.documentation.list", locale),
                "Documentation list is empty",
            );
        }

        if content.resources.list.is_empty() {
            report.add_warning(&format!("{}.resources.list", locale), "Resources list is empty");
        }
    }

    fn validate_default_language(config: &RawSiteConfig, report: &mut ValidationReport) {
        // EmptyLocaleSet already covers this case
        if config.locales.is_empty() {
            return;
        }

        let wanted = LocaleKey::normalize(&config.default_language);
        let known = config
            .locales
            .keys()
            .any(|key| LocaleKey::normalize(key) == wanted);

        if !known {
            report.add_error(ConfigError::UnknownDefaultLocale {
                locale: config.default_language.clone(),
            });
        }
    }

    /// Warn when locales highlight different menu keys than the default one
    fn validate_menu_consistency(config: &RawSiteConfig, report: &mut ValidationReport) {
        let wanted = LocaleKey::normalize(&config.default_language);
        let Some(default_content) = config
            .locales
            .iter()
            .find(|(key, _)| LocaleKey::normalize(key) == wanted)
            .map(|(_, content)| content)
        else {
            return;
        };

        let expected: BTreeSet<&str> = default_content.menu_keys().collect();
        for (key, content) in &config.locales {
            if LocaleKey::normalize(key) == wanted {
                continue;
            }

            let actual: BTreeSet<&str> = content.menu_keys().collect();
            if actual != expected {
                report.add_warning(
                    &format!("{}.pageMenu", key),
                    &format!(
                        "Menu keys {:?} differ from default locale '{}' keys {:?}",
                        actual, config.default_language, expected
                    ),
                );
            }
        }
    }
}

/// Validation report containing errors and warnings
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<ValidationIssue>,
}

/// A non-fatal validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// All errors folded into one `ConfigError`, if there are any
    pub fn error(&self) -> Option<ConfigError> {
        ConfigError::from_failures(self.errors.clone())
    }

    pub fn summary(&self) -> String {
        format!("Validation: {} errors, {} warnings", self.errors.len(), self.warnings.len())
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_types::MenuItem;

    #[test]
    fn test_sample_is_valid() {
        let report = ConfigValidator::validate(&RawSiteConfig::default());
        assert!(report.is_valid(), "{:?}", report.errors);
        assert!(!report.has_warnings());
        assert_eq!(report.summary(), "Validation: 0 errors, 0 warnings");
    }

    #[test]
    fn test_root_path_rules() {
        for bad in ["/foo/", "bar", "/"] {
            let mut config = RawSiteConfig::default();
            config.root_path = bad.to_string();
            let report = ConfigValidator::validate(&config);
            assert_eq!(
                report.errors,
                vec![ConfigError::InvalidRootPath { value: bad.to_string() }]
            );
        }

        let mut config = RawSiteConfig::default();
        config.root_path = "/dubbo".to_string();
        assert!(ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_port_range() {
        for bad in [-1, 0, 65536, 70000, i64::from(u32::MAX) + 1] {
            let mut config = RawSiteConfig::default();
            config.port = bad;
            let report = ConfigValidator::validate(&config);
            assert_eq!(report.errors, vec![ConfigError::InvalidPort { value: bad }]);
        }

        let mut config = RawSiteConfig::default();
        config.port = 80;
        let report = ConfigValidator::validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings[0].field, "port");

        config.port = 65535;
        assert!(ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_locale_content_errors_are_located() {
        let mut config = RawSiteConfig::default();
        let zh = config.locales.get_mut("zh-cn").unwrap();
        zh.page_menu.push(MenuItem::new("home", "首页", "zh-cn/index.html"));
        zh.copyright = "  ".to_string();

        let report = ConfigValidator::validate(&config);
        let fields: Vec<_> = report
            .errors
            .iter()
            .map(|e| match e {
                ConfigError::InvalidLocaleContent { locale, field, .. } => {
                    assert_eq!(locale, "zh-cn");
                    field.as_str()
                }
                other => panic!("unexpected error {:?}", other),
            })
            .collect();

        assert_eq!(fields, vec!["pageMenu[1].key", "pageMenu[1].link", "copyright"]);
    }

    #[test]
    fn test_empty_menu_rejected() {
        let mut config = RawSiteConfig::default();
        config.locales.get_mut("en-us").unwrap().page_menu.clear();

        let report = ConfigValidator::validate(&config);
        assert!(matches!(
            &report.errors[..],
            [ConfigError::InvalidLocaleContent { locale, field, .. }]
                if locale == "en-us" && field == "pageMenu"
        ));
        // en-us no longer offers the default locale's "home" key
        assert!(report.warnings.iter().any(|w| w.field == "en-us.pageMenu"));
    }

    #[test]
    fn test_locale_keys() {
        let mut config = RawSiteConfig::default();
        let content = config.locales["en-us"].clone();
        config.locales.insert("EN_US".to_string(), content.clone());
        config.locales.insert("x".to_string(), content);

        let report = ConfigValidator::validate(&config);
        let bad: Vec<_> = report
            .errors
            .iter()
            .filter_map(|e| match e {
                ConfigError::InvalidLocaleKey { locale, .. } => Some(locale.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(bad.len(), 2);
        assert!(bad.contains(&"x"));
    }

    #[test]
    fn test_default_language_must_exist() {
        let mut config = RawSiteConfig::default();
        config.default_language = "fr-fr".to_string();
        let report = ConfigValidator::validate(&config);
        assert_eq!(
            report.errors,
            vec![ConfigError::UnknownDefaultLocale { locale: "fr-fr".to_string() }]
        );

        config.default_language = "ZH_CN".to_string();
        assert!(ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_empty_locale_set() {
        let mut config = RawSiteConfig::default();
        config.locales.clear();
        let report = ConfigValidator::validate(&config);
        assert_eq!(report.errors, vec![ConfigError::EmptyLocaleSet]);
    }

    #[test]
    fn test_collects_every_failure() {
        let mut config = RawSiteConfig::default();
        config.root_path = "bar".to_string();
        config.port = 0;
        config.domain = "https://dubbo.apache.org".to_string();
        config.default_search_engine = "yahoo".to_string();

        let report = ConfigValidator::validate(&config);
        assert_eq!(report.errors.len(), 4);
        assert!(matches!(report.error(), Some(ConfigError::Rejected(ref e)) if e.len() == 4));
    }
}
