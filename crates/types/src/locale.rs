//! Locale keys and per-locale content records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized locale key such as `en-us` or `zh-cn`
///
/// Keys are lowercase ASCII subtags joined by `-`. The first subtag is
/// alphabetic and 2 to 8 characters long; the rest are alphanumeric and
/// 1 to 8 characters long. `_` is accepted as a separator on input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LocaleKey(String);

impl LocaleKey {
    /// Normalize and validate a raw locale key
    pub fn parse(raw: &str) -> Result<Self, String> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return Err("locale key cannot be empty".to_string());
        }

        for (index, subtag) in normalized.split('-').enumerate() {
            if subtag.is_empty() {
                return Err("locale key contains an empty subtag".to_string());
            }
            if subtag.len() > 8 {
                return Err(format!("subtag '{}' is longer than 8 characters", subtag));
            }
            if index == 0 {
                if subtag.len() < 2 || !subtag.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(format!(
                        "language subtag '{}' must be 2 to 8 letters",
                        subtag
                    ));
                }
            } else if !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(format!("subtag '{}' must be alphanumeric", subtag));
            }
        }

        Ok(Self(normalized))
    }

    /// Lowercase the key and map `_` to `-` without validating it
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_ascii_lowercase().replace('_', "-")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for LocaleKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        LocaleKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Content block rendered for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleContent {
    /// Top navigation, in rendering order
    #[serde(default)]
    pub page_menu: Vec<MenuItem>,
    /// Footer disclaimer
    #[serde(default)]
    pub disclaimer: TitledContent,
    /// Documentation links
    #[serde(default)]
    pub documentation: TitledList,
    /// Resource links
    #[serde(default)]
    pub resources: TitledList,
    /// Copyright line
    pub copyright: String,
}

impl LocaleContent {
    /// Find a menu item by its key
    pub fn menu_item(&self, key: &str) -> Option<&MenuItem> {
        self.page_menu.iter().find(|item| item.key == key)
    }

    /// Keys of the page menu in rendering order
    pub fn menu_keys(&self) -> impl Iterator<Item = &str> {
        self.page_menu.iter().map(|item| item.key.as_str())
    }

    /// Every link in the block paired with its dotted field path
    pub fn links(&self) -> Vec<(String, &str)> {
        let mut links = Vec::new();
        for (i, item) in self.page_menu.iter().enumerate() {
            links.push((format!("pageMenu[{}].link", i), item.link.as_str()));
        }
        for (i, item) in self.documentation.list.iter().enumerate() {
            links.push((format!("documentation.list[{}].link", i), item.link.as_str()));
        }
        for (i, item) in self.resources.list.iter().enumerate() {
            links.push((format!("resources.list[{}].link", i), item.link.as_str()));
        }
        links
    }
}

/// Top navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier used to mark the active page
    pub key: String,
    /// Label
    pub text: String,
    /// Root-relative target path
    pub link: String,
}

/// Text/link pair used in list sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub text: String,
    pub link: String,
}

/// Title and body text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Title and ordered list of links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledList {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub list: Vec<LinkItem>,
}

impl MenuItem {
    pub fn new(key: impl Into<String>, text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            link: link.into(),
        }
    }
}

impl LinkItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}
