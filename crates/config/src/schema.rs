//! Configuration schema definitions
//!
//! `RawSiteConfig` is the shape read from YAML/JSON files and environment
//! overrides. It is unvalidated; see [`crate::SiteConfig`] for the checked form.

use serde::{Deserialize, Serialize};
use site_types::{LinkItem, LocaleContent, MenuItem, TitledContent, TitledList};
use std::collections::BTreeMap;

/// Main configuration structure as written by site authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSiteConfig {
    /// Publish prefix: empty, or starting with `/` and not ending with `/`
    #[serde(default)]
    pub root_path: String,
    /// Local dev server port
    #[serde(default = "default_port")]
    pub port: i64,
    /// Deployment domain, without scheme or path
    pub domain: String,
    /// Default search engine (baidu, google)
    #[serde(default = "default_search_engine", alias = "defaultSearch")]
    pub default_search_engine: String,
    /// Locale used when a request does not name one
    pub default_language: String,
    /// Per-locale content blocks
    #[serde(default)]
    pub locales: BTreeMap<String, LocaleContent>,
    /// Fail lookups of unconfigured locales instead of falling back
    #[serde(default)]
    pub strict_locales: bool,
}

// Default value functions
fn default_port() -> i64 {
    8080
}

fn default_search_engine() -> String {
    "google".to_string()
}

const SAMPLE_COPYRIGHT: &str = "Copyright © 2019 klw8.top";

impl Default for RawSiteConfig {
    fn default() -> Self {
        let mut locales = BTreeMap::new();
        locales.insert("en-us".to_string(), english_sample());
        locales.insert("zh-cn".to_string(), chinese_sample());

        Self {
            root_path: String::new(),
            port: default_port(),
            domain: "dubbo.apache.org".to_string(),
            default_search_engine: default_search_engine(),
            default_language: "zh-cn".to_string(),
            locales,
            strict_locales: false,
        }
    }
}

fn english_sample() -> LocaleContent {
    LocaleContent {
        page_menu: vec![MenuItem::new("home", "BLOG", "/en-us/blog/index.html")],
        disclaimer: TitledContent {
            title: "Disclaimer".to_string(),
            content: "the disclaimer content".to_string(),
        },
        documentation: TitledList {
            title: "Documentation".to_string(),
            list: vec![
                LinkItem::new("Overview", "/en-us/docs/demo1.html"),
                LinkItem::new("Quick start", "/en-us/docs/demo2.html"),
                LinkItem::new("Developer guide", "/en-us/docs/dir/demo3.html"),
            ],
        },
        resources: TitledList {
            title: "Resources".to_string(),
            list: vec![LinkItem::new("Blog", "/en-us/blog/index.html")],
        },
        copyright: SAMPLE_COPYRIGHT.to_string(),
    }
}

fn chinese_sample() -> LocaleContent {
    LocaleContent {
        page_menu: vec![MenuItem::new("home", "博客", "/zh-cn/blog/index.html")],
        disclaimer: TitledContent {
            title: "免责声明".to_string(),
            content: "免责声明的具体内容111".to_string(),
        },
        documentation: TitledList {
            title: "文档".to_string(),
            list: vec![
                LinkItem::new("概览", "/zh-cn/docs/demo1.html"),
                LinkItem::new("快速开始", "/zh-cn/docs/demo2.html"),
                LinkItem::new("开发者指南", "/zh-cn/docs/dir/demo3.html"),
            ],
        },
        resources: TitledList {
            title: "资源".to_string(),
            list: vec![LinkItem::new("博客", "/zh-cn/blog/index.html")],
        },
        copyright: SAMPLE_COPYRIGHT.to_string(),
    }
}
