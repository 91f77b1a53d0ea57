//! Search engine selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// Search engines the site header can delegate to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    Baidu,
    Google,
}

impl SearchEngine {
    /// All supported engines
    pub const ALL: [SearchEngine; 2] = [SearchEngine::Baidu, SearchEngine::Google];

    /// Convert search engine to string
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Baidu => "baidu",
            SearchEngine::Google => "google",
        }
    }

    /// Build a query URL restricted to `domain`
    pub fn search_url(&self, domain: &str, query: &str) -> String {
        let query = query.trim();
        let terms = if query.is_empty() {
            format!("site:{}", domain)
        } else {
            format!("site:{} {}", domain, query)
        };
        let (base, param) = match self {
            SearchEngine::Baidu => ("https://www.baidu.com/s", "wd"),
            SearchEngine::Google => ("https://www.google.com/search", "q"),
        };

        let encoded = form_urlencoded::Serializer::new(String::new())
            .append_pair(param, &terms)
            .finish();
        format!("{}?{}", base, encoded)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::Google
    }
}

impl FromStr for SearchEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baidu" => Ok(SearchEngine::Baidu),
            "google" => Ok(SearchEngine::Google),
            _ => Err(format!("Unknown search engine: {}", s)),
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
