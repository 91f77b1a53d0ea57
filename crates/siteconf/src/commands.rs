//! Subcommand implementations

use anyhow::{Context, Result};
use clap::ValueEnum;
use site_config::{ConfigLoader, SiteConfig};
use std::fmt::Write;
use std::path::Path;
use tracing::{error, info};

/// Serialization format for `dump`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Load and validate, returning a human readable summary
pub fn check(path: &Path) -> Result<String> {
    let config = load(path)?;
    info!(
        port = config.port(),
        domain = config.domain(),
        locales = config.locales().len(),
        "Configuration is valid"
    );
    Ok(summarize(&config))
}

/// Load and re-serialize the normalized configuration
pub fn dump(path: &Path, format: OutputFormat) -> Result<String> {
    let config = load(path)?;
    render(&config, format)
}

/// Write the built-in sample configuration
pub fn example(output: &Path) -> Result<()> {
    if output.exists() {
        anyhow::bail!("Refusing to overwrite existing file {}", output.display());
    }
    ConfigLoader::create_example(output)
}

fn load(path: &Path) -> Result<SiteConfig> {
    ConfigLoader::load(path).map_err(|e| {
        for failure in e.iter() {
            error!(locale = failure.locale().unwrap_or("-"), "{}", failure);
        }
        anyhow::Error::new(e)
    })
}

pub fn render(config: &SiteConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(config).context("Failed to serialize YAML"),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(config).context("Failed to serialize JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn summarize(config: &SiteConfig) -> String {
    let mut out = String::new();
    let root = if config.root_path().is_empty() {
        "/"
    } else {
        config.root_path()
    };

    // Writing to a String cannot fail
    let _ = writeln!(out, "domain:           {}", config.domain());
    let _ = writeln!(out, "root path:        {}", root);
    let _ = writeln!(out, "port:             {}", config.port());
    let _ = writeln!(out, "search engine:    {}", config.default_search_engine());
    let _ = writeln!(
        out,
        "default language: {}{}",
        config.default_language(),
        if config.strict_locales() { " (strict)" } else { "" }
    );
    for (locale, content) in config.locales() {
        let menu: Vec<_> = content.menu_keys().collect();
        let _ = writeln!(
            out,
            "  {:<8} menu [{}], {} documentation links, {} resources",
            locale.as_str(),
            menu.join(", "),
            content.documentation.list.len(),
            content.resources.list.len()
        );
    }
    out
}
