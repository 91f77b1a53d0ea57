//! siteconf - validate and inspect site configuration files

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "siteconf", version, about = "Validate and inspect site configuration")]
struct Cli {
    /// Path to the site configuration file (YAML or JSON)
    #[arg(long, short, global = true, env = "SITE_CONFIG_PATH", default_value = "site.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and validate the configuration, then print a summary
    Check,
    /// Print the normalized configuration
    Dump {
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Write the built-in sample configuration
    Example {
        #[arg(long, short, default_value = "site.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let dotenv_result = dotenv::dotenv();

    // Initialize logging
    init_logging()?;

    match dotenv_result {
        Ok(path) => info!("Loaded environment variables from {}", path.display()),
        Err(e) if !e.not_found() => warn!("Could not load .env file: {}", e),
        Err(_) => {}
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            let summary = commands::check(&cli.config)
                .with_context(|| format!("Failed to load {}", cli.config.display()))?;
            println!("{}", summary);
        }
        Command::Dump { format } => {
            let rendered = commands::dump(&cli.config, format)
                .with_context(|| format!("Failed to dump {}", cli.config.display()))?;
            print!("{}", rendered);
        }
        Command::Example { output } => {
            commands::example(&output)?;
            info!("Example configuration written to {}", output.display());
        }
    }

    Ok(())
}

/// Initialize logging based on environment variables
fn init_logging() -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so `dump` output stays clean on stdout
    match log_format.as_str() {
        "pretty" => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
    }

    if log_level == "trace" || log_level == "debug" {
        warn!("Debug/trace logging enabled");
    }

    Ok(())
}
