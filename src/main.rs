use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use vitrine::config::{Config, ConfigStore};
use vitrine::ui;

#[derive(Debug, Parser)]
#[command(name = "vitrine", about = "Terminal storefront demo", version)]
struct Cli {
    /// Path to the config file (defaults to the user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the store base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Write diagnostic logs to this file (stdout belongs to the UI).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path).context("loading configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().context("applying --base-url")?;
    }

    if let Some(log_file) = &cli.log_file {
        init_logging(log_file).context("initializing logging")?;
    }

    let store = ConfigStore::new(config, path);
    ui::runtime::run(store)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file '{}'", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vitrine=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_with_no_args() {
        let cli = Cli::try_parse_from(["vitrine"]).expect("bare invocation parses");
        assert!(cli.config.is_none());
        assert!(cli.base_url.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn cli_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "vitrine",
            "--base-url",
            "http://localhost:9000",
            "--log-file",
            "/tmp/vitrine.log",
        ])
        .expect("flags parse");
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
        assert!(cli.log_file.is_some());
    }

    #[test]
    fn invalid_base_url_override_fails_validation() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }
}
