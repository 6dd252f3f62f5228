mod platform;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_info, engine_warn};
use url::Url;

use platform::config::{load_config, AppConfig, CONFIG_FILENAME};
use platform::logging::{self, LogDestination};

/// Offer the closest Wayback Machine snapshot for a page that failed to load.
#[derive(Debug, Parser)]
#[command(name = "wayback_infobar", version)]
struct Cli {
    /// URL of the missing page.
    page_url: String,
    /// Config file (RON). Defaults to ./wayback_infobar.ron when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where log output goes; overrides the config file.
    #[arg(long, value_enum)]
    log: Option<LogDestination>,
    /// Press the check button as soon as the bar is shown.
    #[arg(long)]
    auto_check: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let loaded = load_config(&config_path);
    let mut config = loaded.as_ref().cloned().unwrap_or_else(|_| AppConfig::default());
    if let Some(destination) = cli.log {
        config.log = destination;
    }

    logging::initialize(config.log);
    if let Err(err) = &loaded {
        engine_warn!("{}; using defaults", err);
    }

    let page_url = Url::parse(&cli.page_url)
        .with_context(|| format!("invalid page url {:?}", cli.page_url))?;
    engine_info!("showing wayback infobar for {}", page_url);

    platform::run_app(config, page_url, cli.auto_check)
}
