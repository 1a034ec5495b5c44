use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use typetodo::api::create_api;
use typetodo::config::Config;
use typetodo::logger::Logger;
use typetodo::settings::SettingsService;

/// Terminal client for a hashtag task list
#[derive(Parser, Debug)]
#[command(name = "typetodo", version, about)]
struct Cli {
    /// Path to a configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the task API (overrides config and TYPETODO_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Log at debug level to the log file
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(path)?;
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(Config::env_api_url(), cli.api_url)?;

    let level = if cli.debug { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = Logger::from_config(config.logging.enabled || cli.debug, level)?;
    log::info!("typetodo starting against {}", config.api.base_url);

    let (api, tokens) = create_api(&config.api)?;

    // Authentication gate: nothing is shown without a token
    if let Err(e) = tokens.token().await {
        log::warn!("No API token: {}", e);
        eprintln!("❌ Error: {} environment variable not set", config.api.token_env);
        eprintln!("\n💡 To use this app:");
        eprintln!("1. Sign in to your task list account and copy your API token");
        eprintln!(
            "2. Set it as environment variable: export {}=your_token_here",
            config.api.token_env
        );
        eprintln!("3. Run the app again to see your tasks!");
        return Ok(());
    }

    let settings = SettingsService::load(SettingsService::default_path()?);

    typetodo::ui::run_app(&config, api, settings, logger).await?;

    Ok(())
}
