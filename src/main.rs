use anyhow::Result;
use clap::Parser;
use contact_popup::config::Config;
use contact_popup::logger;
use contact_popup::ui::{self, PopupOutcome};
use std::path::PathBuf;

/// Ask for contact info and learning preferences in a terminal popup
#[derive(Debug, Parser)]
#[command(name = "contact-popup", version, about)]
struct Cli {
    /// Load configuration from this file instead of the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default config file (to --config or the default path) and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    logger::init(&config.logging)?;
    log::info!("Starting contact-popup");

    // Run the TUI application
    match ui::run_app(&config).await? {
        Some(PopupOutcome::Submitted(submission)) => {
            println!("{}", serde_json::to_string_pretty(&submission)?);
        }
        Some(PopupOutcome::Dismissed) => {
            eprintln!("Popup dismissed");
        }
        None => {}
    }

    Ok(())
}
