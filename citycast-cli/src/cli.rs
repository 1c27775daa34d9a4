use anyhow::Context;
use clap::{Parser, Subcommand};
use citycast_core::{Config, SearchOrchestrator, SearchOutcome, open_meteo_from_config};
use inquire::{InquireError, Text};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use crate::render::{LastView, TerminalView};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citycast", version, about = "Current weather and 7-day forecast for a city")]
pub struct Cli {
    /// Read configuration from this file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for cities until Esc or Ctrl-C (the default).
    Interactive,

    /// Show weather for a single city.
    Show {
        /// City name.
        city: String,

        /// Print the final view as JSON instead of drawing it.
        #[arg(long)]
        json: bool,
    },

    /// Inspect or create the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the config file path.
    Path,
    /// Print the effective configuration.
    Show,
    /// Write a config file with default values.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        tracing::debug!(?config, "loaded config");

        match self.command.unwrap_or(Command::Interactive) {
            Command::Interactive => interactive(&config).await,
            Command::Show { city, json } => show(&config, &city, json).await,
            Command::Config { action } => {
                let path = match self.config {
                    Some(path) => path,
                    None => Config::config_file_path()?,
                };
                configure(&config, &path, action)
            }
        }
    }
}

async fn interactive(config: &Config) -> anyhow::Result<ExitCode> {
    let (geocoder, forecast) = open_meteo_from_config(config)?;
    let orchestrator = SearchOrchestrator::new(geocoder, forecast, TerminalView);

    loop {
        let city = match Text::new("City:")
            .with_help_message("Enter to search, Esc to quit")
            .prompt()
        {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city"),
        };

        orchestrator.search(&city).await;
    }

    Ok(ExitCode::SUCCESS)
}

async fn show(config: &Config, city: &str, json: bool) -> anyhow::Result<ExitCode> {
    let (geocoder, forecast) = open_meteo_from_config(config)?;

    let outcome = if json {
        let orchestrator = SearchOrchestrator::new(geocoder, forecast, LastView::default());
        let outcome = orchestrator.search(city).await;
        if let Some(view) = orchestrator.renderer().take() {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        outcome
    } else {
        SearchOrchestrator::new(geocoder, forecast, TerminalView)
            .search(city)
            .await
    };

    Ok(match outcome {
        SearchOutcome::Displayed => ExitCode::SUCCESS,
        SearchOutcome::Ignored => {
            eprintln!("Please enter a city name.");
            ExitCode::from(2)
        }
        SearchOutcome::NotFound | SearchOutcome::Failed | SearchOutcome::Superseded => {
            ExitCode::FAILURE
        }
    })
}

fn configure(config: &Config, path: &Path, action: ConfigAction) -> anyhow::Result<ExitCode> {
    match action {
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Show => print!("{}", config.to_toml()?),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                eprintln!(
                    "Config file already exists: {}\nHint: pass --force to overwrite it.",
                    path.display()
                );
                return Ok(ExitCode::FAILURE);
            }
            Config::default().save_to(path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
