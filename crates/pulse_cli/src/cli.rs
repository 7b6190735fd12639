use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pulse_app::PulseConfig;
use pulse_theme::ThemePreset;
use std::path::{Path, PathBuf};

use crate::simulate::{run_simulation, SimulateArgs};

#[derive(Debug, Parser)]
#[command(
    name = "pulse",
    about = "Headless tooling for Pulse scene bootstrap and theming",
    version
)]
pub struct Cli {
    /// Configuration file, or a directory containing pulse.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a launch against in-memory collaborators and print its timeline.
    Simulate(SimulateArgs),

    /// List the built-in theme presets.
    Themes,

    /// Print the effective configuration as TOML.
    Config,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    pulse_app::logging::init(&config.logging.filter);

    match cli.command {
        Commands::Simulate(args) => {
            let timeline = run_simulation(config, &args);
            if args.json {
                let json = serde_json::to_string_pretty(&timeline)
                    .context("Failed to encode timeline")?;
                println!("{json}");
            } else {
                for entry in &timeline {
                    println!("{entry}");
                }
            }
            Ok(())
        }
        Commands::Themes => {
            print_themes();
            Ok(())
        }
        Commands::Config => {
            let text = config.to_toml().context("Failed to render configuration")?;
            print!("{text}");
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<PulseConfig> {
    match path {
        Some(path) => PulseConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(PulseConfig::default()),
    }
}

fn print_themes() {
    for preset in ThemePreset::all() {
        let palette = preset.palette();
        println!(
            "{:<10} {:<10} accent {}  surface {}",
            preset.id(),
            preset.display_name(),
            palette.accent.to_hex_string(),
            palette.surface.to_hex_string()
        );
    }
}
