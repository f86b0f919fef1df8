//! Show the settings file

use crate::settings::{self, Settings};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub async fn run(settings: &Settings, path_only: bool, example: bool) -> Result<()> {
    if example {
        print!("{}", settings::example_config());
        return Ok(());
    }

    let config_path = settings::config_file_path()
        .context("Could not determine config file path")?;

    if path_only {
        println!("{}", config_path.display());
        return Ok(());
    }

    println!("{}", "Settings".bold());
    if config_path.exists() {
        println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());
    } else {
        println!(
            "{}: {} {}\n",
            "Location".dimmed(),
            config_path.display().dimmed(),
            "(not created, using defaults)".yellow()
        );
    }

    let rendered = toml::to_string_pretty(settings).context("Failed to render settings")?;
    print!("{}", rendered);

    Ok(())
}
