//! Configuration subcommands

use anyhow::{Context, Result};
use url::Url;

use crate::config::Config;
use crate::output::print_success;

/// Print the stored configuration and where it lives
pub fn show() -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load()?;

    println!("Config file: {}", path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

/// Validate and persist the API base URL
pub fn set_url(url: &str) -> Result<()> {
    Url::parse(url).context("Invalid API URL")?;

    let url = url.trim_end_matches('/');
    let mut config = Config::load()?;
    config.api_url = Some(url.to_string());
    config.save()?;

    print_success(&format!("API URL set to {}", url));
    Ok(())
}
