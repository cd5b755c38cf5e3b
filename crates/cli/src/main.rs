//! Stress Level Prediction CLI
//!
//! A command-line front-end for the local stress prediction service:
//! assemble an input payload, request a prediction, render the result.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config as config_cmd, predict};
use stress_client::PredictionClient;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Stress Level Prediction CLI
#[derive(Parser)]
#[command(name = "stress")]
#[command(author, version, about = "CLI for the Stress Level Prediction API", long_about = None)]
pub struct Cli {
    /// API base URL (can also be set via STRESS_API_URL env var)
    #[arg(long, env = "STRESS_API_URL")]
    pub api_url: Option<String>,

    /// Output format [default: table]
    #[arg(long, short)]
    pub format: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request a stress-level prediction
    Predict {
        /// Input fields as key=value pairs (values parsed as JSON, else kept as strings)
        #[arg(value_name = "FIELDS")]
        fields: Vec<String>,

        /// Read the input object from a JSON file ("-" for stdin)
        #[arg(long, short)]
        file: Option<String>,
    },

    /// Manage CLI configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the stored configuration
    Show,

    /// Store the API base URL in the config file
    SetUrl {
        /// API base URL, e.g. http://127.0.0.1:8000
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Predict { fields, file } => {
            let (api_url, format) = config::resolve(cli.api_url.as_deref(), cli.format)?;
            debug!(api_url = %api_url, "Resolved prediction endpoint");
            let client = PredictionClient::with_api_url(api_url)?;
            predict::run(&client, &fields, file.as_deref(), format).await?;
        }
        Commands::Config(command) => match command {
            ConfigCommands::Show => config_cmd::show()?,
            ConfigCommands::SetUrl { url } => config_cmd::set_url(&url)?,
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
