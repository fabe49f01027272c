mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vidpulse_youtube::YoutubeClient;

#[derive(Debug, Parser)]
#[command(name = "vidpulse-cli")]
#[command(about = "Browse trending YouTube videos by category")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the categories that currently have a trending chart
    Categories,
    /// Show the trending videos of a category with their top comment
    Trending {
        /// Category display name, e.g. "Music"
        category: String,

        /// Print records as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = vidpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = YoutubeClient::from_config(&config)?;

    match cli.command {
        Commands::Categories => commands::run_categories(&client).await,
        Commands::Trending { category, json } => {
            commands::run_trending(&client, &category, json).await
        }
    }
}

#[cfg(test)]
mod tests;
