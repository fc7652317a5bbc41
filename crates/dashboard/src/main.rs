mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use saturn_dashboard::settings::Settings;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "saturn-dashboard",
    about = "Chart-data backend for the Saturn network metrics dashboard",
    version,
    author,
    after_help = r#"Configuration:
    Configuration can be provided via:
    1. Environment variables with SATURN__ prefix (e.g., SATURN__PERIOD__YEAR)
    2. .env file in the current directory
    3. Config file with -c option

Examples:
    # Render every chart for the default reporting period
    saturn-dashboard render --output-dir ./figures

    # Render one chart for March 2024 to stdout
    saturn-dashboard render --chart world-map --year 2024 --month 3

    # Look at the parsed country stats
    saturn-dashboard inspect country-stats --limit 20

    # Show the dataset and chart registries
    saturn-dashboard list"#
)]
pub struct Cli {
    /// Path to the configuration file (TOML format)
    ///
    /// If not provided, will attempt to load from environment variables
    #[clap(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render chart figures as renderer-ready JSON
    Render(cli::render::RenderArgs),
    /// Fetch and display one parsed dataset
    Inspect(cli::inspect::InspectArgs),
    /// List the dataset and chart registries
    List,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = if let Some(config_path) = &self.config {
            Settings::from_path(config_path)?
        } else {
            Settings::from_env()?
        };
        init_logging(&settings.log_level)?;

        match self.command {
            Commands::Render(args) => cli::render::handle(&settings, args).await,
            Commands::Inspect(args) => cli::inspect::handle(&settings, args).await,
            Commands::List => cli::list::handle(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run().await
}

fn init_logging(log_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}
