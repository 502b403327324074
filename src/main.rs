//! Main entry point for the address translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use address_translator::cli::commands::{self, Commands};
use address_translator::{AddressTranslator, TranslatorConfig};

/// Address Translator - convert postal addresses between locale formats
#[derive(Parser, Debug)]
#[command(name = "address-translator", version, about, long_about = None)]
struct Args {
    /// API key for GLM (optional, defaults to ZHIPU_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// JSON or YAML config file (overrides environment)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => TranslatorConfig::from_file(path)?,
        None => TranslatorConfig::from_env()?,
    };

    // Override config with CLI args if provided
    if let Some(api_key) = args.api_key {
        config.api_key = api_key;
    }

    let Some(command) = args.command else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    let translator = AddressTranslator::new(config)?;

    match command {
        Commands::Translate { address, from, to } => {
            commands::handle_translate(translator, address, from, to).await?;
        }
        Commands::Batch { file, output } => {
            commands::handle_batch(translator, file, output).await?;
        }
        Commands::Server { host, port } => {
            commands::handle_server(translator, host, port).await?;
        }
    }

    Ok(())
}
