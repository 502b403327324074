//! CLI command definitions and handlers

use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::client::AddressTranslator;
use crate::core::models::{BatchItem, TranslationRequest};

/// Commands for the address translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single address
    Translate {
        /// Address text in the source format
        #[arg(short, long)]
        address: String,

        /// Source address format (e.g. zh-CN)
        #[arg(long)]
        from: String,

        /// Target address format (e.g. en-US)
        #[arg(long)]
        to: String,
    },

    /// Translate a JSON array of requests
    Batch {
        /// Input JSON file: [{"address", "source_locale", "target_locale"}, ...]
        #[arg(short, long)]
        file: PathBuf,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start HTTP API server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Handle single address translation
pub async fn handle_translate(
    translator: AddressTranslator,
    address: String,
    from: String,
    to: String,
) -> anyhow::Result<()> {
    let translated = translator.translate_address(&address, &from, &to).await?;
    println!("{}", translated);
    Ok(())
}

/// Read batch requests from a JSON file
pub fn read_batch_file(file: &Path) -> anyhow::Result<Vec<TranslationRequest>> {
    let content = std::fs::read_to_string(file)?;
    let requests: Vec<TranslationRequest> = serde_json::from_str(&content)?;
    Ok(requests)
}

/// Handle batch translation
pub async fn handle_batch(
    translator: AddressTranslator,
    file: PathBuf,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let requests = read_batch_file(&file)?;

    if requests.is_empty() {
        anyhow::bail!("No addresses found in {}", file.display());
    }

    info!("Translating {} addresses from {}", requests.len(), file.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message(format!("Translating {} addresses", requests.len()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let results = translator.translate_batch(requests.clone()).await;

    let items: Vec<BatchItem> = requests
        .into_iter()
        .zip(results)
        .map(|(request, result)| BatchItem::from_result(request, result))
        .collect();
    let failed = items.iter().filter(|i| i.error.is_some()).count();

    pb.finish_with_message(format!(
        "Done: {} succeeded, {} failed",
        items.len() - failed,
        failed
    ));

    let json = serde_json::to_string_pretty(&items)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            info!("Results written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Handle server command
pub async fn handle_server(translator: AddressTranslator, host: String, port: u16) -> anyhow::Result<()> {
    crate::server::api::run_server(translator, host, port).await
}
