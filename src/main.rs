mod cli;
mod config;
mod data;
mod epochs;
mod error;
mod export;

use anyhow::{Context, Result};
use clap::Parser;
use ethers::types::Address;
use ethers::utils::to_checksum;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{ApiKeyFile, Config};
use data::explorer::ExplorerClient;
use data::node;
use data::prediction::PredictionContract;
use epochs::processor::EpochProcessor;
use epochs::prompt::{Prompter, TerminalAsk};
use epochs::range::resolve_range;
use export::csv::CsvExporter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load_or_default(&cli.config)?;
    config.apply_env();
    let output_path = cli.output.clone().unwrap_or_else(|| config.output.csv_path.clone());

    let provider = node::connect(&config.network.rpc_url)?;
    tracing::info!("Node connected: {}", node::is_connected(&provider).await);

    let api_key = ApiKeyFile::load(&config.explorer.api_key_path)?;

    let address: Address = config.contract.address.parse()
        .with_context(|| format!("Invalid contract address: {}", config.contract.address))?;

    let explorer = ExplorerClient::new(config.explorer.api_url.clone());
    let abi = explorer
        .fetch_abi(&config.contract.address, &api_key.bscscan_api_key)
        .await
        .context("Failed to fetch contract ABI")?;

    let contract = PredictionContract::new(address, abi, provider);
    tracing::info!("Prediction contract: {}", to_checksum(&contract.address(), None));
    let processor = EpochProcessor::new(contract);

    let request = match cli.range_request() {
        Some(request) => request,
        None => Prompter::new(TerminalAsk::new()).ask_range_request()?,
    };
    let range = resolve_range(request, processor.source())
        .await
        .context("Failed to resolve epoch range")?;
    if range.is_empty() {
        tracing::warn!("Epoch range {}..={} is empty, writing header only", range.start, range.end);
    }

    let rows = processor.process_range(range).await;

    let exporter = CsvExporter::new(&output_path);
    exporter.write_rows(&rows)?;
    tracing::info!("Results saved to {} ({} rows)", exporter.path().display(), rows.len());

    Ok(())
}
