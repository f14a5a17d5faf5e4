use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub explorer: ExplorerConfig,
    #[serde(default)]
    pub contract: ContractConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default = "default_explorer_url")]
    pub api_url: String,
    #[serde(default = "default_api_key_path")]
    pub api_key_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    #[serde(default = "default_contract_address")]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

fn default_rpc_url() -> String { "https://bsc-dataseed.binance.org/".to_string() }
fn default_explorer_url() -> String { "https://api.bscscan.com/api".to_string() }
fn default_api_key_path() -> String { "api_key.json".to_string() }
// PancakeSwap Prediction V2 (BNB/USD)
fn default_contract_address() -> String { "0x18b2a687610328590bc8f2e5fedde3b582a49cda".to_string() }
fn default_csv_path() -> String { "epoch_results.csv".to_string() }

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { rpc_url: default_rpc_url() }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_url: default_explorer_url(),
            api_key_path: default_api_key_path(),
        }
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self { address: default_contract_address() }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { csv_path: default_csv_path() }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Load `path` when it exists, otherwise fall back to the built-in BSC defaults
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::info!("No config file at {}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Apply `.env` and process environment overrides
    pub fn apply_env(&mut self) {
        dotenv::dotenv().ok();
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BSC_RPC_URL") {
            self.network.rpc_url = url;
        }
        if let Some(url) = lookup("BSCSCAN_API_URL") {
            self.explorer.api_url = url;
        }
        if let Some(address) = lookup("PREDICTION_CONTRACT") {
            self.contract.address = address;
        }
    }
}

/// Contents of `api_key.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeyFile {
    pub bscscan_api_key: String,
}

impl ApiKeyFile {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read API key file: {}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse API key file: {}", path))
    }
}
