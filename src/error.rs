use thiserror::Error;

/// Failures talking to the block explorer or the prediction contract.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Invalid RPC endpoint {url}: {reason}")]
    Endpoint { url: String, reason: String },

    #[error("ABI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Explorer returned no usable ABI: {0}")]
    AbiDecode(String),

    #[error("Contract call {method} failed: {reason}")]
    ContractCall { method: &'static str, reason: String },

    #[error("Unexpected round layout for epoch {epoch}: {reason}")]
    RoundDecode { epoch: u64, reason: String },

    #[error("Amount conversion failed: {0}")]
    Units(String),
}
