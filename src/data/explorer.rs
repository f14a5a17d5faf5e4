use ethers::abi::Abi;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::ChainError;

/// BscScan-style block explorer, used only to pull verified contract ABIs
pub struct ExplorerClient {
    client: Client,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct GetAbiResponse {
    #[serde(default)]
    message: Option<String>,
    result: String,
}

impl ExplorerClient {
    pub fn new(api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
        }
    }

    /// Fetch the verified ABI for `address`
    pub async fn fetch_abi(&self, address: &str, api_key: &str) -> Result<Abi, ChainError> {
        debug!("Fetching ABI for {} from {}", address, self.api_url);

        let body = self.client
            .get(&self.api_url)
            .query(&[
                ("module", "contract"),
                ("action", "getabi"),
                ("address", address),
                ("apikey", api_key),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_abi_response(&body)
    }
}

/// The explorer wraps the ABI as a JSON string inside a JSON envelope.
/// Errors (bad key, unverified contract) arrive with HTTP 200 and prose in `result`.
fn decode_abi_response(body: &str) -> Result<Abi, ChainError> {
    let envelope: GetAbiResponse = serde_json::from_str(body)
        .map_err(|e| ChainError::AbiDecode(format!("malformed response: {}", e)))?;

    serde_json::from_str(&envelope.result).map_err(|e| {
        let message = envelope.message.unwrap_or_default();
        ChainError::AbiDecode(format!("{} {} ({})", message, envelope.result, e).trim().to_string())
    })
}
