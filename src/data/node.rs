use ethers::providers::{Http, Middleware, Provider};
use std::sync::Arc;
use tracing::warn;

use crate::error::ChainError;

/// Open an HTTP provider on the given JSON-RPC endpoint
pub fn connect(rpc_url: &str) -> Result<Arc<Provider<Http>>, ChainError> {
    let provider = Provider::<Http>::try_from(rpc_url).map_err(|e| ChainError::Endpoint {
        url: rpc_url.to_string(),
        reason: e.to_string(),
    })?;

    Ok(Arc::new(provider))
}

/// Probe the node by asking for the latest block number
pub async fn is_connected(provider: &Provider<Http>) -> bool {
    match provider.get_block_number().await {
        Ok(_) => true,
        Err(e) => {
            warn!("Node probe failed: {}", e);
            false
        }
    }
}
