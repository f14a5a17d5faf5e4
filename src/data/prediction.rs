use async_trait::async_trait;
use ethers::abi::{Abi, Token};
use ethers::contract::Contract;
use ethers::providers::{Http, Provider};
use ethers::types::{Address, U256};
use std::sync::Arc;
use tracing::debug;

use crate::data::types::RoundData;
use crate::error::ChainError;

/// Read access to prediction rounds
#[async_trait]
pub trait RoundSource: Send + Sync {
    async fn get_round(&self, epoch: u64) -> Result<RoundData, ChainError>;

    /// Latest epoch the contract has started (still live)
    async fn get_current_epoch(&self) -> Result<u64, ChainError>;
}

/// Prediction market contract bound to a node over HTTP
pub struct PredictionContract {
    contract: Contract<Provider<Http>>,
}

impl PredictionContract {
    pub fn new(address: Address, abi: Abi, provider: Arc<Provider<Http>>) -> Self {
        Self {
            contract: Contract::new(address, abi, provider),
        }
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }
}

#[async_trait]
impl RoundSource for PredictionContract {
    async fn get_round(&self, epoch: u64) -> Result<RoundData, ChainError> {
        debug!("rounds({})", epoch);

        let output: Token = self.contract
            .method::<_, Token>("rounds", U256::from(epoch))
            .map_err(|e| call_error("rounds", e))?
            .call()
            .await
            .map_err(|e| call_error("rounds", e))?;

        // Multi-value outputs come back wrapped in a single tuple token
        let fields = match output {
            Token::Tuple(fields) => fields,
            single => vec![single],
        };

        RoundData::from_tokens(epoch, &fields)
    }

    async fn get_current_epoch(&self) -> Result<u64, ChainError> {
        let epoch: U256 = self.contract
            .method::<_, U256>("currentEpoch", ())
            .map_err(|e| call_error("currentEpoch", e))?
            .call()
            .await
            .map_err(|e| call_error("currentEpoch", e))?;

        u64::try_from(epoch).map_err(|_| ChainError::ContractCall {
            method: "currentEpoch",
            reason: format!("epoch {} does not fit in u64", epoch),
        })
    }
}

fn call_error(method: &'static str, err: impl std::fmt::Display) -> ChainError {
    ChainError::ContractCall {
        method,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::node;

    const PREDICTION_ABI: &str = r#"[
        {"inputs":[],"name":"currentEpoch","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"view","type":"function"},
        {"inputs":[{"internalType":"uint256","name":"","type":"uint256"}],"name":"rounds","outputs":[
            {"internalType":"uint256","name":"epoch","type":"uint256"},
            {"internalType":"uint256","name":"startTimestamp","type":"uint256"},
            {"internalType":"uint256","name":"lockTimestamp","type":"uint256"},
            {"internalType":"uint256","name":"closeTimestamp","type":"uint256"},
            {"internalType":"int256","name":"lockPrice","type":"int256"},
            {"internalType":"int256","name":"closePrice","type":"int256"},
            {"internalType":"uint256","name":"lockOracleId","type":"uint256"},
            {"internalType":"uint256","name":"closeOracleId","type":"uint256"},
            {"internalType":"uint256","name":"totalAmount","type":"uint256"},
            {"internalType":"uint256","name":"bullAmount","type":"uint256"},
            {"internalType":"uint256","name":"bearAmount","type":"uint256"},
            {"internalType":"uint256","name":"rewardBaseCalAmount","type":"uint256"},
            {"internalType":"uint256","name":"rewardAmount","type":"uint256"},
            {"internalType":"bool","name":"oracleCalled","type":"bool"}
        ],"stateMutability":"view","type":"function"}
    ]"#;

    fn contract() -> PredictionContract {
        let abi: Abi = serde_json::from_str(PREDICTION_ABI).unwrap();
        let provider = node::connect("http://127.0.0.1:8545").unwrap();
        let address: Address = "0x18b2a687610328590bc8f2e5fedde3b582a49cda".parse().unwrap();

        PredictionContract::new(address, abi, provider)
    }

    #[test]
    fn test_builds_read_calls_from_abi() {
        let contract = contract();

        assert!(contract.contract.method::<_, Token>("rounds", U256::from(42)).is_ok());
        assert!(contract.contract.method::<_, U256>("currentEpoch", ()).is_ok());
    }

    #[test]
    fn test_unknown_method_is_a_call_error() {
        let contract = contract();
        let result = contract
            .contract
            .method::<_, U256>("claimable", ())
            .map_err(|e| call_error("claimable", e));

        assert!(matches!(result, Err(ChainError::ContractCall { method: "claimable", .. })));
    }

    #[test]
    fn test_address_is_kept() {
        let contract = contract();
        let checksummed = ethers::utils::to_checksum(&contract.address(), None);

        assert_eq!(checksummed.to_lowercase(), "0x18b2a687610328590bc8f2e5fedde3b582a49cda");
        assert_ne!(checksummed, checksummed.to_lowercase());
    }
}
