use async_trait::async_trait;
use ethers::types::{I256, U256};
use std::collections::HashMap;

use crate::data::prediction::RoundSource;
use crate::data::types::RoundData;
use crate::error::ChainError;

/// In-memory rounds; any epoch not registered fails like a reverted call
pub struct MockRounds {
    current_epoch: u64,
    rounds: HashMap<u64, RoundData>,
}

impl MockRounds {
    pub fn new(current_epoch: u64) -> Self {
        Self {
            current_epoch,
            rounds: HashMap::new(),
        }
    }

    pub fn with_round(mut self, epoch: u64, lock: i64, close: i64, bull: u64, bear: u64) -> Self {
        self.rounds.insert(epoch, RoundData {
            epoch,
            lock_price: I256::from(lock),
            close_price: I256::from(close),
            bull_amount: U256::from(bull),
            bear_amount: U256::from(bear),
        });
        self
    }
}

#[async_trait]
impl RoundSource for MockRounds {
    async fn get_round(&self, epoch: u64) -> Result<RoundData, ChainError> {
        // Suspend once like a real RPC round trip
        tokio::task::yield_now().await;

        self.rounds.get(&epoch).cloned().ok_or_else(|| ChainError::ContractCall {
            method: "rounds",
            reason: format!("execution reverted for epoch {}", epoch),
        })
    }

    async fn get_current_epoch(&self) -> Result<u64, ChainError> {
        Ok(self.current_epoch)
    }
}
