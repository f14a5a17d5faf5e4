use ethers::abi::Token;
use ethers::types::{I256, U256};
use std::cmp::Ordering;

use crate::epochs::types::Outcome;
use crate::error::ChainError;

// Positions inside the `rounds(uint256)` return tuple
const LOCK_PRICE: usize = 4;
const CLOSE_PRICE: usize = 5;
const BULL_AMOUNT: usize = 9;
const BEAR_AMOUNT: usize = 10;

/// The subset of an on-chain round this tool reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundData {
    pub epoch: u64,
    pub lock_price: I256,
    pub close_price: I256,
    /// Wei staked on price-up
    pub bull_amount: U256,
    /// Wei staked on price-down
    pub bear_amount: U256,
}

impl RoundData {
    /// Decode the flattened `rounds(epoch)` output by position
    pub fn from_tokens(epoch: u64, tokens: &[Token]) -> Result<Self, ChainError> {
        Ok(Self {
            epoch,
            lock_price: int_at(epoch, tokens, LOCK_PRICE)?,
            close_price: int_at(epoch, tokens, CLOSE_PRICE)?,
            bull_amount: uint_at(epoch, tokens, BULL_AMOUNT)?,
            bear_amount: uint_at(epoch, tokens, BEAR_AMOUNT)?,
        })
    }

    pub fn outcome(&self) -> Outcome {
        match self.close_price.cmp(&self.lock_price) {
            Ordering::Greater => Outcome::Bull,
            Ordering::Less => Outcome::Bear,
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn total_amount(&self) -> Result<U256, ChainError> {
        self.bull_amount
            .checked_add(self.bear_amount)
            .ok_or_else(|| ChainError::Units(format!("stake total overflows for epoch {}", self.epoch)))
    }
}

fn int_at(epoch: u64, tokens: &[Token], index: usize) -> Result<I256, ChainError> {
    match tokens.get(index) {
        Some(Token::Int(raw)) => Ok(I256::from_raw(*raw)),
        other => Err(unexpected(epoch, index, "int", other)),
    }
}

fn uint_at(epoch: u64, tokens: &[Token], index: usize) -> Result<U256, ChainError> {
    match tokens.get(index) {
        Some(Token::Uint(value)) => Ok(*value),
        other => Err(unexpected(epoch, index, "uint", other)),
    }
}

fn unexpected(epoch: u64, index: usize, expected: &str, found: Option<&Token>) -> ChainError {
    let reason = match found {
        Some(token) => format!("field {} should be {}, got {:?}", index, expected, token),
        None => format!("field {} missing", index),
    };
    ChainError::RoundDecode { epoch, reason }
}
