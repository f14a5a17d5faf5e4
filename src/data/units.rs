use ethers::types::U256;
use ethers::utils::format_units;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::ChainError;

/// Convert a wei amount to BNB (10^18 scale)
pub fn wei_to_display(wei: U256) -> Result<Decimal, ChainError> {
    let formatted = format_units(wei, "ether").map_err(|e| ChainError::Units(e.to_string()))?;

    Decimal::from_str(&formatted).map_err(|e| ChainError::Units(format!("{}: {}", formatted, e)))
}

/// Payout multiple for one side: total pool over the side's pool.
/// Zero when either pool is empty.
pub fn payout_odds(total: Decimal, side: Decimal) -> Result<Decimal, ChainError> {
    if total.is_zero() || side.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let ratio = total
        .checked_div(side)
        .ok_or_else(|| ChainError::Units(format!("odds overflow: {} / {}", total, side)))?;

    Ok(round_odds(ratio))
}

/// Round half-up to the nearest hundredth, always keeping two decimals
pub fn round_odds(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
