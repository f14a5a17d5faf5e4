use rust_decimal::Decimal;
use std::fmt;

/// Which way the round settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Bull,
    Bear,
    Draw,
    /// The round could not be read
    Error,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Bull => write!(f, "Bull"),
            Outcome::Bear => write!(f, "Bear"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Error => write!(f, "Error"),
        }
    }
}

/// Side of a bet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Bull,
    Bear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochRow {
    pub epoch: u64,
    pub result: Outcome,
    pub bull_odds: Decimal,
    pub bear_odds: Decimal,
}

impl fmt::Display for EpochRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.epoch, self.result, self.bull_odds, self.bear_odds
        )
    }
}
