use rust_decimal::Decimal;
use tracing::{error, info};

use crate::data::prediction::RoundSource;
use crate::data::units::{payout_odds, wei_to_display};
use crate::epochs::range::EpochRange;
use crate::epochs::types::{EpochRow, Outcome, Position};
use crate::error::ChainError;

/// Turns on-chain rounds into result rows.
///
/// Each helper reads the round itself and absorbs its own failures, so a bad
/// epoch degrades to an `Error` outcome with zero odds instead of aborting the run.
pub struct EpochProcessor<S> {
    source: S,
}

impl<S: RoundSource> EpochProcessor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn classify_epoch(&self, epoch: u64) -> Outcome {
        match self.source.get_round(epoch).await {
            Ok(round) => round.outcome(),
            Err(e) => {
                error!("Error fetching epoch {}: {}", epoch, e);
                Outcome::Error
            }
        }
    }

    pub async fn compute_odds(&self, epoch: u64, side: Position) -> Decimal {
        match self.try_compute_odds(epoch, side).await {
            Ok(odds) => odds,
            Err(e) => {
                error!("Error fetching winning odds for epoch {}: {}", epoch, e);
                Decimal::ZERO
            }
        }
    }

    async fn try_compute_odds(&self, epoch: u64, side: Position) -> Result<Decimal, ChainError> {
        let round = self.source.get_round(epoch).await?;

        let total = wei_to_display(round.total_amount()?)?;
        let side_amount = match side {
            Position::Bull => wei_to_display(round.bull_amount)?,
            Position::Bear => wei_to_display(round.bear_amount)?,
        };

        payout_odds(total, side_amount)
    }

    pub async fn process_epoch(&self, epoch: u64) -> EpochRow {
        EpochRow {
            epoch,
            result: self.classify_epoch(epoch).await,
            bull_odds: self.compute_odds(epoch, Position::Bull).await,
            bear_odds: self.compute_odds(epoch, Position::Bear).await,
        }
    }

    /// Process every epoch in `range` in ascending order, one at a time
    pub async fn process_range(&self, range: EpochRange) -> Vec<EpochRow> {
        let mut rows = Vec::new();

        for epoch in range.epochs() {
            let row = self.process_epoch(epoch).await;
            info!("Processed epoch {}: {}", epoch, row);
            rows.push(row);
        }

        rows
    }
}
