use std::ops::RangeInclusive;
use tracing::info;

use crate::data::prediction::RoundSource;
use crate::error::ChainError;

/// The two most recent epochs are live or awaiting settlement
const UNSETTLED_EPOCHS: u64 = 2;

/// How the user asked for epochs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRequest {
    /// The latest `n` settled epochs
    Latest(u64),
    /// An explicit inclusive range, used verbatim
    Explicit { start: u64, end: u64 },
}

/// Inclusive epoch range; empty when `start > end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochRange {
    pub start: u64,
    pub end: u64,
}

impl EpochRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Range ending just before the unsettled epochs, starting no lower than 1
    pub fn latest(current_epoch: u64, n: u64) -> Self {
        let start = current_epoch.saturating_sub(n.saturating_add(1)).max(1);
        let end = current_epoch.saturating_sub(UNSETTLED_EPOCHS);
        Self { start, end }
    }

    pub fn epochs(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            usize::try_from(self.end - self.start)
                .unwrap_or(usize::MAX)
                .saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Turn a request into concrete epochs, asking the contract for the current epoch if needed
pub async fn resolve_range<S: RoundSource + ?Sized>(
    request: RangeRequest,
    source: &S,
) -> Result<EpochRange, ChainError> {
    let range = match request {
        RangeRequest::Latest(n) => {
            let current_epoch = source.get_current_epoch().await?;
            info!("Current epoch: {}", current_epoch);
            EpochRange::latest(current_epoch, n)
        }
        RangeRequest::Explicit { start, end } => EpochRange::new(start, end),
    };

    info!("Processing epochs {} to {} ({} epochs)", range.start, range.end, range.len());
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock::MockRounds;

    #[test]
    fn test_latest_excludes_live_rounds() {
        let range = EpochRange::latest(100, 10);

        assert_eq!(range, EpochRange::new(89, 98));
        assert_eq!(range.len(), 10);
    }

    #[test]
    fn test_latest_clamps_to_first_epoch() {
        assert_eq!(EpochRange::latest(20, 50), EpochRange::new(1, 18));
    }

    #[test]
    fn test_young_contract_yields_nothing() {
        let range = EpochRange::latest(1, 5);

        assert!(range.is_empty());
        assert_eq!(range.epochs().count(), 0);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let range = EpochRange::new(10, 5);

        assert!(range.is_empty());
        assert_eq!(range.epochs().count(), 0);
    }

    #[test]
    fn test_full_width_range_len_saturates() {
        let range = EpochRange::new(0, u64::MAX);

        assert_eq!(range.len(), usize::MAX);
        assert!(!range.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_full_width_explicit_range() {
        let source = MockRounds::new(100);
        let range = resolve_range(RangeRequest::Explicit { start: 0, end: u64::MAX }, &source)
            .await
            .unwrap();

        assert_eq!(range, EpochRange::new(0, u64::MAX));
    }

    #[tokio::test]
    async fn test_resolve_latest_uses_current_epoch() {
        let source = MockRounds::new(100);
        let range = resolve_range(RangeRequest::Latest(10), &source).await.unwrap();

        assert_eq!(range.epochs().collect::<Vec<_>>(), (89..=98).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_resolve_explicit_is_verbatim() {
        let source = MockRounds::new(100);
        let range = resolve_range(RangeRequest::Explicit { start: 500, end: 400 }, &source)
            .await
            .unwrap();

        assert_eq!(range, EpochRange::new(500, 400));
    }
}
