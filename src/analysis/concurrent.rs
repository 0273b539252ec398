use super::ListingAnalyzer;
use crate::errors::{ListingError, ListingResult};
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Checked sum of whole-dollar prices.
fn sum_prices(prices: &[i64]) -> ListingResult<i64> {
    prices
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(*p))
        .ok_or_else(|| ListingError::AggregationFailure("price sum overflowed".to_string()))
}

impl ListingAnalyzer {
    /// Sequential total of every price in the snapshot.
    pub fn total_price(&self) -> ListingResult<i64> {
        let prices: Vec<i64> = self.snapshot.iter().map(|l| l.price()).collect();
        sum_prices(&prices)
    }

    /// Sums residential and commercial prices on two spawned tasks, then adds them.
    ///
    /// Each task owns its own copy of one partition's prices. If either task
    /// fails the other is aborted and no partial total is returned. Dropping
    /// the returned future drops the join set, which aborts any task that has
    /// not finished; no partial total is observable either way.
    /// Must be polled inside a tokio runtime.
    pub async fn total_price_concurrent(&self) -> ListingResult<i64> {
        let (residential, commercial) = self.partition_by_variant();
        let partitions = [
            ("residential", residential.iter().map(|l| l.price()).collect::<Vec<i64>>()),
            ("commercial", commercial.iter().map(|l| l.price()).collect::<Vec<i64>>()),
        ];

        let mut tasks = JoinSet::new();
        for (name, prices) in partitions {
            tasks.spawn(async move { sum_prices(&prices).map(|sum| (name, sum)) });
        }

        let mut total: i64 = 0;
        while let Some(joined) = tasks.join_next().await {
            let (name, partial) = match joined {
                Ok(Ok(done)) => done,
                Ok(Err(e)) => {
                    warn!(error = %e, "partition sum failed");
                    tasks.abort_all();
                    return Err(e);
                }
                Err(e) => {
                    warn!(error = %e, "partition task did not complete");
                    tasks.abort_all();
                    return Err(ListingError::AggregationFailure(e.to_string()));
                }
            };
            debug!(partition = name, sum = partial, "partition summed");
            total = total.checked_add(partial).ok_or_else(|| {
                ListingError::AggregationFailure("combined total overflowed".to_string())
            })?;
        }

        Ok(total)
    }
}
