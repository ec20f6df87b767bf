use ordstats_shared_kernel::AggregateStat;
use tracing::debug;

use crate::{model::RankedStatSet, store::TransactionStore};

/// Status of a transaction that completed normally.
pub const GOOD_STATUS: &str = "ARM_GOOD";

/// Transactions whose name starts with this prefix are never aggregated.
pub const EXCLUDED_PREFIX: &str = "Workflow";

/// Builds the ranked statistic set of a store.
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(store: &TransactionStore) -> RankedStatSet {
        Self::aggregate_with(store, |_| {})
    }

    /// Same as [`Aggregator::aggregate`], calling `on_stat` after each
    /// transaction name has been aggregated.
    pub fn aggregate_with<F>(store: &TransactionStore, mut on_stat: F) -> RankedStatSet
    where
        F: FnMut(&AggregateStat),
    {
        let names = store.distinct_transaction_names(GOOD_STATUS);
        let mut stats = Vec::with_capacity(names.len());

        for name in names.into_iter().filter(|name| !name.starts_with(EXCLUDED_PREFIX)) {
            let aggregate = store.aggregate_for(name, GOOD_STATUS);
            // Names come from ARM_GOOD rows, so both averages are present.
            let (Some(avg_ord), Some(avg_response)) =
                (aggregate.avg_ord_threshold, aggregate.avg_response_time)
            else {
                continue;
            };
            let stat = AggregateStat::new(name, avg_ord, aggregate.count, avg_response);
            on_stat(&stat);
            stats.push(stat);
        }

        let ranked = RankedStatSet::rank(stats);
        debug!(transactions = ranked.len(), rows = store.len(), "aggregated store");
        ranked
    }
}
