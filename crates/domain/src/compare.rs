//! N-way alignment of ranked statistic sets.
//!
//! Rows follow the order of the first set. A name that only appears in later
//! sets has no row, so those entries are dropped from the comparison.

use std::collections::HashMap;

use ordstats_shared_kernel::{DomainError, DomainResult, RankedStat};
use tracing::debug;

use crate::model::{ComparisonRow, ComparisonTable, RankedStatSet};

/// Align `sets` on the transaction order of `sets[0]`.
///
/// `labels` must run parallel to `sets`, and at least two sets are required.
pub fn compare(sets: &[RankedStatSet], labels: &[String]) -> DomainResult<ComparisonTable> {
    if sets.len() < 2 {
        return Err(DomainError::InsufficientInput { provided: sets.len() });
    }
    if labels.len() != sets.len() {
        return Err(DomainError::LabelMismatch { sets: sets.len(), labels: labels.len() });
    }

    let lookups: Vec<HashMap<&str, &RankedStat>> = sets.iter().map(index_by_name).collect();

    let rows = sets[0]
        .names()
        .map(|name| ComparisonRow {
            transaction_name: name.to_string(),
            columns: lookups.iter().map(|lookup| lookup.get(name).map(|&s| s.clone())).collect(),
        })
        .collect();

    for (label, lookup) in labels.iter().zip(&lookups).skip(1) {
        let dropped = lookup.keys().filter(|name| sets[0].find(name).is_none()).count();
        if dropped > 0 {
            debug!(set = %label, dropped, "names absent from the first set are not compared");
        }
    }

    Ok(ComparisonTable { labels: labels.to_vec(), rows })
}

/// First entry wins when a name repeats.
fn index_by_name(set: &RankedStatSet) -> HashMap<&str, &RankedStat> {
    let mut lookup = HashMap::with_capacity(set.len());
    for entry in set {
        lookup.entry(entry.name()).or_insert(entry);
    }
    lookup
}
