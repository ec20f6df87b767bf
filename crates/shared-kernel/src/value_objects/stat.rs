// crates/shared-kernel/src/value_objects/stat.rs
use serde::{Deserialize, Serialize};

use super::counts::{Ranking, TransactionCount};

/// Count and averages for one transaction name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStat {
    pub transaction_name: String,
    pub avg_ord_threshold: f64,
    pub transaction_count: TransactionCount,
    pub avg_response_time: f64,
}

impl AggregateStat {
    pub fn new(
        transaction_name: impl Into<String>,
        avg_ord_threshold: f64,
        transaction_count: TransactionCount,
        avg_response_time: f64,
    ) -> Self {
        Self {
            transaction_name: transaction_name.into(),
            avg_ord_threshold,
            transaction_count,
            avg_response_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.transaction_name
    }
}

/// An [`AggregateStat`] together with its position in a ranked set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStat {
    pub ranking: Ranking,
    #[serde(flatten)]
    pub stat: AggregateStat,
}

impl RankedStat {
    pub fn new(ranking: Ranking, stat: AggregateStat) -> Self {
        Self { ranking, stat }
    }

    pub fn name(&self) -> &str {
        self.stat.name()
    }

    pub fn count(&self) -> TransactionCount {
        self.stat.transaction_count
    }
}

/// Render a real in shortest round-trip form, always keeping a fractional
/// digit (`5` becomes `5.0`). Very small or large magnitudes use exponent
/// notation without sign or padding (`1e-7`, `1e16`).
pub fn format_real(value: f64) -> String {
    format!("{value:?}")
}
