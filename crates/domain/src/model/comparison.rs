use ordstats_shared_kernel::RankedStat;
use serde::Serialize;

/// One transaction name with the matching statistic from every compared set.
///
/// `columns[i]` is `None` when set `i` has no entry for the name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub transaction_name: String,
    pub columns: Vec<Option<RankedStat>>,
}

/// Side-by-side statistics, one labelled column group per input set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub labels: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn group_count(&self) -> usize {
        self.labels.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
