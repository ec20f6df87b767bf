use std::path::PathBuf;

use ordstats_domain::{ComparisonTable, RankedStatSet};

/// What a merge-and-rank run produced.
#[derive(Debug, Clone)]
pub struct StatsOutcome {
    pub files_merged: usize,
    pub rows_merged: usize,
    pub rows_loaded: usize,
    pub rows_skipped: usize,
    pub merged_output: PathBuf,
    pub stats_output: PathBuf,
    pub statistics: RankedStatSet,
}

/// What a comparison run produced.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    pub files_read: usize,
    pub output: PathBuf,
    pub table: ComparisonTable,
}
