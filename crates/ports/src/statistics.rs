// crates/ports/src/statistics.rs
use std::path::Path;

use ordstats_shared_kernel::{RankedStat, Result};

/// Port for loading a ranked statistics report written by an earlier run.
/// Entries are returned in file order with the rankings found in the file.
pub trait StatisticsSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<Vec<RankedStat>>;
}
