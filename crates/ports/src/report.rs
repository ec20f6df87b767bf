// crates/ports/src/report.rs
use std::path::Path;

use ordstats_domain::{ComparisonTable, MergedDataset, RankedStatSet, options::OutputFormat};
use ordstats_shared_kernel::Result;

/// Port for persisting the artifacts of a run.
pub trait ReportSink: Send + Sync {
    fn write_merged(&self, path: &Path, dataset: &MergedDataset) -> Result<()>;
    fn write_statistics(&self, path: &Path, stats: &RankedStatSet, format: OutputFormat) -> Result<()>;
    fn write_comparison(&self, path: &Path, table: &ComparisonTable) -> Result<()>;
    /// Removes an artifact written earlier in a run that did not complete.
    /// A missing file is not an error.
    fn discard(&self, path: &Path) -> Result<()>;
}
