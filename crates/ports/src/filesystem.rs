// crates/ports/src/filesystem.rs
use std::path::Path;

use ordstats_shared_kernel::Result;

/// Port for reading one raw export as text.
///
/// A path that does not exist must fail with
/// `InfrastructureError::FileNotFound`.
pub trait DatasetSource: Send + Sync {
    fn read_text(&self, path: &Path) -> Result<String>;
}
