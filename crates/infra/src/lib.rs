// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod progress;
pub mod report;

pub use filesystem::{FsDatasetSource, expand_inputs};
pub use progress::{ConsoleProgress, NoProgress};
pub use report::{CsvStatisticsSource, FileReportSink};
