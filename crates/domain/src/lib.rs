#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod compare;
pub mod config;
pub mod merge;
pub mod model;
pub mod options;
pub mod store;

pub use analytics::Aggregator;
pub use compare::compare;
pub use merge::MergedDataset;
pub use model::{ComparisonRow, ComparisonTable, RankedStatSet, TransactionRecord};
pub use store::TransactionStore;
