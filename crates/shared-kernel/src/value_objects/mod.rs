// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod stat;

pub use counts::{Ranking, TransactionCount};
pub use stat::{AggregateStat, RankedStat, format_real};
