//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`orchestrator`]: Merge exports, load them, and rank their statistics
//! - [`comparison`]: Align statistics from several runs side by side
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod comparison;
pub mod dto;
pub mod orchestrator;

pub use comparison::CompareStatistics;
pub use dto::{CompareOutcome, StatsOutcome};
pub use orchestrator::GenerateStatistics;
