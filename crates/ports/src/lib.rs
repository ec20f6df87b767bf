//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Reading raw E2E exports
//! - [`statistics`]: Reading previously written ranked statistics
//! - [`report`]: Writing merged data, statistics, and comparisons
//! - [`progress`]: Progress reporting for long-running operations
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod progress;
pub mod report;
pub mod statistics;
