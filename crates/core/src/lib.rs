// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod presentation;

pub use bootstrap::{run, run_with_args};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
