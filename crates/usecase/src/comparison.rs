use std::path::PathBuf;

use ordstats_domain::{RankedStatSet, compare, config::CompareConfig};
use ordstats_ports::{progress::ProgressSink, report::ReportSink, statistics::StatisticsSource};
use ordstats_shared_kernel::{DomainError, ErrorContext, Result};
use tracing::info;

use crate::dto::CompareOutcome;

/// Read ranked statistics of several runs and write them side by side.
pub struct CompareStatistics<'a> {
    source: &'a dyn StatisticsSource,
    sink: &'a dyn ReportSink,
    progress: &'a dyn ProgressSink,
}

impl<'a> CompareStatistics<'a> {
    pub fn new(source: &'a dyn StatisticsSource, sink: &'a dyn ReportSink, progress: &'a dyn ProgressSink) -> Self {
        Self { source, sink, progress }
    }

    pub fn run(&self, config: &CompareConfig) -> Result<CompareOutcome> {
        // Checked before any file is opened.
        if config.inputs.len() < 2 {
            return Err(DomainError::InsufficientInput { provided: config.inputs.len() }.into());
        }

        let sets = self.load_all(&config.inputs)?;
        let table = compare(&sets, &config.labels)?;

        for _ in &table.rows {
            self.progress.on_tick();
        }
        self.sink
            .write_comparison(&config.output, &table)
            .with_context(|| format!("writing comparison {}", config.output.display()))?;
        self.progress.on_complete();

        info!(output = %config.output.display(), rows = table.len(), sets = sets.len(), "statistics compared");

        Ok(CompareOutcome { files_read: sets.len(), output: config.output.clone(), table })
    }

    #[cfg(not(feature = "parallel"))]
    fn load_all(&self, inputs: &[PathBuf]) -> Result<Vec<RankedStatSet>> {
        inputs
            .iter()
            .map(|path| {
                let set = self.load_one(path)?;
                self.progress.on_file(path);
                Ok(set)
            })
            .collect()
    }

    /// Files are read concurrently; results and the first error keep input
    /// order.
    #[cfg(feature = "parallel")]
    fn load_all(&self, inputs: &[PathBuf]) -> Result<Vec<RankedStatSet>> {
        use rayon::prelude::*;

        let loaded: Vec<Result<RankedStatSet>> = inputs.par_iter().map(|path| self.load_one(path)).collect();
        let mut sets = Vec::with_capacity(loaded.len());
        for (path, set) in inputs.iter().zip(loaded) {
            sets.push(set?);
            self.progress.on_file(path);
        }
        Ok(sets)
    }

    fn load_one(&self, path: &std::path::Path) -> Result<RankedStatSet> {
        self.source.load(path).map(RankedStatSet::from_entries)
    }
}
