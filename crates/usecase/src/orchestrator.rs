use std::path::PathBuf;

use ordstats_domain::{Aggregator, MergedDataset, TransactionStore, config::StatsConfig};
use ordstats_ports::{filesystem::DatasetSource, progress::ProgressSink, report::ReportSink};
use ordstats_shared_kernel::{ApplicationError, ErrorContext, Result};
use tracing::{debug, info, warn};

use crate::dto::StatsOutcome;

/// Transactions aggregated between two progress ticks.
const TICK_EVERY: usize = 5;

/// Merge exports, load them, and write the merged file and ranked statistics.
pub struct GenerateStatistics<'a> {
    source: &'a dyn DatasetSource,
    sink: &'a dyn ReportSink,
    progress: &'a dyn ProgressSink,
}

impl<'a> GenerateStatistics<'a> {
    pub fn new(source: &'a dyn DatasetSource, sink: &'a dyn ReportSink, progress: &'a dyn ProgressSink) -> Self {
        Self { source, sink, progress }
    }

    /// Nothing is written unless merging, loading, and ranking all succeed.
    /// The merged file is removed again when the statistics cannot be written.
    pub fn run(&self, config: &StatsConfig) -> Result<StatsOutcome> {
        let dataset = self.merge(&config.inputs)?;

        let store = TransactionStore::load(dataset.lines(), config.malformed_rows).map_err(|err| {
            ApplicationError::LoadFailed {
                reason: format!("{} merged rows", dataset.len()),
                source: Some(Box::new(err.into())),
            }
        })?;
        debug!(rows = store.len(), skipped = store.skipped().len(), "loaded transaction store");

        let mut aggregated = 0usize;
        let statistics = Aggregator::aggregate_with(&store, |_| {
            if aggregated % TICK_EVERY == 0 {
                self.progress.on_tick();
            }
            aggregated += 1;
        });

        self.sink
            .write_merged(&config.merged_output, &dataset)
            .with_context(|| format!("writing merged file {}", config.merged_output.display()))?;
        if let Err(err) = self.sink.write_statistics(&config.stats_output, &statistics, config.format) {
            if let Err(cleanup) = self.sink.discard(&config.merged_output) {
                warn!(path = %config.merged_output.display(), error = %cleanup, "could not remove merged file");
            }
            return Err(ApplicationError::ReportFailed {
                reason: format!("statistics {}", config.stats_output.display()),
                source: Some(Box::new(err)),
            }
            .into());
        }
        self.progress.on_complete();

        info!(
            merged = %config.merged_output.display(),
            statistics = %config.stats_output.display(),
            transactions = statistics.len(),
            "statistics generated"
        );

        Ok(StatsOutcome {
            files_merged: dataset.file_count(),
            rows_merged: dataset.len(),
            rows_loaded: store.len(),
            rows_skipped: store.skipped().len(),
            merged_output: config.merged_output.clone(),
            stats_output: config.stats_output.clone(),
            statistics,
        })
    }

    /// Files are read in argument order; the first unreadable one stops the
    /// merge.
    pub fn merge(&self, inputs: &[PathBuf]) -> Result<MergedDataset> {
        if inputs.is_empty() {
            return Err(ApplicationError::MergeFailed { reason: "no input files given".into(), source: None }.into());
        }

        let mut dataset = MergedDataset::new();
        for path in inputs {
            let text = self.source.read_text(path)?;
            let retained = dataset.append_file(&text);
            self.progress.on_file(path);
            info!(file = %path.display(), rows = retained, "merged");
        }
        Ok(dataset)
    }
}
