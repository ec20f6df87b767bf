//! Encoding and persistence of run artifacts.

mod delimited;
mod json;
mod reader;

use std::path::Path;

use ordstats_domain::{ComparisonTable, MergedDataset, RankedStatSet, options::OutputFormat};
use ordstats_ports::report::ReportSink;
use ordstats_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

pub use delimited::{COMPARISON_SPACER, STATISTICS_HEADER, encode_comparison, encode_statistics};
pub use json::encode_statistics_json;
pub use reader::{CsvStatisticsSource, parse_statistics};

use crate::persistence::FileWriter;

/// Writes every artifact atomically to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReportSink;

impl ReportSink for FileReportSink {
    fn write_merged(&self, path: &Path, dataset: &MergedDataset) -> Result<()> {
        FileWriter::atomic_write(path, dataset.to_text().as_bytes())?;
        debug!(path = %path.display(), rows = dataset.len(), "wrote merged file");
        Ok(())
    }

    fn write_statistics(&self, path: &Path, stats: &RankedStatSet, format: OutputFormat) -> Result<()> {
        let bytes = match format {
            OutputFormat::Csv => encode_statistics(stats)?,
            OutputFormat::Json => encode_statistics_json(stats)?,
        };
        FileWriter::atomic_write(path, &bytes)?;
        debug!(path = %path.display(), entries = stats.len(), "wrote statistics");
        Ok(())
    }

    fn write_comparison(&self, path: &Path, table: &ComparisonTable) -> Result<()> {
        FileWriter::atomic_write(path, &encode_comparison(table)?)?;
        debug!(path = %path.display(), rows = table.len(), "wrote comparison");
        Ok(())
    }

    fn discard(&self, path: &Path) -> Result<()> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                debug!(path = %path.display(), "discarded partial output");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InfrastructureError::FileWrite { path: path.to_path_buf(), source: err }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use ordstats_shared_kernel::{AggregateStat, TransactionCount};

    use super::*;

    #[test]
    fn statistics_written_as_csv_read_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run_ORDStatistics.csv");
        let stats = RankedStatSet::rank(vec![
            AggregateStat::new("Login", 5.0, TransactionCount::new(2), 1.5),
            AggregateStat::new("Search, \"quick\"", 3.5, TransactionCount::new(4), 0.25),
        ]);

        FileReportSink.write_statistics(&path, &stats, OutputFormat::Csv).unwrap();
        let entries = CsvStatisticsSource.load_entries(&path).unwrap();

        assert_eq!(RankedStatSet::from_entries(entries), stats);
    }

    #[test]
    fn padded_names_survive_round_trip_and_stay_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let jan = dir.path().join("jan.csv");
        let feb = dir.path().join("feb.csv");
        FileReportSink
            .write_statistics(
                &jan,
                &RankedStatSet::rank(vec![AggregateStat::new(" Login ", 5.0, TransactionCount::new(2), 1.5)]),
                OutputFormat::Csv,
            )
            .unwrap();
        FileReportSink
            .write_statistics(
                &feb,
                &RankedStatSet::rank(vec![AggregateStat::new("Login", 5.0, TransactionCount::new(3), 1.0)]),
                OutputFormat::Csv,
            )
            .unwrap();

        let sets: Vec<_> = [&jan, &feb]
            .into_iter()
            .map(|path| RankedStatSet::from_entries(CsvStatisticsSource.load_entries(path).unwrap()))
            .collect();
        assert_eq!(sets[0].entries()[0].name(), " Login ");

        let table = ordstats_domain::compare(&sets, &["jan".to_string(), "feb".to_string()]).unwrap();
        assert_eq!(table.rows[0].transaction_name, " Login ");
        assert!(table.rows[0].columns[1].is_none());
    }

    #[test]
    fn discard_removes_file_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");
        std::fs::write(&path, "row\n").unwrap();

        FileReportSink.discard(&path).unwrap();
        assert!(!path.exists());
        FileReportSink.discard(&path).unwrap();
    }

    #[test]
    fn merged_file_is_plain_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.csv");
        let mut dataset = MergedDataset::new();
        dataset.append_file("header\nrow,|quoted, field|\r\n");

        FileReportSink.write_merged(&path, &dataset).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"row,|quoted, field|\r\n");
    }
}
