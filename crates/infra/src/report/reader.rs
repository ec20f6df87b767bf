use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use ordstats_ports::statistics::StatisticsSource;
use ordstats_shared_kernel::{
    AggregateStat, InfraResult, InfrastructureError, RankedStat, Ranking, Result, TransactionCount,
};

use super::STATISTICS_HEADER;
use crate::persistence::FileReader;

/// Reads ranked statistics files previously written in CSV format.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvStatisticsSource;

impl CsvStatisticsSource {
    pub fn load_entries(&self, path: &Path) -> InfraResult<Vec<RankedStat>> {
        let text = FileReader::read_text(path)?;
        parse_statistics(path, &text)
    }
}

impl StatisticsSource for CsvStatisticsSource {
    fn load(&self, path: &Path) -> Result<Vec<RankedStat>> {
        Ok(self.load_entries(path)?)
    }
}

/// Parse a statistics file body. The first line is a header and is skipped.
/// Whitespace around numeric fields is ignored; the transaction name is kept
/// verbatim.
pub fn parse_statistics(path: &Path, text: &str) -> InfraResult<Vec<RankedStat>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| malformed(path, err.position().map_or(0, |p| p.line()), err.to_string()))?;
        let line = record.position().map_or(0, |p| p.line());
        if record.iter().all(str::is_empty) {
            continue;
        }
        let entry = parse_entry(&record).map_err(|reason| malformed(path, line, reason))?;
        entries.push(entry);
    }

    tracing::debug!(path = %path.display(), entries = entries.len(), "parsed statistics file");
    Ok(entries)
}

fn parse_entry(record: &StringRecord) -> std::result::Result<RankedStat, String> {
    if record.len() != STATISTICS_HEADER.len() {
        return Err(format!("expected {} fields, found {}", STATISTICS_HEADER.len(), record.len()));
    }

    let ranking: usize = parse_field(record, 0)?;
    let name = &record[1];
    let ord = parse_real(record, 2)?;
    let count: usize = parse_field(record, 3)?;
    let response = parse_real(record, 4)?;

    Ok(RankedStat::new(
        Ranking::new(ranking),
        AggregateStat::new(name, ord, TransactionCount::new(count), response),
    ))
}

fn parse_field<T: std::str::FromStr>(record: &StringRecord, index: usize) -> std::result::Result<T, String> {
    let value = record[index].trim();
    value
        .parse()
        .map_err(|_| format!("{} is not a number: '{value}'", STATISTICS_HEADER[index]))
}

fn parse_real(record: &StringRecord, index: usize) -> std::result::Result<f64, String> {
    let value: f64 = parse_field(record, index)?;
    if !value.is_finite() {
        return Err(format!("{} is not a finite number: '{}'", STATISTICS_HEADER[index], record[index].trim()));
    }
    Ok(value)
}

fn malformed(path: &Path, line: u64, reason: String) -> InfrastructureError {
    InfrastructureError::MalformedStatRow { path: path.to_path_buf(), line, reason }
}
