//! In-memory tabular store of transaction records.
//!
//! Rows are kept in load order and indexed by transaction name so that the
//! per-name aggregate queries never scan unrelated rows. All lookups are exact,
//! case-sensitive string comparisons.

use csv::{ReaderBuilder, StringRecord};
use indexmap::{IndexMap, IndexSet};
use ordstats_shared_kernel::{DomainError, DomainResult, TransactionCount};
use tracing::warn;

use crate::{model::TransactionRecord, options::MalformedRowPolicy};

/// Quote character used by the E2E exports.
const QUOTE: u8 = b'|';

/// A row that was dropped under [`MalformedRowPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Result of an aggregate query over one transaction name.
///
/// The averages are `None` when no row matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionAggregate {
    pub count: TransactionCount,
    pub avg_ord_threshold: Option<f64>,
    pub avg_response_time: Option<f64>,
}

impl TransactionAggregate {
    pub const EMPTY: Self = Self {
        count: TransactionCount::zero(),
        avg_ord_threshold: None,
        avg_response_time: None,
    };
}

#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    records: Vec<TransactionRecord>,
    by_name: IndexMap<String, Vec<usize>>,
    skipped: Vec<SkippedRow>,
}

impl TransactionStore {
    /// Parse merged data lines into records.
    ///
    /// Blank lines carry no record and are ignored. Line numbers in errors are
    /// 1-based positions within `rows`.
    pub fn load<S: AsRef<str>>(rows: &[S], policy: MalformedRowPolicy) -> DomainResult<Self> {
        let mut store = Self::default();
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.trim().is_empty() {
                continue;
            }
            let line = index as u64 + 1;
            match parse_row(row) {
                Ok(record) => store.insert(record),
                Err(reason) => match policy {
                    MalformedRowPolicy::Abort => return Err(DomainError::MalformedRow { line, reason }),
                    MalformedRowPolicy::Skip => {
                        warn!(line, %reason, "skipping malformed row");
                        store.skipped.push(SkippedRow { line, reason });
                    }
                },
            }
        }
        Ok(store)
    }

    pub fn from_records(records: impl IntoIterator<Item = TransactionRecord>) -> Self {
        let mut store = Self::default();
        for record in records {
            store.insert(record);
        }
        store
    }

    fn insert(&mut self, record: TransactionRecord) {
        let index = self.records.len();
        self.by_name
            .entry(record.transaction_name.clone())
            .or_default()
            .push(index);
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct transaction names among rows with `status`, in the order the
    /// first such row of each name was loaded.
    pub fn distinct_transaction_names(&self, status: &str) -> IndexSet<&str> {
        self.records
            .iter()
            .filter(|record| record.has_status(status))
            .map(|record| record.transaction_name.as_str())
            .collect()
    }

    /// Count and means of the rows with the given name and status.
    pub fn aggregate_for(&self, name: &str, status: &str) -> TransactionAggregate {
        let Some(indices) = self.by_name.get(name) else {
            return TransactionAggregate::EMPTY;
        };

        let mut count = 0usize;
        let mut ord_sum = 0f64;
        let mut response_sum = 0f64;
        for record in indices.iter().map(|&i| &self.records[i]) {
            if record.has_status(status) {
                count += 1;
                ord_sum += record.ord_threshold as f64;
                response_sum += record.response_time;
            }
        }

        if count == 0 {
            return TransactionAggregate::EMPTY;
        }
        TransactionAggregate {
            count: TransactionCount::new(count),
            avg_ord_threshold: Some(ord_sum / count as f64),
            avg_response_time: Some(response_sum / count as f64),
        }
    }
}

fn parse_row(row: &str) -> Result<TransactionRecord, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote(QUOTE)
        .from_reader(row.as_bytes());
    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => TransactionRecord::try_from(&record).map_err(|err| err.to_string()),
        Ok(false) => Err("row contains no fields".to_string()),
        Err(err) => Err(err.to_string()),
    }
}
