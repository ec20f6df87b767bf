use csv::StringRecord;
use thiserror::Error;

/// Number of positional columns in an E2E export row.
pub const COLUMN_COUNT: usize = 23;

/// Number of trailing `(metric, value)` column pairs.
pub const METRIC_PAIRS: usize = 7;

/// Why a single row could not be turned into a [`TransactionRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {COLUMN_COUNT} fields, found {found}")]
    FieldCount { found: usize },

    #[error("field '{field}' is not numeric: '{value}'")]
    NotNumeric { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metric {
    pub name: String,
    pub value: String,
}

/// One observed transaction instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub user_name: String,
    pub transaction_name: String,
    pub ord_threshold: i64,
    pub workstation_name: String,
    pub workstation_ip: String,
    pub start_time: String,
    pub end_time: String,
    pub response_time: f64,
    pub status: String,
    pub metrics: [Metric; METRIC_PAIRS],
}

impl TransactionRecord {
    /// Build a record from the 23 positional fields of a row.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().collect();
        if fields.len() != COLUMN_COUNT {
            return Err(RecordError::FieldCount { found: fields.len() });
        }

        let ord_threshold = parse_number::<i64>("ORD", fields[2])?;
        let response_time = parse_real("TxResponseTime", fields[7])?;

        let mut metrics: [Metric; METRIC_PAIRS] = Default::default();
        for (slot, pair) in metrics.iter_mut().zip(fields[9..].chunks_exact(2)) {
            *slot = Metric { name: pair[0].to_string(), value: pair[1].to_string() };
        }

        Ok(Self {
            user_name: fields[0].to_string(),
            transaction_name: fields[1].to_string(),
            ord_threshold,
            workstation_name: fields[3].to_string(),
            workstation_ip: fields[4].to_string(),
            start_time: fields[5].to_string(),
            end_time: fields[6].to_string(),
            response_time,
            status: fields[8].to_string(),
            metrics,
        })
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status == status
    }
}

impl TryFrom<&StringRecord> for TransactionRecord {
    type Error = RecordError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        Self::from_fields(record.iter())
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, RecordError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| RecordError::NotNumeric { field, value: raw.to_string() })
}

/// `NaN` and infinities parse as `f64` but are not measurements.
fn parse_real(field: &'static str, raw: &str) -> Result<f64, RecordError> {
    let value = parse_number::<f64>(field, raw)?;
    if !value.is_finite() {
        return Err(RecordError::NotNumeric { field, value: raw.to_string() });
    }
    Ok(value)
}
