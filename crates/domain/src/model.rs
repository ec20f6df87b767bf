mod comparison;
mod ranked;
mod record;

pub use comparison::{ComparisonRow, ComparisonTable};
pub use ordstats_shared_kernel::{AggregateStat, RankedStat, Ranking, TransactionCount};
pub use ranked::RankedStatSet;
pub use record::{COLUMN_COUNT, METRIC_PAIRS, Metric, RecordError, TransactionRecord};
