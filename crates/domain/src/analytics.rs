mod aggregate;

pub use aggregate::{Aggregator, EXCLUDED_PREFIX, GOOD_STATUS};
