// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

/// Number of rows that contributed to an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionCount(usize);

impl TransactionCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Default for TransactionCount {
    fn default() -> Self {
        Self::zero()
    }
}

/// 1-based position of a statistic inside a ranked set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking(usize);

impl Ranking {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Ranking for the element at zero-based `index`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

mod display {
    use std::fmt;

    use super::{Ranking, TransactionCount};

    impl fmt::Display for TransactionCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }

    impl fmt::Display for Ranking {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
