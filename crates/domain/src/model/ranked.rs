use ordstats_shared_kernel::{AggregateStat, RankedStat, Ranking};
use serde::Serialize;

/// Statistics ordered by transaction count, each carrying its 1-based ranking.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RankedStatSet {
    entries: Vec<RankedStat>,
}

impl RankedStatSet {
    /// Rank `stats` by transaction count, highest first.
    ///
    /// The sort is stable: equal counts keep the order in which they were
    /// supplied. Rankings are assigned from the final position.
    pub fn rank(mut stats: Vec<AggregateStat>) -> Self {
        stats.sort_by(|a, b| b.transaction_count.cmp(&a.transaction_count));
        let entries = stats
            .into_iter()
            .enumerate()
            .map(|(index, stat)| RankedStat::new(Ranking::from_index(index), stat))
            .collect();
        Self { entries }
    }

    /// Wrap entries whose rankings were assigned elsewhere (e.g. read back from
    /// a statistics file). Order and rankings are kept as given.
    pub fn from_entries(entries: Vec<RankedStat>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedStat] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedStat> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose transaction name equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&RankedStat> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(RankedStat::name)
    }
}

impl<'a> IntoIterator for &'a RankedStatSet {
    type Item = &'a RankedStat;
    type IntoIter = std::slice::Iter<'a, RankedStat>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
