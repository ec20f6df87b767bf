use ordstats_domain::RankedStatSet;
use ordstats_shared_kernel::InfraResult;

/// Ranked statistics as a pretty-printed JSON array.
pub fn encode_statistics_json(stats: &RankedStatSet) -> InfraResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(stats)?;
    bytes.push(b'\n');
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use ordstats_shared_kernel::{AggregateStat, TransactionCount};
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_array_in_ranked_order() {
        let stats = RankedStatSet::rank(vec![
            AggregateStat::new("Logout", 3.0, TransactionCount::new(1), 0.5),
            AggregateStat::new("Login", 5.0, TransactionCount::new(2), 1.5),
        ]);
        let value: Value = serde_json::from_slice(&encode_statistics_json(&stats).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["ranking"], 1);
        assert_eq!(entries[0]["transaction_name"], "Login");
        assert_eq!(entries[0]["avg_ord_threshold"], 5.0);
        assert_eq!(entries[1]["transaction_count"], 1);
    }
}
