// crates/shared-kernel/tests/serde_roundtrip.rs
use ordstats_shared_kernel::{AggregateStat, RankedStat, Ranking, TransactionCount};

#[test]
fn json_roundtrip() {
    let original = RankedStat::new(
        Ranking::new(2),
        AggregateStat::new("Search, advanced", 3.0, TransactionCount::new(9), 0.25),
    );
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: RankedStat = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
