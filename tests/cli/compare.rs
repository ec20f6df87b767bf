use predicates::prelude::*;

use crate::common::{Workspace, ordstats};

const HEADER: &str = "Ranking,TransactionName,ORDthreshold,TransactionCount,AvgTransactionResponse";

#[test]
fn compares_two_statistics_files() {
    let ws = Workspace::new();
    ws.write("jan.csv", &format!("{HEADER}\n1,Login,5.0,4,1.5\n2,Search,2.0,3,0.7\n3,Logout,3.0,1,0.5\n"));
    ws.write("feb.csv", &format!("{HEADER}\n1,Search,2.0,6,0.9\n2,Login,5.0,2,1.1\n3,Export,1.0,1,3.0\n"));

    ordstats(ws.path())
        .args(["compare", "--no-progress", "-o", "cmp", "jan.csv", "feb.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cmp.csv"));

    let text = ws.read("cmp.csv");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "jan,,,,,,feb,,,,");
    assert_eq!(lines[1], format!("{HEADER},,{HEADER}"));
    assert_eq!(lines[2], "1,Login,5.0,4,1.5,,2,Login,5.0,2,1.1");
    assert_eq!(lines[3], "2,Search,2.0,3,0.7,,1,Search,2.0,6,0.9");
    assert_eq!(lines[4], "3,Logout,3.0,1,0.5,,,,,,");
}

#[test]
fn single_file_is_insufficient() {
    let ws = Workspace::new();
    ws.write("jan.csv", &format!("{HEADER}\n1,Login,5.0,4,1.5\n"));

    ordstats(ws.path())
        .args(["compare", "--no-progress", "jan.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least 2"));

    assert!(!ws.exists("out_default.csv"));
}

#[test]
fn unreadable_statistics_file_fails() {
    let ws = Workspace::new();
    ws.write("jan.csv", &format!("{HEADER}\n1,Login,5.0,4,1.5\n"));
    ws.write("feb.csv", &format!("{HEADER}\n1,Login,five,4,1.5\n"));

    ordstats(ws.path())
        .args(["compare", "--no-progress", "jan.csv", "feb.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("feb.csv").and(predicate::str::contains("line 2")));

    assert!(!ws.exists("out_default.csv"));
}
