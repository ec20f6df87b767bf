use predicates::prelude::*;
use serde_json::Value;

use crate::common::{BANNER, Workspace, export, ordstats, row};

fn two_exports(ws: &Workspace) {
    ws.write(
        "testinput1.csv",
        &export(&[row("Login", 5, 1.2, "ARM_GOOD"), row("Logout", 3, 0.5, "ARM_GOOD")]),
    );
    ws.write(
        "testinput2.csv",
        &export(&[
            row("Login", 5, 1.8, "ARM_GOOD"),
            row("WorkflowStart", 1, 9.0, "ARM_GOOD"),
            row("Search", 2, 4.0, "ARM_FAILED"),
        ]),
    );
}

#[test]
fn merges_and_ranks_exports() {
    let ws = Workspace::new();
    two_exports(&ws);

    ordstats(ws.path())
        .args(["stats", "--no-progress", "-o", "week1", "testinput1.csv", "testinput2.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("week1_ORDStatistics.csv"))
        .stdout(predicate::str::is_match(r"files merged:\s+2\n").unwrap());

    let merged = ws.read("week1.csv");
    assert!(!merged.contains(BANNER));
    assert!(!merged.contains("UserName"));
    let names: Vec<_> = merged.lines().map(|l| l.split(',').nth(1).unwrap()).collect();
    assert_eq!(names, vec!["Login", "Logout", "Login", "WorkflowStart", "Search"]);

    assert_eq!(
        ws.read("week1_ORDStatistics.csv"),
        "Ranking,TransactionName,ORDthreshold,TransactionCount,AvgTransactionResponse\n\
         1,Login,5.0,2,1.5\n\
         2,Logout,3.0,1,0.5\n"
    );
}

#[test]
fn glob_inputs_expand_in_sorted_order() {
    let ws = Workspace::new();
    two_exports(&ws);

    ordstats(ws.path()).args(["stats", "--no-progress", "testinput*.csv"]).assert().success();

    let merged = ws.read("out_default.csv");
    assert!(merged.starts_with("alice,Login,5,"));
    assert_eq!(merged.lines().count(), 5);
    assert!(ws.exists("out_default_ORDStatistics.csv"));
}

#[test]
fn json_statistics() {
    let ws = Workspace::new();
    two_exports(&ws);

    ordstats(ws.path())
        .args(["stats", "--no-progress", "--format", "json", "-o", "run.csv", "testinput1.csv", "testinput2.csv"])
        .assert()
        .success();

    let stats: Value = serde_json::from_str(&ws.read("run_ORDStatistics.json")).unwrap();
    let entries = stats.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["transaction_name"], "Login");
    assert_eq!(entries[0]["transaction_count"], 2);
    assert_eq!(entries[1]["ranking"], 2);
}

#[test]
fn missing_input_fails_without_output() {
    let ws = Workspace::new();
    two_exports(&ws);

    ordstats(ws.path())
        .args(["stats", "--no-progress", "-o", "out", "testinput1.csv", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.csv"));

    assert!(!ws.exists("out.csv"));
    assert!(!ws.exists("out_ORDStatistics.csv"));
}

#[test]
fn malformed_row_aborts_unless_skipped() {
    let ws = Workspace::new();
    ws.write("bad.csv", &export(&[row("Login", 5, 1.0, "ARM_GOOD"), "only,three,fields".to_string()]));

    ordstats(ws.path())
        .args(["stats", "--no-progress", "bad.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed row"));
    assert!(!ws.exists("out_default.csv"));

    ordstats(ws.path())
        .args(["stats", "--no-progress", "--skip-malformed", "bad.csv"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"rows skipped:\s+1\n").unwrap());
    assert!(ws.read("out_default_ORDStatistics.csv").contains("1,Login,5.0,1,1.0"));
}
