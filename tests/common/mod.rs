#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

pub const BANNER: &str = "**********  FOR OFFICIAL USE ONLY  **********";

pub fn ordstats(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ordstats"));
    cmd.current_dir(dir).env_remove("RUST_LOG").arg("--quiet");
    cmd
}

/// One 23-column export row.
pub fn row(name: &str, ord: i64, resp: f64, status: &str) -> String {
    let metrics = vec!["Metric,0"; 7].join(",");
    format!("alice,{name},{ord},WS01,10.0.0.1,09:00:00,09:00:01,{resp},{status},{metrics}")
}

/// Banner, header, then `rows`, CRLF terminated as exported.
pub fn export(rows: &[String]) -> String {
    let mut text = format!("{BANNER}\r\nUserName,TransactionName,ORD,WorkStationName\r\n");
    for r in rows {
        text.push_str(r);
        text.push_str("\r\n");
    }
    text
}

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create tempdir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("output exists")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}
