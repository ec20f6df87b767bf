// crates/domain/src/config.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::options::{MalformedRowPolicy, OutputFormat};

/// Output name used when none is given.
pub const DEFAULT_OUTPUT: &str = "out_default.csv";

/// Suffix every merged/comparison output carries.
pub const CSV_SUFFIX: &str = ".csv";

/// Appended to the merged file stem to name the statistics report.
pub const STATISTICS_SUFFIX: &str = "_ORDStatistics";

/// Settings for a merge-and-rank run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    pub inputs: Vec<PathBuf>,
    pub merged_output: PathBuf,
    pub stats_output: PathBuf,
    pub format: OutputFormat,
    pub malformed_rows: MalformedRowPolicy,
    pub progress: bool,
}

impl StatsConfig {
    /// Derive every output path from the requested merged output.
    pub fn new(
        inputs: Vec<PathBuf>,
        output: Option<&Path>,
        format: OutputFormat,
        malformed_rows: MalformedRowPolicy,
        progress: bool,
    ) -> Self {
        let merged_output = output_path(output);
        let stats_output = statistics_path(&merged_output, format);
        Self { inputs, merged_output, stats_output, format, malformed_rows, progress }
    }
}

/// Settings for an N-way comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    pub inputs: Vec<PathBuf>,
    pub labels: Vec<String>,
    pub output: PathBuf,
    pub progress: bool,
}

impl CompareConfig {
    pub fn new(inputs: Vec<PathBuf>, output: Option<&Path>, progress: bool) -> Self {
        let labels = inputs.iter().map(|p| dataset_label(p)).collect();
        Self { inputs, labels, output: output_path(output), progress }
    }
}

/// The requested output, or [`DEFAULT_OUTPUT`], always ending in `.csv`.
pub fn output_path(requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(path) => with_csv_suffix(path),
        None => PathBuf::from(DEFAULT_OUTPUT),
    }
}

pub fn with_csv_suffix(path: &Path) -> PathBuf {
    let text = path.as_os_str().to_string_lossy();
    if text.ends_with(CSV_SUFFIX) {
        path.to_path_buf()
    } else {
        PathBuf::from(format!("{text}{CSV_SUFFIX}"))
    }
}

/// `dir/name.csv` becomes `dir/name_ORDStatistics.<ext>`.
pub fn statistics_path(merged: &Path, format: OutputFormat) -> PathBuf {
    let text = merged.as_os_str().to_string_lossy();
    let stem = text.strip_suffix(CSV_SUFFIX).unwrap_or(&text);
    PathBuf::from(format!("{stem}{STATISTICS_SUFFIX}.{}", format.extension()))
}

/// Column-group label of a statistics file: its file name without `.csv`.
pub fn dataset_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    match name.strip_suffix(CSV_SUFFIX) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}
