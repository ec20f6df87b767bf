// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ordstats_ports::filesystem::DatasetSource;
use ordstats_shared_kernel::{InfraResult, InfrastructureError, Result};

use crate::persistence::FileReader;

/// Reads raw exports from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDatasetSource;

impl DatasetSource for FsDatasetSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        Ok(FileReader::read_text(path)?)
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

/// Expand wildcard arguments the way a shell would.
///
/// Each pattern expands to the sorted files of its directory that match it;
/// the directory part itself must be literal. Plain paths, existing files, and
/// patterns matching nothing are kept verbatim, so a missing input still
/// surfaces as `FileNotFound` when it is read.
pub fn expand_inputs<S: AsRef<str>>(patterns: &[S]) -> InfraResult<Vec<PathBuf>> {
    let mut inputs = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let literal = PathBuf::from(pattern);
        if !is_glob(pattern) || literal.is_file() {
            inputs.push(literal);
            continue;
        }

        let matches = expand_one(pattern)?;
        if matches.is_empty() {
            tracing::warn!(pattern, "pattern matched no files");
            inputs.push(literal);
        } else {
            inputs.extend(matches);
        }
    }
    Ok(inputs)
}

fn expand_one(pattern: &str) -> InfraResult<Vec<PathBuf>> {
    let path = Path::new(pattern);
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = parent
        && is_glob(&dir.to_string_lossy())
    {
        return Err(InfrastructureError::InvalidPattern {
            pattern: pattern.to_string(),
            details: "wildcards are only supported in the file name".to_string(),
        });
    }

    let matcher = compile(pattern)?;
    let dir = parent.unwrap_or(Path::new("."));
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(Vec::new()),
    };

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| match parent {
            Some(dir) => dir.join(entry.file_name()),
            None => PathBuf::from(entry.file_name()),
        })
        .filter(|candidate| matcher.is_match(candidate))
        .collect();
    matches.sort();
    Ok(matches)
}

fn compile(pattern: &str) -> InfraResult<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|err| InfrastructureError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
        })
}
