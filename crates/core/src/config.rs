// crates/core/src/config.rs
use std::path::{Path, PathBuf};

use ordstats_domain::{
    config::{CompareConfig, StatsConfig},
    options::{MalformedRowPolicy, OutputFormat},
};
use ordstats_infra::expand_inputs;
use ordstats_shared_kernel::{PresentationError, Result};

use crate::presentation::cli::{CompareArgs, StatsArgs};

/// Turns parsed CLI arguments into validated run configurations.
pub struct ConfigBuilder;

impl ConfigBuilder {
    /// # Errors
    /// Fails when an input pattern is invalid or an output would overwrite an
    /// input.
    pub fn stats(args: StatsArgs) -> Result<StatsConfig> {
        let StatsArgs { output, format, skip_malformed, no_progress, inputs } = args;

        let output = validate_output(output.as_deref())?;
        let inputs = expand_inputs(inputs.as_slice())?;
        let policy = if skip_malformed { MalformedRowPolicy::Skip } else { MalformedRowPolicy::Abort };
        let config = StatsConfig::new(inputs, output, OutputFormat::from(format), policy, !no_progress);

        ensure_not_an_input(&config.inputs, &config.merged_output)?;
        ensure_not_an_input(&config.inputs, &config.stats_output)?;
        Ok(config)
    }

    /// The number of inputs is not checked here; the comparison itself
    /// reports too few sets.
    pub fn compare(args: CompareArgs) -> Result<CompareConfig> {
        let CompareArgs { output, no_progress, inputs } = args;

        let output = validate_output(output.as_deref())?;
        let inputs = expand_inputs(inputs.as_slice())?;
        let config = CompareConfig::new(inputs, output, !no_progress);

        ensure_not_an_input(&config.inputs, &config.output)?;
        Ok(config)
    }
}

fn validate_output(output: Option<&Path>) -> Result<Option<&Path>> {
    let Some(path) = output else {
        return Ok(None);
    };
    if path.as_os_str().is_empty() {
        return Err(invalid("--output", path, "must not be empty"));
    }
    if path.is_dir() {
        return Err(invalid("--output", path, "is a directory"));
    }
    Ok(Some(path))
}

/// Paths are compared lexically after anchoring them at the working
/// directory, so `./a.csv` and `a.csv` collide. Symlinks are not followed.
fn ensure_not_an_input(inputs: &[PathBuf], output: &Path) -> Result<()> {
    let target = normalize(output);
    if inputs.iter().any(|input| normalize(input) == target) {
        return Err(invalid("--output", output, "would overwrite an input file"));
    }
    Ok(())
}

fn normalize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.components().collect())
}

fn invalid(flag: &str, value: &Path, reason: &str) -> ordstats_shared_kernel::OrdStatsError {
    PresentationError::InvalidValue {
        flag: flag.to_string(),
        value: value.display().to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Effective configuration rendered for the debug log.
pub fn describe<T: serde::Serialize>(config: &T) -> Result<String> {
    serde_json::to_string(config)
        .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::presentation::cli::{Args, Command};

    fn stats_args(argv: &[&str]) -> StatsArgs {
        let mut full = vec!["ordstats", "stats"];
        full.extend_from_slice(argv);
        match Args::parse_from(full).command {
            Command::Stats(args) => args,
            Command::Compare(_) => unreachable!(),
        }
    }

    fn compare_args(argv: &[&str]) -> CompareArgs {
        let mut full = vec!["ordstats", "compare"];
        full.extend_from_slice(argv);
        match Args::parse_from(full).command {
            Command::Compare(args) => args,
            Command::Stats(_) => unreachable!(),
        }
    }

    #[test]
    fn stats_config_from_flags() {
        let config = ConfigBuilder::stats(stats_args(&[
            "-o",
            "week1",
            "--format",
            "json",
            "--skip-malformed",
            "--no-progress",
            "a.csv",
        ]))
        .unwrap();

        assert_eq!(config.inputs, vec![PathBuf::from("a.csv")]);
        assert_eq!(config.merged_output, PathBuf::from("week1.csv"));
        assert_eq!(config.stats_output, PathBuf::from("week1_ORDStatistics.json"));
        assert_eq!(config.malformed_rows, MalformedRowPolicy::Skip);
        assert!(!config.progress);
    }

    #[test]
    fn stats_defaults_to_out_default() {
        let config = ConfigBuilder::stats(stats_args(&["a.csv"])).unwrap();
        assert_eq!(config.merged_output, PathBuf::from("out_default.csv"));
        assert_eq!(config.malformed_rows, MalformedRowPolicy::Abort);
        assert!(config.progress);
    }

    #[test]
    fn output_may_not_overwrite_input() {
        let err = ConfigBuilder::stats(stats_args(&["-o", "a.csv", "a.csv"])).unwrap_err();
        assert!(err.to_string().contains("would overwrite an input file"));
    }

    #[test]
    fn output_spelled_differently_still_collides_with_input() {
        let err = ConfigBuilder::stats(stats_args(&["-o", "./a.csv", "a.csv"])).unwrap_err();
        assert!(err.to_string().contains("would overwrite an input file"));
    }

    #[test]
    fn output_may_not_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_string_lossy().into_owned();
        let err = ConfigBuilder::compare(compare_args(&["-o", &out, "a.csv", "b.csv"])).unwrap_err();
        assert!(matches!(
            err,
            ordstats_shared_kernel::OrdStatsError::Presentation(PresentationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn compare_accepts_a_single_input() {
        let config = ConfigBuilder::compare(compare_args(&["jan.csv"])).unwrap();
        assert_eq!(config.labels, vec!["jan"]);
    }

    #[test]
    fn describe_renders_json() {
        let config = ConfigBuilder::compare(compare_args(&["jan.csv", "feb.csv"])).unwrap();
        let text = describe(&config).unwrap();
        assert!(text.contains("\"labels\":[\"jan\",\"feb\"]"), "{text}");
    }
}
