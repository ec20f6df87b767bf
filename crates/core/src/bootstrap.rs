use anyhow::{Context, Result};
use clap::Parser;
use ordstats_infra::{ConsoleProgress, CsvStatisticsSource, FileReportSink, FsDatasetSource, NoProgress};
use ordstats_ports::progress::ProgressSink;
use ordstats_usecase::{CompareOutcome, CompareStatistics, GenerateStatistics, StatsOutcome};
use tracing::debug;

use crate::{
    config::{ConfigBuilder, describe},
    logging,
    presentation::cli::{Args, Command},
};

pub fn run() -> Result<()> {
    run_with_args(Args::parse())
}

pub fn run_with_args(args: Args) -> Result<()> {
    logging::init(args.log_level());

    match args.command {
        Command::Stats(stats) => {
            let config = ConfigBuilder::stats(stats)?;
            debug!(config = %describe(&config)?, "stats configuration");

            let progress = progress_sink(config.progress);
            let source = FsDatasetSource;
            let sink = FileReportSink;
            let outcome = GenerateStatistics::new(&source, &sink, progress.as_ref())
                .run(&config)
                .context("statistics run failed")?;
            print_stats_summary(&outcome);
        }
        Command::Compare(compare) => {
            let config = ConfigBuilder::compare(compare)?;
            debug!(config = %describe(&config)?, "compare configuration");

            let progress = progress_sink(config.progress);
            let source = CsvStatisticsSource;
            let sink = FileReportSink;
            let outcome = CompareStatistics::new(&source, &sink, progress.as_ref())
                .run(&config)
                .context("comparison run failed")?;
            print_compare_summary(&outcome);
        }
    }
    Ok(())
}

fn progress_sink(enabled: bool) -> Box<dyn ProgressSink> {
    if enabled { Box::new(ConsoleProgress::new()) } else { Box::new(NoProgress) }
}

fn print_stats_summary(outcome: &StatsOutcome) {
    println!("files merged:         {}", outcome.files_merged);
    println!("merged file:          {}", outcome.merged_output.display());
    println!("statistics file:      {}", outcome.stats_output.display());
    println!("rows loaded:          {}", outcome.rows_loaded);
    if outcome.rows_skipped > 0 {
        println!("rows skipped:         {}", outcome.rows_skipped);
    }
    println!("transactions ranked:  {}", outcome.statistics.len());
}

fn print_compare_summary(outcome: &CompareOutcome) {
    println!("files read:           {}", outcome.files_read);
    println!("comparison file:      {}", outcome.output.display());
    println!("transactions compared: {}", outcome.table.len());
}
