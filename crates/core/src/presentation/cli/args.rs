// crates/core/src/presentation/cli/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};

use super::value_enum::FormatArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ordstats",
    version = crate::VERSION,
    about = "E2E トランザクションログの結合と ORD 統計の集計ツール"
)]
pub struct Args {
    /// 詳細ログ (debug) を出力
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// 警告とエラーのみ出力
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// CSV を結合し、トランザクション別の ORD 統計を作成
    Stats(StatsArgs),
    /// 複数の ORD 統計ファイルを横並びで比較
    Compare(CompareArgs),
}

#[derive(ClapArgs, Debug)]
pub struct StatsArgs {
    /// 結合ファイルの出力先（.csv は自動付与, 既定: out_default.csv）
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// 統計ファイルのフォーマット
    #[arg(long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// 不正な行をスキップして続行（既定はエラー終了）
    #[arg(long)]
    pub skip_malformed: bool,

    /// 進捗表示を行わない
    #[arg(long)]
    pub no_progress: bool,

    /// 入力 CSV（ファイル名部分にワイルドカード可）
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub inputs: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct CompareArgs {
    /// 比較結果の出力先（.csv は自動付与, 既定: out_default.csv）
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// 進捗表示を行わない
    #[arg(long)]
    pub no_progress: bool,

    /// 比較する ORD 統計ファイル（2 つ以上）
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub inputs: Vec<String>,
}

impl Args {
    /// Default log directive derived from `-v` / `-q`.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
