use clap::{ValueEnum, builder::PossibleValue};
use ordstats_domain::options::OutputFormat;

/// `--format` values accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatArg {
    #[default]
    Csv,
    Json,
}

impl ValueEnum for FormatArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[FormatArg::Csv, FormatArg::Json]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            FormatArg::Csv => PossibleValue::new("csv"),
            FormatArg::Json => PossibleValue::new("json"),
        };
        Some(value)
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
