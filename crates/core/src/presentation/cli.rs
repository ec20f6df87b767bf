mod args;
mod value_enum;

pub use args::{Args, Command, CompareArgs, StatsArgs};
pub use value_enum::FormatArg;
