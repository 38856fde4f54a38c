use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sc-demo")]
#[command(version, about = "Walks a DynamicArray through its operations and prints every state", long_about = None)]
pub struct Cli {
    /// Scenario to run
    #[arg(value_enum, value_name = "SCENARIO", default_value_t = Scenario::All)]
    pub scenario: Scenario,

    /// Comma-separated integers to build an array from instead of running a scenario
    #[arg(long, value_name = "VALUES")]
    pub values: Option<String>,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// push_back, push_front, positional insert and range erase
    Basic,
    /// range and slice insertion, including a rejected past-the-end position
    Insert,
    /// assign over a list-built array
    Assign,
    /// reserve and shrink_to_fit
    Reserve,
    /// every scenario in turn
    All,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter for the requested verbosity; `RUST_LOG` wins when set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parses `"1, 2,3"` into integers. Empty input yields no values.
pub fn parse_values(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>()
                .with_context(|| format!("invalid integer {item:?} in --values"))
        })
        .collect()
}
