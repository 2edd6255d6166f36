pub mod commands;
pub mod logging;
pub mod output;

use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use workmate_core::{OutputFormat, ReportRegistry};

#[derive(Parser, Debug)]
#[command(
    name = "workmate",
    version,
    about = "Grouped aggregate reports over CSV files",
    long_about = "Workmate reads one or more CSV files, groups their rows by a key column, \
                  computes an aggregate per group and prints the ranked result as a table."
)]
pub struct Cli {
    /// Input CSV files, concatenated in the order given
    #[arg(long, value_name = "PATH", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Report to generate
    #[arg(long, value_name = "NAME")]
    pub report: String,

    /// Output format [default: from config, else table]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Field delimiter of the input files [default: from config, else ',']
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Configuration file (overrides WORKMATE_CONFIG and $WORKMATE_HOME/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Build the command, restricting `--report` to the registered names
pub fn command(registry: &ReportRegistry) -> clap::Command {
    let names: Vec<String> = registry.list_names().into_iter().map(String::from).collect();
    Cli::command().mut_arg("report", |arg| {
        arg.value_parser(PossibleValuesParser::new(names))
    })
}

/// Parse `args` against the registry's report names
pub fn try_parse_from<I, T>(registry: &ReportRegistry, args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command(registry).try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// Parse the process arguments, exiting with a usage error on failure
pub fn parse(registry: &ReportRegistry) -> Cli {
    try_parse_from(registry, std::env::args_os()).unwrap_or_else(|e| e.exit())
}
