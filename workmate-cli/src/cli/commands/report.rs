use crate::cli::output;
use crate::cli::Cli;
use anyhow::Result;
use tracing::info;
use workmate_core::{
    load_files, render, resolve_config, Config, LoadOptions, OutputFormat, ReportRegistry,
    WorkmateError,
};

/// Settings after layering command-line flags over the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Effective {
    pub options: LoadOptions,
    pub format: OutputFormat,
}

/// Flags win over configuration values
pub fn effective_settings(cli: &Cli, mut config: Config) -> Result<Effective> {
    if let Some(delimiter) = cli.delimiter {
        config.input.delimiter = delimiter;
    }
    Ok(Effective {
        options: LoadOptions::from_config(&config.input)?,
        format: cli.format.unwrap_or(config.output.format),
    })
}

/// Load the input files, run the named report and print its rows
pub fn run(cli: &Cli, registry: &ReportRegistry) -> Result<()> {
    let _span = tracing::info_span!("report", name = %cli.report).entered();

    // Resolve the report before touching any input file
    let report = registry.lookup(&cli.report).map_err(|_| {
        WorkmateError::Usage(format!(
            "unknown report '{}' (available: {})",
            cli.report,
            registry.list_names().join(", ")
        ))
    })?;

    let config = resolve_config(cli.config.as_deref())?;
    let settings = effective_settings(cli, config)?;

    info!("Running report '{}' over {} file(s)", cli.report, cli.files.len());

    let records = load_files(&cli.files, &settings.options)?;
    let rows = report.compute(&records)?;
    info!("Report '{}' produced {} rows", cli.report, rows.len());

    let rendered = render(settings.format, &report.columns(), &rows)?;
    output::emit(&rendered)?;
    Ok(())
}
