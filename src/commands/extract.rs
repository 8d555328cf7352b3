use super::Host;
use super::common::{LogLevel, init_logging};
use super::config::{Config, ParseErrorPolicy};
use crate::Result;
use crate::aggregate::Collector;
use crate::output::{Sink, StagedOutput};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use std::io::Write;

const LOG_TARGET: &str = "   extract";

/// Arguments of the default command, which runs the full aggregation pass
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to configuration file (default is `toolmeta.toml` if present)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Directory holding one folder per tool
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<Utf8PathBuf>,

    /// Directory to regenerate; it is deleted first
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<Utf8PathBuf>,

    /// How to handle source files that cannot be parsed [possible values: abort, skip]
    #[arg(long, value_name = "POLICY")]
    pub parse_errors: Option<ParseErrorPolicy>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: LogLevel,
}

/// Regenerate the output directory from every tool folder in the data directory
///
/// # Errors
///
/// Returns an error if the configuration is invalid, an input cannot be read or
/// parsed (under the `abort` policy), or an output file cannot be written. On error
/// no output directory is left behind.
pub fn extract_metadata<H: Host>(host: &mut H, args: &ExtractArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_deref())?.with_overrides(
        args.data_dir.as_deref(),
        args.output_dir.as_deref(),
        args.parse_errors,
    )?;

    let tool_count = run_pass(&config)?;

    let _ = writeln!(host.output(), "Wrote metadata for {tool_count} tool(s) to '{}'", config.output_dir);
    Ok(())
}

/// One complete "clear output, regenerate everything" pass. Returns the number of tools written.
///
/// # Errors
///
/// Returns an error if any step of the pass fails.
pub fn run_pass(config: &Config) -> Result<usize> {
    log::info!(target: LOG_TARGET, "Starting metadata extraction and merging process");

    let mut output = StagedOutput::prepare(&config.output_dir)?;

    log::info!(target: LOG_TARGET, "Fetching metadata from the directory {}", config.data_dir);

    let combined = Collector::new(config.parse_errors).collect(&config.data_dir, &mut output)?;
    output.write_combined(&combined)?;
    output.publish()?;

    log::info!(target: LOG_TARGET, "Metadata combined and saved");

    Ok(combined.len())
}
