//! Command dispatch logic for toolmeta

use super::{ExtractArgs, Host, InitArgs, ValidateArgs, extract_metadata, init_config, validate_config};
use crate::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "toolmeta", version, long_about = None, args_conflicts_with_subcommands = true)]
#[command(about = "Merge per-tool metadata files into normalized JSON")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Option<ToolmetaSubcommand>,

    #[command(flatten)]
    extract: ExtractArgs,
}

#[derive(Subcommand, Debug)]
enum ToolmetaSubcommand {
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// Without a subcommand the full extraction pass runs.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        None => extract_metadata(host, &cli.extract),
        Some(ToolmetaSubcommand::Init(init_args)) => init_config(host, init_args),
        Some(ToolmetaSubcommand::Validate(validate_args)) => validate_config(host, validate_args),
    }
}
