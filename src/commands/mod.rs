//! Command-line interface and orchestration for toolmeta
//!
//! Running `toolmeta` without a subcommand performs the extraction pass:
//!
//! 1. Load configuration (`toolmeta.toml` or defaults) and apply command-line overrides
//! 2. Clear the output directory and stage a fresh one
//! 3. Aggregate every tool folder in the data directory
//! 4. Write the per-tool page files and `combined_metadata.json`
//! 5. Swap the staged directory into place
//!
//! The `init` and `validate` subcommands write and check configuration files.
//! All user-facing text goes through [`Host`] so tests can capture it.

mod common;
mod config;
mod extract;
mod host;
mod init;
mod run;
mod validate;

pub use common::{LogLevel, init_logging};
pub use config::{Config, DEFAULT_CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML, ParseErrorPolicy};
pub use extract::{ExtractArgs, extract_metadata, run_pass};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
