//! This build script validates the default configuration file (`default_config.toml`)

#![allow(dead_code, reason = "Some items may be unused in this build script context")]
#![allow(unused_imports, reason = "Some items may be unused in this build script context")]

use std::process;

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[path = "src/commands/config.rs"]
mod config;

fn main() {
    match config::Config::from_toml(config::DEFAULT_CONFIG_TOML) {
        Ok(_) => {
            println!("cargo:rerun-if-changed=default_config.toml");
            println!("cargo:rerun-if-changed=src/commands/config.rs");
        }
        Err(e) => {
            eprintln!("unable to load default_config.toml: {e:?}");
            process::exit(1);
        }
    }
}
