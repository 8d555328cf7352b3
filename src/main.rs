//! Merge per-tool metadata files into normalized JSON.
//!
//! # Overview
//!
//! `toolmeta` scans a data directory in which every sub-folder is named after a
//! tool and may contain any of these files:
//!
//! | source | file |
//! |---|---|
//! | bioconda | `bioconda_<tool>.yaml` |
//! | biocontainers | `<tool>.biocontainers.yaml` |
//! | biotools | `<tool>.biotools.json` |
//! | bioschemas | `<tool>.bioschemas.jsonld` |
//! | galaxy | `<tool>.galaxy.json` |
//!
//! It writes `combined_metadata.json` (one compact summary per tool) and
//! `tools/<tool>.json` (one detailed page record per tool) into the output
//! directory, which is deleted and rebuilt on every run.
//!
//! # Usage
//!
//! ```bash
//! toolmeta                                   # uses toolmeta.toml or the defaults
//! toolmeta --data-dir content/data --output-dir public/metadata
//! toolmeta --parse-errors skip               # warn about malformed files instead of failing
//! toolmeta init                              # write a default toolmeta.toml
//! toolmeta validate --config toolmeta.toml
//! ```

use std::io::Write;
use std::io::{stderr, stdout};
use toolmeta::{Host, run};

/// Default host that writes to the process's standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }
}

fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
