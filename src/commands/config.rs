use crate::Result;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use ohno::{EnrichableExt, IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use strum::Display;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the working directory when no configuration path is given
pub const DEFAULT_CONFIG_FILE_NAME: &str = "toolmeta.toml";

/// How to react to a source file that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Display, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Stop the run with an error
    #[default]
    Abort,

    /// Log a warning and extract nothing from the file
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding one folder per tool
    pub data_dir: Utf8PathBuf,

    /// Directory that is cleared and regenerated on every run
    pub output_dir: Utf8PathBuf,

    /// Policy for source files that cannot be parsed
    #[serde(default)]
    pub parse_errors: ParseErrorPolicy,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// With no explicit path, `toolmeta.toml` in `base_dir` is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading toolmeta configuration file '{path}'"))?;
            (path.to_path_buf(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading toolmeta configuration file '{path}'")),
            }
        };

        Self::from_toml(&text).map_err(|e| e.enrich_with(|| format!("parsing configuration file '{final_path}'")))
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema or fails validation
    pub fn from_toml(text: &str) -> Result<Self> {
        let defaults = Self::default();
        let partial: PartialConfig = toml::from_str(text).into_app_err("invalid configuration")?;

        let config = Self {
            data_dir: partial.data_dir.unwrap_or(defaults.data_dir),
            output_dir: partial.output_dir.unwrap_or(defaults.output_dir),
            parse_errors: partial.parse_errors.unwrap_or(defaults.parse_errors),
        };

        config.validate()?;
        Ok(config)
    }

    /// Replace individual settings, typically from command-line flags
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration fails validation
    pub fn with_overrides(
        self,
        data_dir: Option<&Utf8Path>,
        output_dir: Option<&Utf8Path>,
        parse_errors: Option<ParseErrorPolicy>,
    ) -> Result<Self> {
        let config = Self {
            data_dir: data_dir.map_or(self.data_dir, Utf8Path::to_path_buf),
            output_dir: output_dir.map_or(self.output_dir, Utf8Path::to_path_buf),
            parse_errors: parse_errors.unwrap_or(self.parse_errors),
        };

        config.validate()?;
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a directory is empty or the output directory would contain the data directory
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_str().is_empty() {
            return Err(app_err!("data_dir must not be empty"));
        }

        if self.output_dir.as_str().is_empty() {
            return Err(app_err!("output_dir must not be empty"));
        }

        let data_dir = resolve_location(&self.data_dir)?;
        let output_dir = resolve_location(&self.output_dir)?;

        if data_dir.starts_with(&output_dir) {
            return Err(app_err!(
                "output_dir ('{}') must not be or contain data_dir ('{}') because it is cleared on every run",
                self.output_dir,
                self.data_dir
            ));
        }

        Ok(())
    }
}

/// Absolute form of `path` used to compare directory locations.
///
/// Relative paths are joined onto the working directory and `.`/`..` are folded
/// away. The longest existing ancestor is then canonicalized so symlinks and
/// differently spelled but identical prefixes compare equal.
fn resolve_location(path: &Utf8Path) -> Result<Utf8PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().into_app_err("unable to determine the working directory")?;
        let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(|p| app_err!("working directory '{}' is not valid UTF-8", p.display()))?;
        cwd.join(path)
    };

    let mut normalized = Utf8PathBuf::new();
    for component in absolute.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                let _ = normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    Ok(canonicalize_existing_prefix(&normalized).unwrap_or(normalized))
}

fn canonicalize_existing_prefix(path: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut missing = Vec::new();
    let mut existing = path;

    loop {
        if let Ok(mut canonical) = existing.canonicalize_utf8() {
            for name in missing.iter().rev() {
                canonical.push(name);
            }
            return Some(canonical);
        }

        missing.push(existing.file_name()?);
        existing = existing.parent()?;
    }
}

impl Default for Config {
    fn default() -> Self {
        let partial: PartialConfig =
            toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config");

        Self {
            data_dir: partial.data_dir.expect("default_config.toml should set data_dir"),
            output_dir: partial.output_dir.expect("default_config.toml should set output_dir"),
            parse_errors: partial.parse_errors.unwrap_or_default(),
        }
    }
}

/// On-disk shape: every setting is optional and falls back to the defaults
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    data_dir: Option<Utf8PathBuf>,
    output_dir: Option<Utf8PathBuf>,
    parse_errors: Option<ParseErrorPolicy>,
}
