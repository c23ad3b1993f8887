// src/config/mod.rs
pub mod types;

pub use self::types::{AnalysisConfig, Config, PathsConfig, RecordConfig};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CharnetError, Result};
use crate::fit::MIN_SUPPORT;

/// Looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "charnet.toml";

impl Config {
    /// Loads `path`, or `charnet.toml` in the working directory.
    ///
    /// A missing default file yields the defaults; a missing explicit file does not.
    ///
    /// # Errors
    /// Returns `Io` if an explicit file cannot be read, `Config` if it does not parse
    /// or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            debug!("no {CONFIG_FILE}, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| CharnetError::Io {
            source,
            path: path.clone(),
        })?;
        let config = Self::parse_toml(&content)
            .map_err(|e| CharnetError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns `Config` on a syntax error, an unknown type or a failed check.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| CharnetError::Config(e.to_string()))?;
        config.analysis.min_support = config.analysis.min_support.max(MIN_SUPPORT);
        config.validate()?;
        Ok(config)
    }

    /// Replaces the output directory; used for the CLI override.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.paths.output_dir = dir.into();
        self
    }

    /// # Errors
    /// Returns `Config` if a setting cannot be used.
    pub fn validate(&self) -> Result<()> {
        let ext = &self.paths.extension;
        if ext.is_empty() || ext.starts_with('.') {
            return Err(CharnetError::Config(format!(
                "paths.extension {ext:?} must be non-empty, without the dot"
            )));
        }
        if self.record.comment_marker.is_whitespace() {
            return Err(CharnetError::Config(
                "record.comment_marker cannot be whitespace".into(),
            ));
        }
        let out = &self.paths.output_dir;
        if out.exists() && !out.is_dir() {
            return Err(CharnetError::Config(format!(
                "paths.output_dir {} is not a directory",
                out.display()
            )));
        }
        Ok(())
    }
}
