use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::fit::MIN_SUPPORT;
use crate::record::DEFAULT_COMMENT_MARKER;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub record: RecordConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Stanford GraphBase books.
    #[serde(default = "default_sgb_dir")]
    pub sgb_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Record file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sgb_dir: default_sgb_dir(),
            output_dir: default_output_dir(),
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordConfig {
    #[serde(default = "default_comment_marker")]
    pub comment_marker: char,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self { comment_marker: default_comment_marker() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Distinct degree values needed before a fit is attempted.
    #[serde(default = "default_min_support")]
    pub min_support: usize,
    /// Treat a disconnected graph as an error instead of a warning.
    #[serde(default)]
    pub strict_connectivity: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_support: default_min_support(),
            strict_connectivity: false,
        }
    }
}

fn default_data_dir() -> PathBuf { PathBuf::from("data") }
fn default_sgb_dir() -> PathBuf { PathBuf::from("sgb-data") }
fn default_output_dir() -> PathBuf { PathBuf::from("output") }
fn default_extension() -> String { "dat".to_string() }
const fn default_comment_marker() -> char { DEFAULT_COMMENT_MARKER }
const fn default_min_support() -> usize { MIN_SUPPORT }
