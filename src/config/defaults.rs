//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_inputs_dir, PathBuf, PathBuf::from("inputs"));
default_fn!(default_layout, String, "{year}/day{day:02}.txt".to_string());

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Where puzzle input files live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputsConfig {
    /// Root directory; relative paths resolve against the working directory.
    #[serde(default = "default_inputs_dir")]
    pub dir: PathBuf,
    /// File name template below `dir`, e.g. `{year}/day{day:02}.txt`.
    #[serde(default = "default_layout")]
    pub layout: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            dir: default_inputs_dir(),
            layout: default_layout(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Year assumed when a puzzle id only names the day.
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub format: OutputFormat,
}
