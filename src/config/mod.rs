//! Configuration management for advent projects.
//!
//! Configuration lives in Markdown files with YAML frontmatter. The global
//! file (`~/.config/advent/config.md`) is read first, the project file
//! (`.advent/config.md`) overrides it, and environment variables override both.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::input::render_layout;
use crate::paths;
use crate::puzzle::PuzzleId;

pub mod defaults;

pub use defaults::*;

/// Overrides `inputs.dir`.
pub const INPUTS_ENV: &str = "ADVENT_INPUTS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Global config (~/.config/advent/config.md)
    /// 3. Project config (.advent/config.md)
    /// 4. Environment (`ADVENT_INPUTS`)
    pub fn load() -> Result<Self> {
        let mut config = Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(paths::CONFIG_PATH),
        )?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config = PartialConfig::parse(content)?.merge_with(PartialConfig::default());
        config.validate()?;
        Ok(config)
    }

    /// Load merged configuration from the given global and project paths.
    /// Either file may be missing.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        Ok(global_config.merge_with(project_config))
    }

    fn apply_env(&mut self) {
        if let Some(dir) = std::env::var_os(INPUTS_ENV).filter(|v| !v.is_empty()) {
            debug!(dir = ?dir, "inputs directory overridden by {}", INPUTS_ENV);
            self.inputs.dir = PathBuf::from(dir);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(year) = self.defaults.year {
            PuzzleId::new(year, 1).context("Invalid defaults.year in config")?;
        }
        let sample = PuzzleId::new(2015, 1)?;
        render_layout(&self.inputs.layout, sample).context("Invalid inputs.layout in config")?;
        Ok(())
    }

    /// The inputs directory, made absolute against the working directory.
    pub fn inputs_dir(&self) -> Result<PathBuf> {
        if self.inputs.dir.is_absolute() {
            return Ok(self.inputs.dir.clone());
        }
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        Ok(cwd.join(&self.inputs.dir))
    }
}

/// Returns the path to the global config file at ~/.config/advent/config.md
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .map(|home| home.join(paths::GLOBAL_CONFIG_PATH))
}

/// Split `---` delimited YAML frontmatter from the Markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 3..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub inputs: Option<PartialInputsConfig>,
    pub defaults: Option<PartialDefaultsConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialInputsConfig {
    pub dir: Option<PathBuf>,
    pub layout: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialDefaultsConfig {
    pub year: Option<u16>,
    pub format: Option<OutputFormat>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        // an empty frontmatter block deserializes to unit, not a map
        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_inputs = self.inputs.unwrap_or_default();
        let global_defaults = self.defaults.unwrap_or_default();
        let project_inputs = project.inputs.unwrap_or_default();
        let project_defaults = project.defaults.unwrap_or_default();

        Config {
            inputs: InputsConfig {
                // Project value > global value > default
                dir: project_inputs
                    .dir
                    .or(global_inputs.dir)
                    .unwrap_or_else(defaults::default_inputs_dir),
                layout: project_inputs
                    .layout
                    .or(global_inputs.layout)
                    .unwrap_or_else(defaults::default_layout),
            },
            defaults: DefaultsConfig {
                year: project_defaults.year.or(global_defaults.year),
                format: project_defaults
                    .format
                    .or(global_defaults.format)
                    .unwrap_or_default(),
            },
        }
    }
}
