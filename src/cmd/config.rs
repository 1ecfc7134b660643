//! Config command: show the effective configuration

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use advent::config::{self, Config};
use advent::paths;
use advent::ui::colors;

use crate::cmd::ui::{Output, OutputMode};

#[derive(Debug, Serialize)]
struct ConfigReport<'a> {
    config: &'a Config,
    inputs_dir: PathBuf,
    global_config: Option<ConfigSource>,
    project_config: ConfigSource,
}

#[derive(Debug, Serialize)]
struct ConfigSource {
    path: PathBuf,
    found: bool,
}

impl ConfigSource {
    fn at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            found: path.exists(),
        }
    }
}

pub fn cmd_config(config: &Config, output: &Output) -> Result<()> {
    let report = ConfigReport {
        config,
        inputs_dir: config.inputs_dir()?,
        global_config: config::global_config_path().as_deref().map(ConfigSource::at),
        project_config: ConfigSource::at(Path::new(paths::CONFIG_PATH)),
    };

    if output.mode() == OutputMode::Json {
        output.json(&report);
        return Ok(());
    }

    let yaml = serde_yaml::to_string(config).context("Failed to render configuration")?;
    output.info(yaml.trim_end());
    output.info("");
    output.info(&format!(
        "{} {}",
        output.paint("inputs dir:", colors::heading),
        report.inputs_dir.display()
    ));
    if let Some(global) = &report.global_config {
        output.detail(&source_line(output, "global", global));
    }
    output.detail(&source_line(output, "project", &report.project_config));
    Ok(())
}

fn source_line(output: &Output, label: &str, source: &ConfigSource) -> String {
    let state = if source.found {
        output.paint("found", colors::success)
    } else {
        output.paint("not found", colors::secondary)
    };
    format!("{} config: {} ({})", label, source.path.display(), state)
}
