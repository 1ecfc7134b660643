//! Locating and reading puzzle input files.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::puzzle::PuzzleId;

/// Expand `{year}`, `{day}` and `{day:02}` in a layout template.
pub fn render_layout(layout: &str, id: PuzzleId) -> Result<String> {
    if layout.trim().is_empty() {
        bail!("Input layout is empty");
    }

    let mut out = String::with_capacity(layout.len());
    let mut rest = layout;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = match after.find('}') {
            Some(close) => close,
            None => bail!("Unclosed placeholder in layout '{}'", layout),
        };
        match &after[..close] {
            "year" => out.push_str(&id.year.to_string()),
            "day" => out.push_str(&id.day.to_string()),
            "day:02" => out.push_str(&format!("{:02}", id.day)),
            other => bail!(
                "Unknown placeholder '{{{}}}' in layout '{}': use {{year}}, {{day}} or {{day:02}}",
                other,
                layout
            ),
        }
        rest = &after[close + 1..];
    }
    if rest.contains('}') {
        bail!("Unopened placeholder in layout '{}'", layout);
    }
    out.push_str(rest);
    Ok(out)
}

/// Where the input for `id` is expected.
pub fn input_path(config: &Config, id: PuzzleId) -> Result<PathBuf> {
    let relative = render_layout(&config.inputs.layout, id)?;
    Ok(config.inputs_dir()?.join(relative))
}

/// Read an input file, keeping its text untouched.
pub fn read_input(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle input {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "input loaded");
    Ok(text)
}

/// Resolve and read the input for `id`.
pub fn load(config: &Config, id: PuzzleId) -> Result<String> {
    let path = input_path(config, id)?;
    if !path.exists() {
        bail!(
            "No input for {} at {} (set inputs.dir in {} or {})",
            id,
            path.display(),
            crate::paths::CONFIG_PATH,
            crate::config::INPUTS_ENV
        );
    }
    read_input(&path)
}
