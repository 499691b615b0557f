//! Configuration types for `syswrap.toml`.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};
use serde::Deserialize;

/// Root configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    /// System headers to wrap, in generation order.
    pub headers: Vec<String>,
}

/// Output settings.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory the wrappers are written to, relative to the config file.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("system_wrappers")
}

impl Config {
    /// Output directory resolved against `base_dir` (usually the directory
    /// holding the TOML file). Absolute paths are returned as-is.
    pub fn output_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.output.dir)
    }
}

/// Check that every header name is usable as a path below the output
/// directory, and that no name is listed twice.
pub fn validate_headers<S: AsRef<str>>(headers: &[S]) -> Result<()> {
    let mut seen = HashSet::new();
    for h in headers {
        let h = h.as_ref();
        if h.is_empty() {
            bail!("empty header name");
        }
        let path = Path::new(h);
        if path.is_absolute() || h.starts_with('/') {
            bail!("header name must be relative: {h}");
        }
        if path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            bail!("header name must stay inside the output directory: {h}");
        }
        if h.ends_with('/') {
            bail!("header name must end in a file name: {h}");
        }
        if !seen.insert(h) {
            bail!("duplicate header name: {h}");
        }
    }
    Ok(())
}

/// Load and parse a `syswrap.toml` configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let config: Config = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {}", path.display(), e))?;
    validate_headers(&config.headers)
        .map_err(|e| anyhow::anyhow!("invalid config file {}: {}", path.display(), e))?;
    Ok(config)
}
