//! syswrap — system header wrapper generator.
//!
//! Emits one thin header per system header name. Each wrapper pushes default
//! symbol visibility, applies a per-header fixup (forced include, sibling
//! include, or macro undefinition), and `#include_next`s the real header.
//! Files whose content is already up to date are left alone so downstream
//! builds are not invalidated.
//!
//! # Quick start
//!
//! From a `build.rs`:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let out = Path::new("target/system_wrappers");
//! syswrap::gen_wrappers(out, &["stdio.h", "wayland-util.h"]).unwrap();
//! ```
//!
//! Or from a `syswrap.toml`:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = syswrap::run(Path::new("syswrap.toml"), None).unwrap();
//! println!("{} files rewritten", report.written());
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

pub mod config;
pub mod template;
pub mod write;

use template::Fixup;
use write::{AvoidWrite, WriteOutcome};

/// Result of one generation run: every wrapper path with what happened to it,
/// in input order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub files: Vec<(PathBuf, WriteOutcome)>,
}

impl GenerationReport {
    fn count(&self, outcome: WriteOutcome) -> usize {
        self.files.iter().filter(|(_, o)| *o == outcome).count()
    }

    pub fn created(&self) -> usize {
        self.count(WriteOutcome::Created)
    }

    pub fn updated(&self) -> usize {
        self.count(WriteOutcome::Updated)
    }

    pub fn unchanged(&self) -> usize {
        self.count(WriteOutcome::Unchanged)
    }

    /// Files that were (or would have been) written.
    pub fn written(&self) -> usize {
        self.created() + self.updated()
    }
}

/// Generate a wrapper at `outdir/<header>` for every header in `headers`.
///
/// Existing files with identical content are not rewritten.
pub fn gen_wrappers<S: AsRef<str>>(outdir: &Path, headers: &[S]) -> Result<GenerationReport> {
    gen_wrappers_with(&AvoidWrite::default(), outdir, headers)
}

/// [`gen_wrappers`] with an explicit writer (e.g. dry-run).
pub fn gen_wrappers_with<S: AsRef<str>>(
    writer: &AvoidWrite,
    outdir: &Path,
    headers: &[S],
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();
    for header in headers {
        let header = header.as_ref();
        let path = outdir.join(header);
        let content = template::render(header);
        let outcome = writer
            .write(&path, &content)
            .with_context(|| format!("generating wrapper for {header}"))?;
        debug!(
            header,
            fixup = ?Fixup::for_header(header),
            %outcome,
            "wrapper"
        );
        report.files.push((path, outcome));
    }

    info!(
        outdir = %outdir.display(),
        created = report.created(),
        updated = report.updated(),
        unchanged = report.unchanged(),
        dry_run = writer.is_dry_run(),
        "generated system wrappers"
    );

    Ok(report)
}

/// Run the full pipeline: load config, render every wrapper, and write the
/// ones that changed.
///
/// `config_path` is the path to a `syswrap.toml` configuration file.
/// `outdir` optionally overrides the output directory from the config.
pub fn run(config_path: &Path, outdir: Option<&Path>) -> Result<GenerationReport> {
    run_with(&AvoidWrite::default(), config_path, outdir)
}

/// [`run`] with an explicit writer.
pub fn run_with(
    writer: &AvoidWrite,
    config_path: &Path,
    outdir: Option<&Path>,
) -> Result<GenerationReport> {
    let cfg = config::load_config(config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let outdir = match outdir {
        Some(p) => p.to_path_buf(),
        None => cfg.output_dir(base_dir),
    };

    info!(
        config = %config_path.display(),
        headers = cfg.headers.len(),
        "loaded configuration"
    );

    gen_wrappers_with(writer, &outdir, &cfg.headers)
}

/// Load a `syswrap.toml` and return `(header, wrapper content)` pairs without
/// writing to disk.
pub fn generate(config_path: &Path) -> Result<Vec<(String, String)>> {
    let cfg = config::load_config(config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    Ok(cfg
        .headers
        .into_iter()
        .map(|h| {
            let content = template::render(&h);
            (h, content)
        })
        .collect())
}
