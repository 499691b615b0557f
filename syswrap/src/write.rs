//! Avoid-write file output: only touch a file when its content changes.
//!
//! Rewriting an identical header would bump its mtime and make every
//! translation unit that includes it rebuild.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::trace;

/// What [`AvoidWrite::write`] did (or, in dry-run mode, would do) to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist.
    Created,
    /// The file existed with different content.
    Updated,
    /// The file already had the exact content; it was not opened for writing.
    Unchanged,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        })
    }
}

/// File writer that compares against the existing content first.
#[derive(Debug, Default, Clone, Copy)]
pub struct AvoidWrite {
    dry_run: bool,
}

impl AvoidWrite {
    /// In `dry_run` mode outcomes are computed but nothing is created or
    /// written.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Write `content` to `path` unless the file already holds exactly those
    /// bytes. Missing parent directories are created.
    pub fn write(&self, path: &Path, content: &str) -> Result<WriteOutcome> {
        let outcome = match std::fs::read(path) {
            Ok(existing) if existing == content.as_bytes() => return Ok(WriteOutcome::Unchanged),
            Ok(_) => WriteOutcome::Updated,
            Err(e) if e.kind() == ErrorKind::NotFound => WriteOutcome::Created,
            Err(e) => {
                return Err(e).with_context(|| format!("reading existing {}", path.display()));
            }
        };

        if self.dry_run {
            trace!(path = %path.display(), %outcome, "dry run, not writing");
            return Ok(outcome);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(outcome)
    }
}

/// [`AvoidWrite::write`] without dry-run.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome> {
    AvoidWrite::new(false).write(path, content)
}
