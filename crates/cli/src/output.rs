//! Result and error file writers.
//!
//! A run produces exactly one of the two files. Writing one removes a
//! leftover copy of the other from an earlier run.

use crate::config::Config;
use anyhow::{Context, Result};
use pipeline::Recommendation;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const SEPARATOR: &str = ", ";

/// Render recommendations as two-line blocks:
///
/// ```text
/// <Name>, <Id>
/// <Title>, <Title>, ...
/// ```
pub fn render_recommendations<W: Write>(out: &mut W, recommendations: &[Recommendation<'_>]) -> io::Result<()> {
    for rec in recommendations {
        writeln!(out, "{}{}{}", rec.user.name, SEPARATOR, rec.user.id)?;
        writeln!(out, "{}", rec.titles().join(SEPARATOR))?;
    }
    Ok(())
}

pub struct OutputWriter {
    output_path: PathBuf,
    error_path: PathBuf,
}

impl OutputWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            output_path: config.output_path.clone(),
            error_path: config.error_path.clone(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn error_path(&self) -> &Path {
        &self.error_path
    }

    pub fn write_recommendations(&self, recommendations: &[Recommendation<'_>]) -> Result<()> {
        let file = create_file(&self.output_path)?;
        let mut out = BufWriter::new(file);
        render_recommendations(&mut out, recommendations)
            .and_then(|_| out.flush())
            .with_context(|| format!("Failed to write {}", self.output_path.display()))?;

        remove_stale(&self.error_path)
    }

    /// Write `message` as the only line of the error file (no trailing newline).
    pub fn write_error(&self, message: &str) -> Result<()> {
        let mut file = create_file(&self.error_path)?;
        file.write_all(message.as_bytes())
            .with_context(|| format!("Failed to write {}", self.error_path.display()))?;

        remove_stale(&self.output_path)
    }
}

fn create_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove stale {}", path.display())),
    }
}
