// crates/save_file/src/lib.rs

//! Hands generated text to the host so it ends up as a named file.

use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where a save ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SavedTo {
    File(PathBuf),
    Stdout,
    Skipped,
}

impl fmt::Display for SavedTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SavedTo::File(path) => write!(f, "{}", path.display()),
            SavedTo::Stdout => write!(f, "<stdout>"),
            SavedTo::Skipped => write!(f, "<skipped>"),
        }
    }
}

/// Save generated content under a suggested file name.
pub trait FileSink {
    fn save(&self, content: &str, filename: &str) -> Result<SavedTo>;
}

/// Writes files into a directory.
///
/// Content goes to a temporary file in the target directory first and is
/// renamed into place once fully written. If anything fails the temporary
/// file is removed when it drops. A disabled sink writes nothing.
pub struct DirectorySink {
    pub dir: PathBuf,
    pub disabled: bool,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl FileSink for DirectorySink {
    fn save(&self, content: &str, filename: &str) -> Result<SavedTo> {
        if self.disabled {
            eprintln!("File saving is disabled; skipping {}.", filename);
            return Ok(SavedTo::Skipped);
        }

        let target = resolve_target(&self.dir, filename)?;
        log::debug!("Saving {} byte(s) to {}", content.len(), target.display());

        let mut tmp = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("Failed to create a temporary file in {}", self.dir.display()))?;
        tmp.write_all(content.as_bytes())
            .context("Failed to write generated content")?;
        tmp.flush().context("Failed to flush generated content")?;
        tmp.persist(&target)
            .map_err(|e| anyhow!("Failed to save {}: {}", target.display(), e.error))?;

        Ok(SavedTo::File(target))
    }
}

/// Writes the content to standard output.
pub struct StdoutSink;

impl FileSink for StdoutSink {
    fn save(&self, content: &str, _filename: &str) -> Result<SavedTo> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .and_then(|_| handle.write_all(b"\n"))
            .and_then(|_| handle.flush())
            .context("Failed to write to stdout")?;
        Ok(SavedTo::Stdout)
    }
}

/// Joins `filename` onto `dir`, refusing names that would escape the directory.
fn resolve_target(dir: &Path, filename: &str) -> Result<PathBuf> {
    let name = Path::new(filename);
    let is_plain = name.components().count() == 1
        && name.file_name().map(|n| n == name.as_os_str()).unwrap_or(false);
    if filename.is_empty() || !is_plain {
        return Err(anyhow!("Invalid file name: {:?}", filename));
    }
    Ok(dir.join(name))
}
