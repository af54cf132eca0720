#![deny(unsafe_code)]

//! Shared helpers for tests that need rule files on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory that holds rule files for the duration of a test.
///
/// The directory and everything in it is removed when the value is dropped.
#[derive(Debug)]
pub struct RuleDir {
    dir: TempDir,
}

impl RuleDir {
    /// Creates a fresh empty directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Returns the directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `lines` to `name`, one rule per line, and returns its path.
    pub fn write_rules(&self, name: &str, lines: &[&str]) -> io::Result<PathBuf> {
        let mut contents = lines.join("\n");
        contents.push('\n');
        self.write_raw(name, contents.as_bytes())
    }

    /// Writes `bytes` to `name` verbatim and returns its path.
    pub fn write_raw(&self, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}
