//! Artifact writer seam
//!
//! The orchestrator hands fully rendered artifacts to an [`ArtifactWriter`].
//! [`FsArtifactWriter`] writes to disk; [`MemoryArtifactWriter`] keeps
//! everything in memory and can be told to fail specific paths.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait ArtifactWriter: Send + Sync {
    /// Create the output directory and any missing parents
    fn create_dir(&self, dir: &Path) -> io::Result<()>;

    /// Write one complete artifact
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactWriter;

impl ArtifactWriter for FsArtifactWriter {
    fn create_dir(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

#[derive(Debug, Default)]
pub struct MemoryArtifactWriter {
    directories: Mutex<Vec<PathBuf>>,
    artifacts: Mutex<BTreeMap<PathBuf, String>>,
    failing: HashSet<PathBuf>,
}

impl MemoryArtifactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes (or directory creation) at `path` fail
    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    pub fn artifacts(&self) -> BTreeMap<PathBuf, String> {
        match self.artifacts.lock() {
            Ok(artifacts) => artifacts.clone(),
            Err(_) => BTreeMap::new(),
        }
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.artifacts
            .lock()
            .ok()
            .and_then(|artifacts| artifacts.get(path).cloned())
    }

    pub fn directories(&self) -> Vec<PathBuf> {
        match self.directories.lock() {
            Ok(directories) => directories.clone(),
            Err(_) => Vec::new(),
        }
    }

    fn check(&self, path: &Path) -> io::Result<()> {
        if self.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("refusing to write {}", path.display()),
            ));
        }
        Ok(())
    }
}

impl ArtifactWriter for MemoryArtifactWriter {
    fn create_dir(&self, dir: &Path) -> io::Result<()> {
        self.check(dir)?;
        let mut directories = self
            .directories
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "directory list poisoned"))?;
        directories.push(dir.to_path_buf());
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check(path)?;
        let mut artifacts = self
            .artifacts
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "artifact map poisoned"))?;
        artifacts.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
