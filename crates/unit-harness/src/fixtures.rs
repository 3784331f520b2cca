//! File-system fixtures
//!
//! Each fixture owns one path. `remove` tears it down explicitly and
//! reports failures; dropping a fixture that was neither removed nor kept
//! cleans up best-effort, so a panicking test does not leak files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{HarnessError, Result};

/// Name of the fixture file
pub const FILE_NAME: &str = "file.txt";

/// Literal content written to every fixture file
pub const FILE_CONTENT: &str = "text";

/// Name of the fixture subdirectory
pub const DIR_NAME: &str = "test_dir";

/// A file containing [`FILE_CONTENT`]
#[derive(Debug)]
pub struct FileFixture {
    path: PathBuf,
    armed: bool,
}

impl FileFixture {
    /// Create (or truncate) the file at `path`
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        fs::write(&path, FILE_CONTENT)
            .map_err(|e| HarnessError::fixture("create file", &path, e))?;
        log::debug!("created file {}", path.display());
        Ok(Self { path, armed: true })
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file
    pub fn remove(mut self) -> Result<()> {
        self.armed = false;
        fs::remove_file(&self.path)
            .map_err(|e| HarnessError::fixture("remove file", &self.path, e))?;
        log::debug!("removed file {}", self.path.display());
        Ok(())
    }

    /// Leave the file in place and return its path
    pub fn keep(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for FileFixture {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// An empty directory
#[derive(Debug)]
pub struct DirFixture {
    path: PathBuf,
    armed: bool,
}

impl DirFixture {
    /// Create the directory at `path`; its parent must exist
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        fs::create_dir(&path).map_err(|e| HarnessError::fixture("create dir", &path, e))?;
        log::debug!("created dir {}", path.display());
        Ok(Self { path, armed: true })
    }

    /// Path of the directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the directory, which must be empty
    pub fn remove(mut self) -> Result<()> {
        self.armed = false;
        fs::remove_dir(&self.path)
            .map_err(|e| HarnessError::fixture("remove dir", &self.path, e))?;
        log::debug!("removed dir {}", self.path.display());
        Ok(())
    }

    /// Leave the directory in place and return its path
    pub fn keep(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for DirFixture {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_dir(&self.path);
        }
    }
}

/// A fresh directory under the system temp dir
///
/// [`TempDirFixture::remove`] uses `remove_dir`, so it fails when anything
/// created inside was not torn down first.
#[derive(Debug)]
pub struct TempDirFixture {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl TempDirFixture {
    /// Create a new temporary directory
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("unittest-rs-")
            .tempdir()
            .map_err(|e| HarnessError::fixture("create temp dir", std::env::temp_dir(), e))?;
        let path = dir.path().to_path_buf();
        log::debug!("created temp dir {}", path.display());
        Ok(Self {
            path,
            dir: Some(dir),
        })
    }

    /// Path of the directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the directory, which must be empty
    pub fn remove(mut self) -> Result<()> {
        if let Some(dir) = self.dir.take() {
            let path = dir.keep();
            fs::remove_dir(&path).map_err(|e| HarnessError::fixture("remove dir", &path, e))?;
            log::debug!("removed temp dir {}", path.display());
        }
        Ok(())
    }
}
