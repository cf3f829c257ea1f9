//! Filesystem access seam
//!
//! The upload service checks for and deletes a file being replaced through
//! this trait instead of calling `std::fs` directly, so tests can supply a
//! fake instead of patching process-wide state.

use std::io;
use std::path::Path;

/// Minimal filesystem capability used by the upload service
#[cfg_attr(test, mockall::automock)]
pub trait FileAccess {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Delete the file at `path`
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// `std::fs`-backed implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileAccess;

impl FileAccess for LocalFileAccess {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}
