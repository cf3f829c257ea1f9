//! Stored-file abstraction
//!
//! [`StoredFile`] wraps a filesystem-resident file at a path chosen by this
//! system. Extension and MIME guesses are content-based (magic bytes via
//! `infer`), with an extension-based `mime_guess` fallback for formats that
//! carry no recognizable signature.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FileError;

/// A file resident at a durable path
///
/// Created as the result of a successful move; owned by the caller thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    path: PathBuf,
}

impl StoredFile {
    /// Bind to an existing file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the file lives at
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Guess the extension from file content
    ///
    /// Returns `None` when the content matches no known signature.
    pub fn guess_extension(&self) -> Option<&'static str> {
        infer::get_from_path(&self.path)
            .ok()
            .flatten()
            .map(|kind| kind.extension())
    }

    /// Guess the MIME type from file content, falling back to the extension
    pub fn mime_type(&self) -> Option<String> {
        if let Ok(Some(kind)) = infer::get_from_path(&self.path) {
            return Some(kind.mime_type().to_string());
        }

        mime_guess::from_path(&self.path)
            .first()
            .map(|mime| mime.to_string())
    }

    /// Read the full file content
    pub fn content(&self) -> Result<Vec<u8>, FileError> {
        Ok(fs::read(&self.path)?)
    }

    /// Move the file into `directory`, keeping the current name when `name`
    /// is `None`
    ///
    /// Returns a new `StoredFile` bound to the destination.
    pub fn move_to(&self, directory: &Path, name: Option<&str>) -> Result<StoredFile, FileError> {
        let name = match name {
            Some(name) => name.to_owned(),
            None => self
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_owned)
                .ok_or_else(|| {
                    FileError::Move(format!("source [{}] has no file name", self.path.display()))
                })?,
        };

        let target = move_file(&self.path, directory, &name)?;
        Ok(StoredFile::new(target))
    }
}

/// Move `source` to `directory/name`, creating the directory if needed
///
/// Rename first; a rename that fails (typically crossing a filesystem
/// boundary) falls back to copy and remove.
pub(crate) fn move_file(source: &Path, directory: &Path, name: &str) -> Result<PathBuf, FileError> {
    fs::create_dir_all(directory)?;
    let target = directory.join(name);

    if fs::rename(source, &target).is_err() {
        tracing::debug!(
            source = %source.display(),
            target = %target.display(),
            "Rename failed, falling back to copy"
        );
        fs::copy(source, &target)?;
        fs::remove_file(source)?;
    }

    Ok(target)
}
