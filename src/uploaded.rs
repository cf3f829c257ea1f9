//! Uploaded-file abstraction
//!
//! [`UploadedFile`] is what the upload service consumes: a file sitting in
//! temporary storage together with the metadata the uploading client
//! declared. Client-declared values are untrusted and only ever used for
//! human-readable naming. The move operation re-signals every transport
//! failure as an [`UploadError`] kind so callers never see transport types.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FileError, TransportError, UploadError};
use crate::file::{self, StoredFile};

/// A file received from an untrusted caller, consumed exactly once by `move_to`
#[cfg_attr(test, mockall::automock)]
pub trait UploadedFile {
    /// Original filename as declared by the client. Untrusted.
    fn client_original_name(&self) -> String;

    /// Extension part of the client-declared name, empty when absent. Untrusted.
    fn client_original_extension(&self) -> String;

    /// Content-based extension guess, independent of client claims
    fn guess_client_extension(&self) -> Option<String>;

    /// Size in bytes
    fn size(&self) -> u64;

    /// Content-based MIME guess, falling back to the client-declared extension
    fn mime_type(&self) -> Option<String>;

    /// Read the full file content from temporary storage
    fn content(&self) -> Result<Vec<u8>, FileError>;

    /// Move the file to `directory/name`
    ///
    /// A file tagged with a transport failure fails with the mapped
    /// [`UploadError`] kind without touching the filesystem; any I/O failure
    /// during the move surfaces as [`UploadError::Upload`].
    fn move_to(&self, directory: &Path, name: &str) -> Result<StoredFile, UploadError>;
}

/// Disk-backed uploaded file handed over by the transport layer
#[derive(Debug, Clone)]
pub struct TempUploadedFile {
    temp_path: PathBuf,
    client_name: String,
    transport_error: Option<TransportError>,
}

impl TempUploadedFile {
    /// A clean upload sitting at `temp_path`
    pub fn new(temp_path: impl Into<PathBuf>, client_name: impl Into<String>) -> Self {
        Self {
            temp_path: temp_path.into(),
            client_name: client_name.into(),
            transport_error: None,
        }
    }

    /// An upload the transport layer already marked as failed
    ///
    /// Moving it always fails with the mapped error kind.
    pub fn with_transport_error(
        temp_path: impl Into<PathBuf>,
        client_name: impl Into<String>,
        error: TransportError,
    ) -> Self {
        Self {
            temp_path: temp_path.into(),
            client_name: client_name.into(),
            transport_error: Some(error),
        }
    }

    /// Temporary location the file currently sits at
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }
}

impl UploadedFile for TempUploadedFile {
    fn client_original_name(&self) -> String {
        self.client_name.clone()
    }

    fn client_original_extension(&self) -> String {
        Path::new(&self.client_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_string()
    }

    fn guess_client_extension(&self) -> Option<String> {
        infer::get_from_path(&self.temp_path)
            .ok()
            .flatten()
            .map(|kind| kind.extension().to_string())
    }

    fn size(&self) -> u64 {
        fs::metadata(&self.temp_path).map(|m| m.len()).unwrap_or(0)
    }

    fn mime_type(&self) -> Option<String> {
        if let Ok(Some(kind)) = infer::get_from_path(&self.temp_path) {
            return Some(kind.mime_type().to_string());
        }

        mime_guess::from_path(Path::new(&self.client_name))
            .first()
            .map(|mime| mime.to_string())
    }

    fn content(&self) -> Result<Vec<u8>, FileError> {
        Ok(fs::read(&self.temp_path)?)
    }

    fn move_to(&self, directory: &Path, name: &str) -> Result<StoredFile, UploadError> {
        if let Some(error) = &self.transport_error {
            return Err(error.clone().into());
        }

        let target = file::move_file(&self.temp_path, directory, name)
            .map_err(|e| UploadError::Upload(e.to_string()))?;

        tracing::info!(
            client_name = %self.client_name,
            target = %target.display(),
            "Moved uploaded file"
        );

        Ok(StoredFile::new(target))
    }
}
