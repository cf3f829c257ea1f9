//! Error taxonomy
//!
//! Three flat families: [`FileError`] for the plain file abstraction,
//! [`TransportError`] for the failure causes the upload transport records on
//! a file, and [`UploadError`] for everything callers of the upload service
//! see. Each transport kind maps 1:1 onto an upload kind so callers can
//! branch on upload-specific causes without knowing the transport layer.

use thiserror::Error;

/// Errors from the stored-file abstraction
#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("move failed: {0}")]
    Move(String),
}

/// Failure cause recorded on an uploaded file by the transport layer
///
/// The transport layer (multipart parsing, request limits) is out of scope
/// here; it hands over a file either clean or tagged with one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("destination could not be written")]
    CanNotWrite,

    #[error("file extension blocked by the server")]
    ExtensionBlocked,

    #[error("file exceeds the form-declared size limit")]
    FormSizeExceeded,

    #[error("file exceeds the server-configured size limit")]
    ServerSizeExceeded,

    #[error("no file was present in the upload")]
    NoFile,

    #[error("no temporary directory is configured")]
    NoTmpDir,

    #[error("upload was only partially completed")]
    Partial,

    #[error("{0}")]
    Other(String),
}

/// Upload errors
#[derive(Error, Debug)]
pub enum UploadError {
    /// Filename requested before any successful upload. Logic error.
    #[error("no file uploaded, call upload first")]
    NoFileUploaded,

    #[error("destination could not be written")]
    CanNotWrite,

    #[error("file extension blocked by the server")]
    ExtensionBlocked,

    #[error("file exceeds the form-declared size limit")]
    FormSizeExceeded,

    #[error("file exceeds the server-configured size limit")]
    ServerSizeExceeded,

    #[error("no file was present in the upload")]
    NoFilePresent,

    #[error("no temporary directory is configured")]
    NoTempDirectory,

    #[error("upload was only partially completed")]
    PartialUpload,

    /// Deletion of the file being replaced failed.
    #[error("{0}")]
    ReplaceFailed(String),

    /// Any other move-related failure, wraps the original message.
    #[error("upload failed: {0}")]
    Upload(String),
}

impl From<TransportError> for UploadError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::CanNotWrite => UploadError::CanNotWrite,
            TransportError::ExtensionBlocked => UploadError::ExtensionBlocked,
            TransportError::FormSizeExceeded => UploadError::FormSizeExceeded,
            TransportError::ServerSizeExceeded => UploadError::ServerSizeExceeded,
            TransportError::NoFile => UploadError::NoFilePresent,
            TransportError::NoTmpDir => UploadError::NoTempDirectory,
            TransportError::Partial => UploadError::PartialUpload,
            TransportError::Other(msg) => UploadError::Upload(msg),
        }
    }
}
