//! Upload File Library
//!
//! Thin adapter around file-upload primitives: wraps an uploaded file,
//! generates a collision-resistant slugged filename, moves the file into a
//! destination directory, optionally deletes a file being replaced, and
//! normalizes transport-layer upload failures into a flat error taxonomy.
//!
//! # Features
//!
//! - **Safe Names**: `{slug}-{token}.{ext}` filenames, no client-controlled paths
//! - **Replace On Upload**: optional delete-before-move of a same-named file
//! - **Flat Errors**: one [`UploadError`] enum callers can branch on
//! - **Injectable Seams**: slugging and filesystem access are traits, easy to fake in tests
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use upload_file::{AsciiSlugger, TempUploadedFile, UploadFileService};
//!
//! fn main() -> Result<(), upload_file::UploadError> {
//!     let file = TempUploadedFile::new("/tmp/upload-4a2.tmp", "My Report.pdf");
//!     let mut service = UploadFileService::new(AsciiSlugger);
//!     let stored = service.upload(&file, Path::new("/var/uploads"), None)?;
//!     println!("stored as {}", service.file_name()?);
//!     println!("at {}", stored.path().display());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod file;
pub mod fs;
pub mod service;
pub mod slug;
pub mod uploaded;

// Re-export commonly used types
pub use error::{FileError, TransportError, UploadError};
pub use file::StoredFile;
pub use fs::{FileAccess, LocalFileAccess};
pub use service::UploadFileService;
pub use slug::{AsciiSlugger, Slugger};
pub use uploaded::{TempUploadedFile, UploadedFile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
