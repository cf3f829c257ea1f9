//! Upload orchestration service
//!
//! Consumes an [`UploadedFile`], computes a safe destination filename
//! (`{slug}-{token}.{ext}`), optionally deletes a same-named file being
//! replaced, invokes the move, and keeps the generated name for later
//! retrieval.
//!
//! One service instance serves one in-flight upload at a time: the cached
//! filename is a single mutable field, so concurrent callers must
//! instantiate per request or synchronize externally.

use std::path::Path;

use crate::error::UploadError;
use crate::file::StoredFile;
use crate::fs::{FileAccess, LocalFileAccess};
use crate::slug::Slugger;
use crate::uploaded::UploadedFile;

/// Orchestrates a single file upload
pub struct UploadFileService<S, A = LocalFileAccess> {
    slugger: S,
    access: A,
    file_name: Option<String>,
}

impl<S: Slugger> UploadFileService<S> {
    /// Service over the local filesystem
    pub fn new(slugger: S) -> Self {
        Self::with_file_access(slugger, LocalFileAccess)
    }
}

impl<S: Slugger, A: FileAccess> UploadFileService<S, A> {
    /// Service with an injected filesystem capability
    pub fn with_file_access(slugger: S, access: A) -> Self {
        Self {
            slugger,
            access,
            file_name: None,
        }
    }

    /// Name generated by the last successful [`upload`](Self::upload)
    ///
    /// Fails with [`UploadError::NoFileUploaded`] until an upload succeeds; a
    /// failed upload never leaves a stale name behind.
    pub fn file_name(&self) -> Result<&str, UploadError> {
        self.file_name.as_deref().ok_or(UploadError::NoFileUploaded)
    }

    /// Store `file` in `save_dir` under a generated collision-resistant name
    ///
    /// When `replace_file_name` is given and `save_dir/replace_file_name`
    /// exists, it is deleted before the move; a deletion failure aborts the
    /// whole operation with [`UploadError::ReplaceFailed`] and the move is
    /// never attempted. Delete-then-move is not transactional: if the move
    /// fails afterwards, the replaced file stays deleted.
    #[tracing::instrument(
        name = "upload.store",
        skip(self, file),
        fields(
            client_name = %file.client_original_name(),
            dir = %save_dir.display()
        ),
        err
    )]
    pub fn upload(
        &mut self,
        file: &dyn UploadedFile,
        save_dir: &Path,
        replace_file_name: Option<&str>,
    ) -> Result<StoredFile, UploadError> {
        let generated = self.generate_file_name(file);

        if let Some(replace) = replace_file_name {
            self.remove_replaced(save_dir, replace)?;
        }

        let stored = file.move_to(save_dir, &generated)?;

        tracing::info!(file_name = %generated, "Upload stored");
        self.file_name = Some(generated);

        Ok(stored)
    }

    /// `{slug(stem)}-{token}.{ext}`
    ///
    /// The stem is the client-declared name with any directory components
    /// and its final extension stripped, then slugged. When the content
    /// guesser cannot determine an extension the segment is the literal
    /// `null`, matching long-standing behavior callers may depend on.
    fn generate_file_name(&self, file: &dyn UploadedFile) -> String {
        let original = file.client_original_name();
        let stem = Path::new(&original)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let safe = self.slugger.slug(stem, '-', None);
        let extension = file.guess_client_extension();

        format!(
            "{}-{}.{}",
            safe,
            unique_token(),
            extension.as_deref().unwrap_or("null")
        )
    }

    fn remove_replaced(&self, save_dir: &Path, file_name: &str) -> Result<(), UploadError> {
        let target = save_dir.join(file_name);

        if !self.access.exists(&target) {
            return Ok(());
        }

        tracing::warn!(path = %target.display(), "Deleting file being replaced");

        self.access.remove(&target).map_err(|e| {
            UploadError::ReplaceFailed(format!(
                "file [{}] could not be replaced: {e}",
                target.display()
            ))
        })
    }
}

/// Per-call uniqueness token for generated filenames
fn unique_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
