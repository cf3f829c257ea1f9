//! Uploaded File Integration Tests
//!
//! Tests for the disk-backed uploaded-file adapter: transport error kinds
//! mapping 1:1 onto domain error kinds at the move boundary, and real moves
//! on a tempdir-backed filesystem.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use upload_file::{TempUploadedFile, TransportError, UploadError, UploadedFile};

    fn failed_upload(dir: &Path, error: TransportError) -> TempUploadedFile {
        let temp = dir.join("incoming.tmp");
        fs::write(&temp, b"payload").unwrap();
        TempUploadedFile::with_transport_error(temp, "file.bin", error)
    }

    fn assert_move_fails_with(
        error: TransportError,
        matcher: impl Fn(&UploadError) -> bool,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let file = failed_upload(dir.path(), error);

        let err = file
            .move_to(&dir.path().join("dest"), "out.bin")
            .unwrap_err();
        assert!(matcher(&err), "unexpected error kind: {err:?}");
    }

    #[test]
    fn test_can_not_write_maps() {
        assert_move_fails_with(TransportError::CanNotWrite, |e| {
            matches!(e, UploadError::CanNotWrite)
        });
    }

    #[test]
    fn test_extension_blocked_maps() {
        assert_move_fails_with(TransportError::ExtensionBlocked, |e| {
            matches!(e, UploadError::ExtensionBlocked)
        });
    }

    #[test]
    fn test_form_size_maps() {
        assert_move_fails_with(TransportError::FormSizeExceeded, |e| {
            matches!(e, UploadError::FormSizeExceeded)
        });
    }

    #[test]
    fn test_server_size_maps() {
        assert_move_fails_with(TransportError::ServerSizeExceeded, |e| {
            matches!(e, UploadError::ServerSizeExceeded)
        });
    }

    #[test]
    fn test_no_file_maps() {
        assert_move_fails_with(TransportError::NoFile, |e| {
            matches!(e, UploadError::NoFilePresent)
        });
    }

    #[test]
    fn test_no_tmp_dir_maps() {
        assert_move_fails_with(TransportError::NoTmpDir, |e| {
            matches!(e, UploadError::NoTempDirectory)
        });
    }

    #[test]
    fn test_partial_maps() {
        assert_move_fails_with(TransportError::Partial, |e| {
            matches!(e, UploadError::PartialUpload)
        });
    }

    #[test]
    fn test_other_wraps_message() {
        assert_move_fails_with(TransportError::Other("quota exhausted".into()), |e| {
            matches!(e, UploadError::Upload(msg) if msg == "quota exhausted")
        });
    }

    #[test]
    fn test_clean_upload_moves_and_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let temp = dir.path().join("incoming.tmp");
        fs::write(&temp, b"payload").unwrap();
        let dest = dir.path().join("a").join("b");

        let file = TempUploadedFile::new(&temp, "report.bin");
        let stored = file.move_to(&dest, "report-final.bin").unwrap();

        assert_eq!(stored.path(), dest.join("report-final.bin"));
        assert_eq!(fs::read(stored.path()).unwrap(), b"payload");
        assert!(!temp.exists());
    }
}
