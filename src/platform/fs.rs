// logtool - platform/fs.rs
//
// Filesystem access for log files.
//
// The file handle is scoped to `read_document`: it is opened, read to the
// end, and dropped before decoding starts, on success and on every error
// path. Nothing is cached between calls.

use crate::core::encoding::TextEncoding;
use crate::core::model::LogDocument;
use crate::util::constants::LARGE_FILE_THRESHOLD;
use crate::util::error::ReadError;
use std::io::{self, Read};
use std::path::Path;

/// Read and strictly decode the whole file at `path`.
pub fn read_document(path: &Path, encoding: TextEncoding) -> Result<LogDocument, ReadError> {
    let bytes = read_bytes(path)?;

    let text = encoding
        .decode(&bytes)
        .map_err(|source| ReadError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.label(),
            source,
        })?;

    let document = LogDocument::from_text(&text);
    tracing::debug!(
        path = %path.display(),
        encoding = %encoding,
        bytes = bytes.len(),
        lines = document.len(),
        "Log file decoded"
    );
    Ok(document)
}

/// Read the raw content of a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, ReadError> {
    let mut file = std::fs::File::open(path).map_err(|e| classify_io_error(path, "open", e))?;

    let size_hint = match file.metadata() {
        Ok(meta) => {
            if meta.len() > LARGE_FILE_THRESHOLD {
                tracing::warn!(
                    path = %path.display(),
                    size = meta.len(),
                    threshold = LARGE_FILE_THRESHOLD,
                    "Large log file; reading it fully into memory"
                );
            }
            usize::try_from(meta.len()).unwrap_or(0)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Could not stat log file");
            0
        }
    };

    let mut bytes = Vec::with_capacity(size_hint);
    file.read_to_end(&mut bytes)
        .map_err(|e| classify_io_error(path, "read", e))?;
    Ok(bytes)
}

/// Map an `io::Error` onto the read failure taxonomy.
pub fn classify_io_error(path: &Path, operation: &'static str, e: io::Error) -> ReadError {
    match e.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => ReadError::PermissionDenied {
            path: path.to_path_buf(),
            source: e,
        },
        _ => ReadError::Io {
            path: path.to_path_buf(),
            operation,
            source: e,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_document_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"INFO start\r\nERROR disk full\n").unwrap();

        let doc = read_document(file.path(), TextEncoding::Utf8).unwrap();
        let texts: Vec<&str> = doc.texts().collect();
        assert_eq!(texts, vec!["INFO start", "ERROR disk full"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.log");
        let err = read_document(&path, TextEncoding::Utf8).unwrap_err();
        assert!(matches!(err, ReadError::NotFound { .. }), "{err:?}");
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path(), TextEncoding::Utf8).unwrap_err();
        assert!(
            matches!(err, ReadError::Io { .. } | ReadError::PermissionDenied { .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_permission_denied_classified() {
        let err = classify_io_error(
            Path::new("locked.log"),
            "open",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ReadError::PermissionDenied { .. }));
    }

    #[test]
    fn test_decode_failure_names_encoding() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"no bom here").unwrap();

        let err = read_document(file.path(), TextEncoding::Utf16).unwrap_err();
        match err {
            ReadError::Decode { encoding, .. } => assert_eq!(encoding, "utf-16"),
            other => panic!("expected Decode, got {other:?}"),
        }
    }
}
