use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads the raw bytes of the template document.
///
/// # Returns
/// * `Err(Error::NotFound)` - If nothing exists at `path`
/// * `Err(Error::ReadError)` - For any other I/O failure, including `path` being a directory
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound { path: path.display().to_string() },
        _ => Error::ReadError { path: path.display().to_string(), source },
    })
}

/// Interprets document bytes as UTF-8 text.
pub fn decode_document<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| Error::ReadError {
        path: path.as_ref().display().to_string(),
        source: std::io::Error::new(ErrorKind::InvalidData, e),
    })
}

/// Writes `content` to `dest_path`, replacing any previous content.
pub fn write_file<P: AsRef<Path>>(content: impl AsRef<[u8]>, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::write(dest_path, content)
        .map_err(|source| Error::WriteError { path: dest_path.display().to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path().join("absent.nix")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ReadError { .. }));
    }

    #[test]
    fn rejects_non_utf8_documents() {
        let err = decode_document("bin.nix", &[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::ReadError { .. }));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_file("x", dir.path().join("missing/out.nix")).unwrap_err();
        assert!(matches!(err, Error::WriteError { .. }));
    }
}
