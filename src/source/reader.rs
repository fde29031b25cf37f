use std::fs;
use std::path::{Path, PathBuf};

use super::file_type::classify;
use crate::error::{Result, WikiError};

/// A source file loaded into memory.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Path as supplied by the user.
    pub path: PathBuf,
    /// Full file content.
    pub content: String,
    /// Label from the file-type classifier.
    pub file_type: &'static str,
}

pub struct SourceReader;

impl SourceReader {
    /// Reads `path` as UTF-8 text and classifies it.
    ///
    /// Invalid UTF-8 is reported as a `Read` error with kind `InvalidData`.
    pub fn read(path: impl AsRef<Path>) -> Result<SourceDocument> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| WikiError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if content.is_empty() {
            return Err(WikiError::EmptySource {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), bytes = content.len(), "read source file");

        Ok(SourceDocument {
            path: path.to_path_buf(),
            content,
            file_type: classify(path),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.py");
        fs::write(&file_path, "print('hi')\n").unwrap();

        let doc = SourceReader::read(&file_path).unwrap();
        assert_eq!(doc.content, "print('hi')\n");
        assert_eq!(doc.file_type, "Python");
        assert_eq!(doc.path, file_path);
    }

    #[test]
    fn test_read_nonexistent_file() {
        let err = SourceReader::read("/nonexistent/path/to/file.txt").unwrap_err();
        match err {
            WikiError::Read { source, .. } => assert_eq!(source.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "こんにちは世界！🌍\n日本語テスト";
        write!(temp_file, "{content}").unwrap();

        let doc = SourceReader::read(temp_file.path()).unwrap();
        assert_eq!(doc.content, content);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let err = SourceReader::read(temp_file.path()).unwrap_err();
        match err {
            WikiError::Read { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let err = SourceReader::read(temp_file.path()).unwrap_err();
        assert!(matches!(err, WikiError::EmptySource { .. }));
    }

    #[test]
    fn test_read_file_multiline_verbatim() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "Line 1\r\nLine 2\n\n\tLine 3";
        write!(temp_file, "{content}").unwrap();

        let doc = SourceReader::read(temp_file.path()).unwrap();
        assert_eq!(doc.content, content);
    }
}
