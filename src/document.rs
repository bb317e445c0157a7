//! In-memory snapshot of a Makefile, addressed by zero-based line index.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::types::WordRange;

/// Maximum document size (16 MiB).
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// An immutable sequence of lines. Line terminators are not part of the text.
#[derive(Debug, Clone)]
pub struct Document {
    /// Line texts in order.
    lines: Vec<String>,
    /// Where the document came from; copied into every `Location`.
    path: PathBuf,
}

impl Document {
    /// Build a document from source text already in memory.
    ///
    /// Both `\n` and `\r\n` end a line. A trailing newline does not add an
    /// empty final line.
    pub fn from_source(path: impl Into<PathBuf>, source: &str) -> Self {
        return Self {
            lines: source.lines().map(String::from).collect(),
            path: path.into(),
        };
    }

    /// Read a document from disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileNotFound` if the file is missing,
    /// `Error::FileTooLarge` if it exceeds the size limit,
    /// or `Error::Io` for any other read failure.
    pub fn read(path: &Path) -> Result<Self, Error> {
        let size_bytes = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::FileNotFound { path: path.to_path_buf() });
            },
            Err(e) => return Err(Error::Io(e)),
        };
        if size_bytes > MAX_FILE_SIZE {
            return Err(Error::FileTooLarge {
                file: path.to_path_buf(),
                size_bytes,
                max_bytes: MAX_FILE_SIZE,
            });
        }

        let source = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::FileNotFound { path: path.to_path_buf() });
            },
            Err(e) => return Err(Error::Io(e)),
        };

        return Ok(Self::from_source(path, &source));
    }

    /// Text of the line at `index`, or `None` past the end.
    pub fn line_at(&self, index: usize) -> Option<&str> {
        return self.lines.get(index).map(String::as_str);
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        return self.lines.len();
    }

    /// All lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        return self.lines.iter().map(String::as_str);
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        return &self.path;
    }

    /// Text of the line strictly before `character`.
    /// Offsets past the end of the line yield the whole line.
    pub fn prefix_before(&self, line: usize, character: usize) -> Option<&str> {
        let text = self.line_at(line)?;
        let end = byte_offset(text, character);
        return text.get(..end);
    }

    /// Text covered by a word range.
    pub fn text_of(&self, range: &WordRange) -> Option<&str> {
        let text = self.line_at(range.line)?;
        let start = byte_offset(text, range.start);
        let end = byte_offset(text, range.end);
        return text.get(start..end);
    }
}

/// Convert a `char` offset into a byte offset, clamped to the end of `text`.
fn byte_offset(text: &str, character: usize) -> usize {
    return text
        .char_indices()
        .nth(character)
        .map_or(text.len(), |(idx, _)| return idx);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests")]
mod tests {
    use super::*;

    #[test]
    fn splits_on_lf_and_crlf() {
        let doc = Document::from_source("Makefile", "all: build\r\nbuild:\n\tcc main.c\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_at(0), Some("all: build"));
        assert_eq!(doc.line_at(1), Some("build:"));
        assert_eq!(doc.line_at(3), None);
    }

    #[test]
    fn empty_source_has_no_lines() {
        let doc = Document::from_source("Makefile", "");
        assert_eq!(doc.line_count(), 0);
        assert_eq!(doc.prefix_before(0, 0), None);
    }

    #[test]
    fn prefix_counts_chars_not_bytes() {
        let doc = Document::from_source("Makefile", "# ビルド: make setup");
        assert_eq!(doc.prefix_before(0, 7), Some("# ビルド: "));
        assert_eq!(doc.prefix_before(0, 100), Some("# ビルド: make setup"));
    }

    #[test]
    fn text_of_range() {
        let doc = Document::from_source("Makefile", "make -j4 setup");
        let range = WordRange { line: 0, start: 9, end: 14 };
        assert_eq!(doc.text_of(&range), Some("setup"));
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::read(&dir.path().join("Makefile")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn read_keeps_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Makefile");
        std::fs::write(&path, "setup:\n").unwrap();
        let doc = Document::read(&path).unwrap();
        assert_eq!(doc.path(), path.as_path());
        assert_eq!(doc.line_count(), 1);
    }

    #[test]
    fn oversized_file_is_rejected_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Makefile");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_FILE_SIZE + 1).unwrap();

        let err = Document::read(&path).unwrap_err();
        assert!(matches!(
            err,
            Error::FileTooLarge { size_bytes, max_bytes, .. }
                if size_bytes == MAX_FILE_SIZE + 1 && max_bytes == MAX_FILE_SIZE
        ));
    }
}
