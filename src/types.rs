/// Core domain types for makejump positions, word ranges, and locations.
use std::path::PathBuf;

/// Cursor location inside a document. Both fields are zero-based;
/// `character` counts `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Character offset within the line.
    pub character: usize,
    /// Line index.
    pub line: usize,
}

impl Position {
    /// Construct a position from a line index and character offset.
    pub const fn new(line: usize, character: usize) -> Self {
        return Self { character, line };
    }
}

/// Span of a single word on one line, in `char` offsets.
/// `start <= end` is guaranteed by every `WordRanges` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRange {
    /// Offset one past the last character of the word.
    pub end: usize,
    /// Line index the word lives on.
    pub line: usize,
    /// Offset of the first character of the word.
    pub start: usize,
}

/// Where a navigation request lands: a document plus a zero-based line and character.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Location {
    /// Character offset on the line. Always 0 for target declarations.
    pub character: usize,
    /// Zero-based line index of the declaration.
    pub line: usize,
    /// Document the location points into.
    pub path: PathBuf,
}

/// A target declared in a Makefile, reported at its first declaring line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TargetDeclaration {
    /// Zero-based line index of the declaration.
    pub line: usize,
    /// Target name as written before the colon.
    pub name: String,
}
