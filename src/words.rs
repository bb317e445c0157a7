//! Word-range extraction: which word, if any, sits at a cursor position.

use regex::Regex;

use crate::document::Document;
use crate::error::Error;
use crate::types::{Position, WordRange};

/// Default word pattern: target-name characters as they appear in Makefiles.
pub const DEFAULT_WORD_PATTERN: &str = r"[A-Za-z0-9_.\-/%]+";

/// Host capability that decides word boundaries.
///
/// The resolver only relies on the observable mapping from
/// (document, position) to a range; editors plug their own rules in here.
pub trait WordRanges {
    /// Range of the word under or directly adjacent to `position`.
    fn word_range_at(&self, document: &Document, position: Position) -> Option<WordRange>;
}

/// Word boundaries defined by a regular expression: every non-empty match on
/// the line is a word.
#[derive(Debug, Clone)]
pub struct PatternWords {
    /// Compiled word pattern.
    pattern: Regex,
}

impl PatternWords {
    /// Compile a word pattern.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWordPattern` if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let compiled = Regex::new(pattern).map_err(|e| {
            return Error::InvalidWordPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            };
        })?;
        return Ok(Self { pattern: compiled });
    }
}

impl Default for PatternWords {
    #[allow(clippy::expect_used, reason = "constant pattern is a compile-time invariant")]
    fn default() -> Self {
        return Self {
            pattern: Regex::new(DEFAULT_WORD_PATTERN).expect("valid regex"),
        };
    }
}

impl WordRanges for PatternWords {
    /// A word matches when `start <= character <= end`, so a cursor resting
    /// right after the last character still selects the word.
    fn word_range_at(&self, document: &Document, position: Position) -> Option<WordRange> {
        let text = document.line_at(position.line)?;
        let mut cursor = CharCursor::default();

        for found in self.pattern.find_iter(text) {
            if found.is_empty() {
                continue;
            }
            let start = cursor.advance(text, found.start());
            if start > position.character {
                break;
            }
            let end = cursor.advance(text, found.end());
            if position.character <= end {
                return Some(WordRange { end, line: position.line, start });
            }
        }

        return None;
    }
}

/// Byte offset paired with the number of `char`s before it. Only moves
/// forward, so a whole line is counted once however many words it holds.
#[derive(Debug, Default)]
struct CharCursor {
    /// Byte offset reached so far.
    byte: usize,
    /// `char`s in `text[..byte]`.
    chars: usize,
}

impl CharCursor {
    /// Move to `byte_idx` and return the `char` offset there.
    fn advance(&mut self, text: &str, byte_idx: usize) -> usize {
        let counted = text
            .get(self.byte..byte_idx)
            .map_or(0, |s| return s.chars().count());
        self.chars = self.chars.saturating_add(counted);
        self.byte = byte_idx.max(self.byte);
        return self.chars;
    }
}
