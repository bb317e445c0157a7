//! Go-to-definition for `make <target>` references.

use crate::cancel::CancellationToken;
use crate::classifier::InvocationClassifier;
use crate::document::Document;
use crate::locator;
use crate::types::{Location, Position};
use crate::words::{PatternWords, WordRanges};

/// Resolves the word under a cursor to the line declaring it as a target.
///
/// Holds only configuration; every call to `resolve` works on the document
/// it is given and keeps nothing afterwards.
#[derive(Debug, Clone, Default)]
pub struct Resolver<W = PatternWords> {
    /// Decides whether the text before the word is a build invocation.
    classifier: InvocationClassifier,
    /// Word-boundary capability supplied by the host.
    words: W,
}

impl<W: WordRanges> Resolver<W> {
    /// Assemble a resolver from its two collaborators.
    pub const fn new(classifier: InvocationClassifier, words: W) -> Self {
        return Self { classifier, words };
    }

    /// Location of the declaration of the target invoked at `position`.
    ///
    /// Returns `None` when there is no word at the position, when the text
    /// before the word on the same line is not an invocation, when no line
    /// declares the word, when the position is outside the document, or when
    /// the request has been cancelled.
    pub fn resolve(
        &self,
        document: &Document,
        position: Position,
        cancellation: &CancellationToken,
    ) -> Option<Location> {
        if cancellation.is_cancelled() {
            tracing::debug!("request cancelled before start");
            return None;
        }

        if position.line >= document.line_count() {
            tracing::debug!(
                line = position.line,
                line_count = document.line_count(),
                "position outside document"
            );
            return None;
        }

        let Some(range) = self.words.word_range_at(document, position) else {
            tracing::debug!(line = position.line, character = position.character, "no word at position");
            return None;
        };
        let identifier = document.text_of(&range)?;
        let prefix = document.prefix_before(range.line, range.start)?;

        if !self.classifier.is_invocation_context(prefix) {
            tracing::debug!(identifier, prefix, "not an invocation");
            return None;
        }

        if cancellation.is_cancelled() {
            tracing::debug!(identifier, "request cancelled before lookup");
            return None;
        }

        let location = locator::find_declaration(document, identifier);
        if location.is_none() {
            tracing::debug!(identifier, "no declaration");
        }
        return location;
    }
}
