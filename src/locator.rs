//! Target lookup: find the line that declares a target.

use std::collections::HashSet;

use crate::document::Document;
use crate::types::{Location, TargetDeclaration};

/// First line declaring `identifier` as a target, at character 0.
///
/// A line declares the target when it starts with the identifier, taken
/// literally, followed by optional whitespace and a colon. Lines are scanned
/// in ascending order and the scan stops at the first match.
pub fn find_declaration(document: &Document, identifier: &str) -> Option<Location> {
    for (index, line) in document.lines().enumerate() {
        if is_declaration_of(line, identifier) {
            tracing::trace!(target_name = identifier, line = index, "declaration found");
            return Some(Location {
                character: 0,
                line: index,
                path: document.path().to_path_buf(),
            });
        }
    }

    return None;
}

/// Every declared target with the line of its first declaration, in document order.
///
/// Uses the same line predicate as `find_declaration`, so every name listed
/// here resolves to the reported line. Variable assignments (`CC := gcc`,
/// `X ::= y`) and special targets such as `.PHONY` match that predicate too
/// but are left out of the listing.
pub fn declared_targets(document: &Document) -> Vec<TargetDeclaration> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut targets = Vec::new();

    for (index, line) in document.lines().enumerate() {
        let Some(name) = declaration_name(line) else {
            continue;
        };
        // A skipped first occurrence still claims the name: lookup stops there.
        if !seen.insert(name) || is_assignment(line, name) || is_special_target(name) {
            continue;
        }
        targets.push(TargetDeclaration { line: index, name: name.to_string() });
    }

    return targets;
}

/// `^<identifier>\s*:` without building a pattern from the identifier.
fn is_declaration_of(line: &str, identifier: &str) -> bool {
    if identifier.is_empty() {
        return false;
    }
    let Some(rest) = line.strip_prefix(identifier) else {
        return false;
    };
    return rest.trim_start().starts_with(':');
}

/// Leading token of a declaration line: the text before the first whitespace
/// or colon, provided only whitespace separates it from a colon.
fn declaration_name(line: &str) -> Option<&str> {
    let end = line
        .find(|c: char| return c.is_whitespace() || c == ':')
        .unwrap_or(line.len());
    let name = line.get(..end)?;
    if name.is_empty() {
        return None;
    }
    let rest = line.get(end..)?;
    if rest.trim_start().starts_with(':') {
        return Some(name);
    }
    return None;
}

/// `name :=`, `name ::=`, `name :::=` and friends: the colons are followed by `=`.
fn is_assignment(line: &str, name: &str) -> bool {
    let Some(rest) = line.strip_prefix(name) else {
        return false;
    };
    return rest.trim_start().trim_start_matches(':').starts_with('=');
}

/// Built-in targets like `.PHONY`, `.SUFFIXES`, `.DEFAULT_GOAL`.
fn is_special_target(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('.') else {
        return false;
    };
    return !rest.is_empty() && rest.chars().all(|c| return c.is_ascii_uppercase() || c == '_');
}
