//! Go-to-definition for Makefile targets.
//!
//! Given a document and a cursor position, [`resolver::Resolver`] finds the
//! word under the cursor, checks that the text before it on the same line is a
//! `make` invocation, and returns the first line declaring that word as a
//! target. Word boundaries are supplied through [`words::WordRanges`] so a
//! host can apply its own rules.

pub mod cancel;
pub mod classifier;
pub mod config;
pub mod doctype;
pub mod document;
pub mod error;
pub mod locator;
pub mod resolver;
pub mod types;
pub mod words;
