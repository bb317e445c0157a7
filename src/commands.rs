//! CLI commands for makejump: resolve, lookup, targets.

use std::path::Path;
use std::process::ExitCode;

use makejump::cancel::CancellationToken;
use makejump::config::Config;
use makejump::document::Document;
use makejump::error::Error;
use makejump::types::{Location, Position};
use makejump::{doctype, locator};

/// Exit code when the request was valid but nothing was found.
const NO_RESULT: u8 = 1;

/// How results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON value per invocation; `null` when nothing was found.
    Json,
    /// `path:line:character` per location, nothing when nothing was found.
    Text,
}

/// Options shared by every command that reads a document.
pub struct Options {
    /// Skip the Makefile name check.
    pub any_file: bool,
    /// Command names from the command line; empty means use the config.
    pub commands: Vec<String>,
    /// Output format.
    pub format: OutputFormat,
}

/// Resolve the target invoked at `position` in `file` and print its declaration.
///
/// `.makejump.toml` is read from the directory containing `file`.
/// An out-of-range position is not an error; it simply finds nothing.
///
/// # Errors
///
/// Returns errors from config loading, document reading, or output serialization.
pub fn resolve(file: &Path, position: Position, options: &Options) -> Result<ExitCode, Error> {
    let root = file.parent().unwrap_or_else(|| return Path::new(""));
    let config = Config::load(root)?.with_commands(options.commands.clone());
    let resolver = config.resolver()?;
    let document = load_document(file, options.any_file)?;

    if position.line >= document.line_count() {
        tracing::warn!(
            line = position.line,
            line_count = document.line_count(),
            "line is past the end of {}",
            file.display()
        );
    }

    let location = resolver.resolve(&document, position, &CancellationToken::new());
    return print_location(location.as_ref(), options.format);
}

/// Look up a target by name, skipping invocation classification.
///
/// # Errors
///
/// Returns errors from document reading or output serialization.
pub fn lookup(file: &Path, target: &str, options: &Options) -> Result<ExitCode, Error> {
    let document = load_document(file, options.any_file)?;
    let location = locator::find_declaration(&document, target);
    return print_location(location.as_ref(), options.format);
}

/// List every declared target with its first declaring line.
///
/// # Errors
///
/// Returns errors from document reading or output serialization.
pub fn targets(file: &Path, options: &Options) -> Result<ExitCode, Error> {
    let document = load_document(file, options.any_file)?;
    let declarations = locator::declared_targets(&document);

    match options.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&declarations)?),
        OutputFormat::Text => {
            for declaration in &declarations {
                println!("{}\t{}", declaration.line, declaration.name);
            }
        },
    }

    tracing::debug!(count = declarations.len(), "listed targets");
    return Ok(ExitCode::SUCCESS);
}

/// Read a document, refusing non-Makefiles unless `any_file` is set.
///
/// # Errors
///
/// Returns `Error::UnsupportedDocument` or any error from `Document::read`.
fn load_document(file: &Path, any_file: bool) -> Result<Document, Error> {
    if !any_file {
        doctype::require_makefile(file)?;
    }
    return Document::read(file);
}

/// Print a location (or its absence) and pick the exit code.
///
/// # Errors
///
/// Returns `Error::Json` if serialization fails.
fn print_location(location: Option<&Location>, format: OutputFormat) -> Result<ExitCode, Error> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&location)?),
        OutputFormat::Text => {
            if let Some(found) = location {
                println!("{}:{}:{}", found.path.display(), found.line, found.character);
            }
        },
    }

    if location.is_some() {
        return Ok(ExitCode::SUCCESS);
    }
    return Ok(ExitCode::from(NO_RESULT));
}
