use makejump::config::CONFIG_FILE;
use makejump::error::Error;

/// ANSI bold, used for markdown headings on a terminal.
const BOLD: &str = "\x1b[1m";
/// ANSI reset.
const RESET: &str = "\x1b[0m";

/// Render an error as markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic: what happened and,
/// where there is one, how to fix it.
pub fn render_error(e: &Error) -> String {
    return match e {
        Error::FileNotFound { path } => format!(
            "\
# Error: File Not Found

`{}` does not exist.
",
            path.display()
        ),
        Error::FileTooLarge { file, size_bytes, max_bytes } => format!(
            "\
# Error: File Too Large

`{}` is {size_bytes} bytes (max {max_bytes}).
",
            file.display()
        ),
        Error::InvalidCommandName { name } => render_invalid_command(name),
        Error::InvalidWordPattern { pattern, reason } => render_invalid_word_pattern(pattern, reason),
        Error::UnsupportedDocument { path } => render_unsupported_document(&path.display().to_string()),
        Error::TomlDe(e) => format!(
            "\
# Error: Invalid TOML

{e}

## Fix

Check `{CONFIG_FILE}`.
"
        ),
        Error::Io(_) | Error::Json(_) => format!(
            "\
# Error

{e}
"
        ),
    };
}

fn render_invalid_command(name: &str) -> String {
    return format!(
        "\
# Error: Invalid Command Name

`{name}` cannot be used as an invocation command.

## Fix

List at least one non-blank command in `{CONFIG_FILE}`:

    commands = [\"make\", \"gmake\"]
"
    );
}

fn render_invalid_word_pattern(pattern: &str, reason: &str) -> String {
    return format!(
        "\
# Error: Invalid Word Pattern

`{pattern}` is not a valid regular expression:

{reason}

## Fix

Correct `word_pattern` in `{CONFIG_FILE}`, or remove it to use the default.
"
    );
}

fn render_unsupported_document(path: &str) -> String {
    return format!(
        "\
# Error: Not A Makefile

`{path}` is not recognized as a Makefile.

## Recognized files

- `Makefile`, `makefile`, `GNUmakefile`
- `*.mk`, `*.make`

## Fix

Pass `--any-file` to resolve against it anyway.
"
    );
}
