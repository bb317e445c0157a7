//! Invocation classification: does the text before a word read as a build command?

use regex::Regex;

use crate::error::Error;

/// Command name recognized when no configuration says otherwise.
pub const DEFAULT_COMMAND: &str = "make";

/// Decides whether a line prefix starts with a build-tool invocation.
///
/// The pattern is anchored at the start of the prefix only: optional leading
/// whitespace, one of the command names, then at least one whitespace
/// character. Whatever follows (flags, variable assignments, other targets)
/// is ignored, so `make -j4 ` qualifies just like `make `.
#[derive(Debug, Clone)]
pub struct InvocationClassifier {
    /// `^\s*(?:cmd|...)\s+`, built from literal command names.
    pattern: Regex,
}

impl InvocationClassifier {
    /// Build a classifier for the given command names. Names are matched
    /// literally and trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCommandName` if the list is empty or any name
    /// is blank.
    pub fn new<S: AsRef<str>>(commands: &[S]) -> Result<Self, Error> {
        if commands.is_empty() {
            return Err(Error::InvalidCommandName { name: String::new() });
        }

        let mut alternatives = Vec::with_capacity(commands.len());
        for command in commands {
            let name = command.as_ref().trim();
            if name.is_empty() {
                return Err(Error::InvalidCommandName {
                    name: command.as_ref().to_string(),
                });
            }
            alternatives.push(regex::escape(name));
        }

        let source = format!(r"^\s*(?:{})\s+", alternatives.join("|"));
        let pattern = Regex::new(&source).map_err(|_err| {
            return Error::InvalidCommandName { name: alternatives.join(" ") };
        })?;
        return Ok(Self { pattern });
    }

    /// True when `line_prefix` begins with a command name followed by whitespace.
    pub fn is_invocation_context(&self, line_prefix: &str) -> bool {
        return self.pattern.is_match(line_prefix);
    }
}

impl Default for InvocationClassifier {
    #[allow(clippy::expect_used, reason = "escaped constant command is a compile-time invariant")]
    fn default() -> Self {
        return Self::new(&[DEFAULT_COMMAND]).expect("valid default command");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests")]
mod tests {
    use super::*;

    #[test]
    fn plain_invocation() {
        let classifier = InvocationClassifier::default();
        assert!(classifier.is_invocation_context("make "));
        assert!(classifier.is_invocation_context("\t  make  "));
    }

    #[test]
    fn invocation_with_flags() {
        let classifier = InvocationClassifier::default();
        assert!(classifier.is_invocation_context("make -j4 "));
        assert!(classifier.is_invocation_context("make -C sub -k "));
    }

    #[test]
    fn rejects_other_commands() {
        let classifier = InvocationClassifier::default();
        assert!(!classifier.is_invocation_context("echo "));
        assert!(!classifier.is_invocation_context("cmake "));
        assert!(!classifier.is_invocation_context("# run make "));
    }

    #[test]
    fn rejects_identifier_as_first_token() {
        let classifier = InvocationClassifier::default();
        assert!(!classifier.is_invocation_context(""));
        assert!(!classifier.is_invocation_context("   "));
    }

    #[test]
    fn requires_whitespace_after_command() {
        let classifier = InvocationClassifier::default();
        assert!(!classifier.is_invocation_context("make"));
        assert!(!classifier.is_invocation_context("makefile "));
    }

    #[test]
    fn shell_operators_are_not_followed() {
        let classifier = InvocationClassifier::default();
        assert!(!classifier.is_invocation_context("cd sub && make "));
    }

    #[test]
    fn configured_commands_are_literal() {
        let classifier = InvocationClassifier::new(&["gmake", "$(MAKE)"]).unwrap();
        assert!(classifier.is_invocation_context("gmake "));
        assert!(classifier.is_invocation_context("\t$(MAKE) -C lib "));
        assert!(!classifier.is_invocation_context("make "));
        assert!(!classifier.is_invocation_context("$MAKE "));
    }

    #[test]
    fn blank_command_is_rejected() {
        let err = InvocationClassifier::new(&["make", "  "]).unwrap_err();
        assert!(matches!(err, Error::InvalidCommandName { .. }));

        let none: [&str; 0] = [];
        assert!(InvocationClassifier::new(&none).is_err());
    }
}
