use std::path::Path;

use crate::classifier::{DEFAULT_COMMAND, InvocationClassifier};
use crate::error::Error;
use crate::resolver::Resolver;
use crate::words::{DEFAULT_WORD_PATTERN, PatternWords};

/// Name of the optional project configuration file.
pub const CONFIG_FILE: &str = ".makejump.toml";

/// Project configuration loaded from `.makejump.toml`.
/// Controls which command names count as invocations and how words are delimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Invocation command names, matched literally.
    pub commands: Vec<String>,
    /// Regular expression whose matches are words.
    pub word_pattern: String,
}

/// Raw TOML structure for `.makejump.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct MakejumpTomlConfig {
    /// Replaces the default command list when present.
    commands: Option<Vec<String>>,
    /// Replaces the default word pattern when present.
    word_pattern: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        return Self {
            commands: vec![DEFAULT_COMMAND.to_string()],
            word_pattern: DEFAULT_WORD_PATTERN.to_string(),
        };
    }
}

impl Config {
    /// Load config from `.makejump.toml` in the given root directory.
    /// Returns the defaults if the file doesn't exist.
    /// Returns an error if the file exists but is malformed; a config the
    /// user wrote is never silently replaced by defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
        };

        tracing::debug!(path = %path.display(), "loading config");
        return Self::parse(&content);
    }

    /// Parse config from TOML content, filling omitted keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the TOML is malformed or has unknown keys.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let raw: MakejumpTomlConfig = toml::from_str(content)?;
        let defaults = Self::default();
        return Ok(Self {
            commands: raw.commands.unwrap_or(defaults.commands),
            word_pattern: raw.word_pattern.unwrap_or(defaults.word_pattern),
        });
    }

    /// Replace the command list when `commands` is non-empty.
    #[must_use]
    pub fn with_commands(mut self, commands: Vec<String>) -> Self {
        if !commands.is_empty() {
            self.commands = commands;
        }
        return self;
    }

    /// Build a resolver from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCommandName` for a blank or missing command,
    /// or `Error::InvalidWordPattern` if the word pattern does not compile.
    pub fn resolver(&self) -> Result<Resolver, Error> {
        let classifier = InvocationClassifier::new(self.commands.as_slice())?;
        let words = PatternWords::new(&self.word_pattern)?;
        return Ok(Resolver::new(classifier, words));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests")]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.commands, vec!["make".to_string()]);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("commands = [\"make\", \"gmake\"]\n").unwrap();
        assert_eq!(config.commands, vec!["make".to_string(), "gmake".to_string()]);
        assert_eq!(config.word_pattern, DEFAULT_WORD_PATTERN);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "commands = \"make\"\n").unwrap();
        assert!(matches!(Config::load(dir.path()), Err(Error::TomlDe(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("command = [\"make\"]\n").is_err());
    }

    #[test]
    fn cli_commands_override_only_when_given() {
        let config = Config::default().with_commands(Vec::new());
        assert_eq!(config.commands, vec!["make".to_string()]);
        let config = config.with_commands(vec!["gmake".to_string()]);
        assert_eq!(config.commands, vec!["gmake".to_string()]);
    }

    #[test]
    fn bad_word_pattern_surfaces_when_building_resolver() {
        let config = Config::parse("word_pattern = \"(\"\n").unwrap();
        assert!(matches!(config.resolver(), Err(Error::InvalidWordPattern { .. })));
    }

    #[test]
    fn empty_command_list_is_rejected() {
        let config = Config::parse("commands = []\n").unwrap();
        assert!(matches!(config.resolver(), Err(Error::InvalidCommandName { .. })));
    }
}
