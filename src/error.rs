/// Crate-level error types for makejump diagnostics.
use std::path::PathBuf;

/// Every failure outside the resolution core. A resolution that finds nothing
/// is not an error and never produces one of these; each variant names the
/// file, value, or reason behind the failure.
#[allow(clippy::error_impl_error, reason = "crate-level error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested Makefile does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Document exceeds the size limit.
    #[error("file too large ({size_bytes} bytes, max {max_bytes}): {}", file.display())]
    FileTooLarge {
        /// File that exceeded the size limit.
        file: PathBuf,
        /// Maximum allowed file size in bytes.
        max_bytes: u64,
        /// Actual file size in bytes.
        size_bytes: u64,
    },

    /// A configured invocation command name is empty or all whitespace.
    #[error("invalid command name: `{name}`")]
    InvalidCommandName {
        /// The rejected command name.
        name: String,
    },

    /// The configured word pattern is not a valid regular expression.
    #[error("invalid word pattern `{pattern}`: {reason}")]
    InvalidWordPattern {
        /// Pattern as written in the configuration.
        pattern: String,
        /// Message from the regex compiler.
        reason: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON serialization of a result failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped JSON error.
        #[from]
        serde_json::Error,
    ),

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// The file is not recognized as a Makefile.
    #[error("not a makefile: {}", path.display())]
    UnsupportedDocument {
        /// Path that was rejected.
        path: PathBuf,
    },
}
