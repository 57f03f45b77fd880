//! Error handling for the Packwright CLI.
//!
//! - `CliError` is what commands return; it converts from the domain errors
//!   via `#[from]`.
//! - `LoadError` covers reading the override file and the environment.
//! - Composition errors come from `packwright_config::ConfigError`.
//!
//! At the process boundary errors become miette reports through
//! [`cli_error_to_miette`].

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Override loading errors
    #[error("Configuration error: {0}")]
    Load(#[from] LoadError),

    /// The composed config failed validation or serialization
    #[error("Invalid build config: {0}")]
    Invalid(#[from] packwright_config::ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Errors raised while gathering the override record.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An explicitly requested override file doesn't exist
    #[error("Override file not found: {}\n\nHint: Create the file or drop --config to use packwright.json", .0.display())]
    NotFound(PathBuf),

    /// Override sources could not be merged or parsed
    #[error("Invalid overrides: {message}\n\nHint: {hint}")]
    Invalid {
        /// Parser message
        message: String,
        /// Helpful hint for fixing the input
        hint: String,
    },

    /// The project root is missing or not a directory
    #[error("Project root is not a directory: {}\n\nHint: Pass an existing directory with --root", .0.display())]
    RootNotDirectory(PathBuf),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `CliError::FileNotFound` for `path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use packwright_cli::error::{Result, ResultExt};
    /// # fn run() -> Result<()> {
    /// let path = Path::new("packwright.json");
    /// std::fs::read_to_string(path).with_path(path)?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint line to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with a message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_not_found() {
        let err = LoadError::NotFound(PathBuf::from("overrides.json"));
        let msg = err.to_string();
        assert!(msg.contains("Override file not found"));
        assert!(msg.contains("overrides.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_cli_error_from_load_error() {
        let cli_err: CliError = LoadError::RootNotDirectory(PathBuf::from("/nope")).into();
        assert!(matches!(cli_err, CliError::Load(_)));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = packwright_config::ConfigError::NoEntries.into();
        assert!(matches!(cli_err, CliError::Invalid(_)));
        assert_eq!(cli_err.to_string(), "Invalid build config: no entry points specified");
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/out.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/test/out.json").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::io::Result<()> = Err(std::io::Error::other("disk full"));

        let err = result.with_hint("Free some space").unwrap_err();
        assert_eq!(err.to_string(), "I/O error: disk full\n\nHint: Free some space");
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), LoadError> =
            Err(LoadError::NotFound(PathBuf::from("test.json")));

        let err = result.context("Failed to load overrides").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load overrides: "));
    }
}
