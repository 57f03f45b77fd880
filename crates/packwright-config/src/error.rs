//! Error types for build config validation and serialization.
//!
//! Composition itself never fails; these errors come from checking a
//! composed config and from rendering it for the build engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::environment::Mode;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Rule errors
    #[error("invalid rule pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("rule {index} runs in the pre stage but follows a normal-stage rule")]
    RuleOrder { index: usize },

    #[error("rule {index} has no transforms")]
    EmptyRule { index: usize },

    // Resolution errors
    #[error("alias '{name}' is invalid: {reason}")]
    InvalidAlias { name: String, reason: String },

    #[error("extension '{0}' must start with '.'")]
    InvalidExtension(String),

    #[error("extension '{0}' is listed more than once")]
    DuplicateExtension(String),

    // Layout errors
    #[error("{field} must be an absolute path: {}", path.display())]
    RelativePath { field: &'static str, path: PathBuf },

    #[error("no entry points specified")]
    NoEntries,

    // Plugin errors
    #[error("plugin {0} is declared more than once")]
    DuplicatePlugin(&'static str),

    #[error("plugin {name} is not active in {mode} mode")]
    InactivePlugin { name: &'static str, mode: Mode },

    #[error("failed to serialize build config: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_message_names_field() {
        let err = ConfigError::RelativePath {
            field: "output.path",
            path: PathBuf::from("dist"),
        };
        assert_eq!(err.to_string(), "output.path must be an absolute path: dist");
    }

    #[test]
    fn inactive_plugin_message_names_mode() {
        let err = ConfigError::InactivePlugin {
            name: "UglifyJsPlugin",
            mode: Mode::Development,
        };
        assert_eq!(
            err.to_string(),
            "plugin UglifyJsPlugin is not active in development mode"
        );
    }
}
