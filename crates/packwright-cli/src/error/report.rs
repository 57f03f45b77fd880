//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::{CliError, LoadError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Load(LoadError::Invalid { message, hint }) => {
            miette::miette!(help = hint, "Invalid overrides: {}", message)
        }
        CliError::Load(e) => miette::miette!("Configuration error: {}", e),
        CliError::Invalid(e) => miette::miette!(
            help = "Check the project root and --library values",
            "Invalid build config: {}",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn invalid_overrides_carry_help() {
        let report = cli_error_to_miette(CliError::Load(LoadError::Invalid {
            message: "expected a string".to_string(),
            hint: "Quote the mode value".to_string(),
        }));
        assert_eq!(report.to_string(), "Invalid overrides: expected a string");
        let help = report.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("Quote the mode value"));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::FileNotFound(PathBuf::from("out.json")));
        assert_eq!(report.to_string(), "File not found: out.json");
    }
}
