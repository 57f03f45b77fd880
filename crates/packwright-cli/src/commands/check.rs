//! Check command implementation.
//!
//! Composes the config and runs structural validation without emitting it.

use crate::cli::CheckArgs;
use crate::config::ProjectInputs;
use crate::error::Result;
use crate::ui;
use packwright_config::{BuildConfig, validate_structure};

/// Execute the check command.
///
/// # Errors
///
/// Returns load errors for bad inputs and `CliError::Invalid` when the
/// composed config fails validation.
pub fn execute(args: CheckArgs) -> Result<()> {
    let inputs = ProjectInputs::load(&args.env)?;
    match &inputs.override_file {
        Some(path) => ui::info(&format!("Using overrides from {}", path.display())),
        None => ui::info("No override file, using NODE_ENV and flags"),
    }

    let config = inputs.assembler().assemble(&inputs.overrides);
    if let Err(err) = validate_structure(&config) {
        ui::error(&err.to_string());
        return Err(err.into());
    }

    ui::success(&summary(&config));
    Ok(())
}

/// One-line description of a composed config.
pub fn summary(config: &BuildConfig) -> String {
    let environment = config.environment();
    format!(
        "Build config is valid: {} mode, {} rules, {} plugins, devtool {}{}",
        environment.mode(),
        config.rules().len(),
        config.plugins().len(),
        config.source_map().as_str(),
        if environment.report() { ", report on" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use packwright_config::{RawInput, assemble};

    #[test]
    fn summary_for_development() {
        let config = assemble("/work/app", &RawInput::new());
        assert_eq!(
            summary(&config),
            "Build config is valid: development mode, 2 rules, 3 plugins, devtool cheap-module-eval-source-map"
        );
    }

    #[test]
    fn summary_mentions_report() {
        let config = assemble(
            "/work/app",
            &RawInput::new().with_mode("production").with_report(true),
        );
        assert_eq!(
            summary(&config),
            "Build config is valid: production mode, 2 rules, 5 plugins, devtool source-map, report on"
        );
    }
}
