//! Compose command implementation.

use crate::cli::ComposeArgs;
use crate::commands::utils;
use crate::config::ProjectInputs;
use crate::error::{Result, ResultExt};
use crate::ui;
use packwright_config::validate_structure;
use std::io::Write;

/// Execute the compose command.
///
/// Loads the inputs, composes and validates the config, then prints the
/// engine document to stdout or writes it to `--out`.
pub fn execute(args: ComposeArgs) -> Result<()> {
    let inputs = ProjectInputs::load(&args.env)?;
    let document = render(&inputs, !args.compact)?;

    match &args.out {
        Some(out) => {
            let path = utils::resolve_path(out, &utils::get_cwd()?);
            std::fs::write(&path, format!("{document}\n")).with_path(&path)?;
            ui::success(&format!("Wrote build config to {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{document}")?;
        }
    }

    Ok(())
}

/// Compose, validate and serialize the config for `inputs`.
pub fn render(inputs: &ProjectInputs, pretty: bool) -> Result<String> {
    let config = inputs.assembler().assemble(&inputs.overrides);
    validate_structure(&config)?;
    Ok(config.to_engine_string(pretty)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use packwright_config::{ProjectLayout, RawInput};
    use serde_json::Value;

    fn inputs(raw: RawInput) -> ProjectInputs {
        ProjectInputs {
            layout: ProjectLayout::new("/work/app"),
            overrides: raw,
            override_file: None,
        }
    }

    #[test]
    fn compact_document_is_one_line() {
        let document = render(&inputs(RawInput::new()), false).unwrap();
        assert!(!document.contains('\n'));
    }

    #[test]
    fn production_document_uses_source_map() {
        let document = render(&inputs(RawInput::new().with_mode("production")), true).unwrap();
        let value: Value = serde_json::from_str(&document).unwrap();
        assert_eq!(value["mode"], "production");
        assert_eq!(value["devtool"], "source-map");
        assert_eq!(value["plugins"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn relative_root_fails_validation() {
        let inputs = ProjectInputs {
            layout: ProjectLayout::new("app"),
            overrides: RawInput::new(),
            override_file: None,
        };
        assert!(matches!(
            render(&inputs, true),
            Err(crate::CliError::Invalid(_))
        ));
    }
}
