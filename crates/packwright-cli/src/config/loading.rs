use crate::cli::EnvArgs;
use crate::commands::utils::{get_cwd, resolve_path};
use crate::error::{LoadError, Result};
use figment::{
    Figment,
    providers::{Format as _, Json, Serialized},
};
use packwright_config::{ConfigAssembler, ProjectLayout, RawInput};
use std::path::{Path, PathBuf};

/// Override file looked up in the project root when `--config` is absent.
pub const DEFAULT_OVERRIDE_FILE: &str = "packwright.json";

/// Environment variable carrying the build mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Everything composition needs from the process boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInputs {
    /// Project layout with an absolute root
    pub layout: ProjectLayout,

    /// Merged override record
    pub overrides: RawInput,

    /// Override file that contributed, if any
    pub override_file: Option<PathBuf>,
}

impl ProjectInputs {
    /// Load inputs relative to the process working directory.
    pub fn load(args: &EnvArgs) -> Result<Self> {
        let cwd = get_cwd()?;
        Self::load_in(args, &cwd)
    }

    /// Load inputs with relative paths resolved against `cwd`.
    ///
    /// Priority: CLI flags > `NODE_ENV` > override file > defaults.
    pub fn load_in(args: &EnvArgs, cwd: &Path) -> Result<Self> {
        let root = args
            .root
            .as_deref()
            .map_or_else(|| cwd.to_path_buf(), |root| resolve_path(root, cwd));
        if !root.is_dir() {
            return Err(LoadError::RootNotDirectory(root).into());
        }

        let override_file = match &args.config {
            Some(path) => {
                let path = resolve_path(path, cwd);
                if !path.is_file() {
                    return Err(LoadError::NotFound(path).into());
                }
                Some(path)
            }
            None => {
                let default_path = root.join(DEFAULT_OVERRIDE_FILE);
                default_path.is_file().then_some(default_path)
            }
        };

        let overrides = load_overrides(args, override_file.as_deref())?;

        let mut layout = ProjectLayout::new(root);
        if let Some(name) = &args.library {
            layout.export_name = name.clone();
        }

        tracing::debug!(
            root = %layout.root().display(),
            override_file = ?override_file,
            mode = ?overrides.mode,
            report = ?overrides.report,
            "loaded project inputs"
        );

        Ok(Self {
            layout,
            overrides,
            override_file,
        })
    }

    /// Assembler for the loaded layout.
    pub fn assembler(&self) -> ConfigAssembler {
        ConfigAssembler::new(self.layout.clone())
    }
}

fn load_overrides(args: &EnvArgs, override_file: Option<&Path>) -> Result<RawInput> {
    let mut figment = Figment::new().merge(Serialized::defaults(RawInput::default()));

    if let Some(path) = override_file {
        figment = figment.merge(Json::file(path));
    }

    // Taken as text; figment's `Env` would parse quoted or numeric values.
    if let Ok(mode) = std::env::var(MODE_ENV_VAR) {
        figment = figment.merge(Serialized::default("mode", mode));
    }

    // Unset flags serialize to nothing and leave lower layers in place.
    let cli = RawInput {
        mode: args.mode.clone(),
        report: args.report.then_some(true),
    };
    figment = figment.merge(Serialized::defaults(cli));

    // Extract untyped so odd value types degrade to defaults instead of failing.
    let value: serde_json::Value = figment.extract().map_err(|e| LoadError::Invalid {
        message: e.to_string(),
        hint: match override_file {
            Some(path) => format!("Check {} syntax; it must be a JSON object", path.display()),
            None => format!("Check the {} and --mode values", MODE_ENV_VAR),
        },
    })?;

    Ok(RawInput::from_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_mode_env() {
        unsafe {
            std::env::remove_var(MODE_ENV_VAR);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_any_source() {
        clear_mode_env();
        let temp = TempDir::new().unwrap();

        let inputs = ProjectInputs::load_in(&EnvArgs::default(), temp.path()).unwrap();
        assert_eq!(inputs.overrides, RawInput::default());
        assert_eq!(inputs.override_file, None);
        assert_eq!(inputs.layout.root(), temp.path());
        assert_eq!(inputs.layout.export_name, "Packwright");
    }

    #[test]
    #[serial]
    fn relative_root_resolves_against_cwd() {
        clear_mode_env();
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("app")).unwrap();

        let args = EnvArgs {
            root: Some(PathBuf::from("app")),
            ..EnvArgs::default()
        };
        let inputs = ProjectInputs::load_in(&args, temp.path()).unwrap();
        assert_eq!(inputs.layout.root(), temp.path().join("app"));
    }

    #[test]
    #[serial]
    fn missing_root_is_rejected() {
        clear_mode_env();
        let temp = TempDir::new().unwrap();

        let args = EnvArgs {
            root: Some(PathBuf::from("missing")),
            ..EnvArgs::default()
        };
        let err = ProjectInputs::load_in(&args, temp.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::CliError::Load(LoadError::RootNotDirectory(_))
        ));
    }

    #[test]
    #[serial]
    fn explicit_missing_override_file_is_an_error() {
        clear_mode_env();
        let temp = TempDir::new().unwrap();

        let args = EnvArgs {
            config: Some(PathBuf::from("nope.json")),
            ..EnvArgs::default()
        };
        let err = ProjectInputs::load_in(&args, temp.path()).unwrap_err();
        assert!(matches!(err, crate::CliError::Load(LoadError::NotFound(_))));
    }

    #[test]
    #[serial]
    fn malformed_override_file_is_an_error() {
        clear_mode_env();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_OVERRIDE_FILE), "{ not json").unwrap();

        let err = ProjectInputs::load_in(&EnvArgs::default(), temp.path()).unwrap_err();
        assert!(matches!(err, crate::CliError::Load(LoadError::Invalid { .. })));
    }

    #[test]
    #[serial]
    fn malformed_file_hint_names_the_file_used() {
        clear_mode_env();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ci.json"), "[1, 2").unwrap();

        let args = EnvArgs {
            config: Some(PathBuf::from("ci.json")),
            ..EnvArgs::default()
        };
        match ProjectInputs::load_in(&args, temp.path()) {
            Err(crate::CliError::Load(LoadError::Invalid { hint, .. })) => {
                assert!(hint.contains("ci.json"), "hint was: {hint}");
                assert!(!hint.contains(DEFAULT_OVERRIDE_FILE));
            }
            other => panic!("expected invalid overrides, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn non_boolean_report_in_file_is_ignored() {
        clear_mode_env();
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_OVERRIDE_FILE),
            r#"{ "mode": 42, "report": "yes" }"#,
        )
        .unwrap();

        let inputs = ProjectInputs::load_in(&EnvArgs::default(), temp.path()).unwrap();
        assert_eq!(inputs.overrides, RawInput::default());
    }

    #[test]
    #[serial]
    fn library_flag_sets_export_name() {
        clear_mode_env();
        let temp = TempDir::new().unwrap();

        let args = EnvArgs {
            library: Some("MyLib".to_string()),
            ..EnvArgs::default()
        };
        let inputs = ProjectInputs::load_in(&args, temp.path()).unwrap();
        assert_eq!(inputs.layout.export_name, "MyLib");
        assert_eq!(inputs.assembler().layout().export_name, "MyLib");
    }
}
