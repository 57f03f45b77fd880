//! Structural checks on composed configs.
//!
//! The assembler always produces a well-formed config for an absolute
//! project root. These checks guard configs assembled from a custom layout
//! and the individual parts a caller may build by hand.

use std::collections::HashSet;
use std::path::Path;

use crate::assembler::BuildConfig;
use crate::environment::Environment;
use crate::error::{ConfigError, Result};
use crate::plugins::Plugin;
use crate::resolution::ResolutionSpec;
use crate::rules::{Rule, Stage};

/// Trait for pluggable build config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Checks ordering, uniqueness and path invariants.
///
/// # Example
///
/// ```
/// use packwright_config::{assemble, ConfigValidator, RawInput, StructuralValidator};
///
/// let config = assemble("/work/app", &RawInput::new());
/// StructuralValidator.validate(&config).unwrap();
/// ```
pub struct StructuralValidator;

impl ConfigValidator for StructuralValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        validate_rules(config.rules().as_slice())?;
        validate_resolution(config.resolution())?;
        validate_plugins(config.plugins(), config.environment())?;

        if config.entry().is_empty() {
            return Err(ConfigError::NoEntries);
        }
        for entry in config.entry() {
            require_absolute("entry", entry)?;
        }
        require_absolute("output.path", &config.output().directory)?;

        Ok(())
    }
}

fn require_absolute(field: &'static str, path: &Path) -> Result<()> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(ConfigError::RelativePath {
            field,
            path: path.to_path_buf(),
        })
    }
}

/// Every pre-stage rule must precede every normal-stage rule, and every
/// pattern must compile.
pub fn validate_rules(rules: &[Rule]) -> Result<()> {
    let mut seen_normal = false;
    for (index, rule) in rules.iter().enumerate() {
        match rule.stage {
            Stage::Normal => seen_normal = true,
            Stage::Pre if seen_normal => return Err(ConfigError::RuleOrder { index }),
            Stage::Pre => {}
        }

        if rule.transforms.is_empty() {
            return Err(ConfigError::EmptyRule { index });
        }

        rule.test.compile()?;
        if let Some(exclude) = &rule.exclude {
            exclude.compile()?;
        }
    }
    Ok(())
}

pub fn validate_resolution(spec: &ResolutionSpec) -> Result<()> {
    for (name, target) in spec.aliases() {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidAlias {
                name: name.clone(),
                reason: "alias names cannot be empty".to_string(),
            });
        }
        if !target.is_absolute() {
            return Err(ConfigError::InvalidAlias {
                name: name.clone(),
                reason: format!("target {} is not an absolute path", target.display()),
            });
        }
    }

    let mut seen = HashSet::new();
    for extension in spec.extensions() {
        if !extension.starts_with('.') {
            return Err(ConfigError::InvalidExtension(extension.clone()));
        }
        if !seen.insert(extension.as_str()) {
            return Err(ConfigError::DuplicateExtension(extension.clone()));
        }
    }
    Ok(())
}

/// No plugin kind may appear twice, and every listed plugin must be active
/// for `env`.
pub fn validate_plugins(plugins: &[Plugin], env: &Environment) -> Result<()> {
    let mut seen = HashSet::new();
    for plugin in plugins {
        if !seen.insert(plugin.kind) {
            return Err(ConfigError::DuplicatePlugin(plugin.name()));
        }
        if !plugin.is_active(env) {
            return Err(ConfigError::InactivePlugin {
                name: plugin.name(),
                mode: env.mode(),
            });
        }
    }
    Ok(())
}

/// Convenience function for structural validation
pub fn validate_structure(config: &BuildConfig) -> Result<()> {
    StructuralValidator.validate(config)
}
