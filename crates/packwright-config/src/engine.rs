//! Rendering a [`BuildConfig`] in the build engine's field layout.
//!
//! The engine expects `entry`, `module.rules`, `plugins`, `resolve`,
//! `output` and `devtool` at the top level. Rules use `enforce: "pre"` for
//! the pre stage and a `use` list of `{ loader, options }` entries. Lint
//! loaders receive their failure policy as `failOnError` / `failOnWarning`.

use serde_json::{Map, Value, json};
use std::path::Path;

use crate::assembler::BuildConfig;
use crate::error::Result;
use crate::plugins::Plugin;
use crate::rules::{LINT_LOADER, Rule, Stage, TransformDescriptor};

fn path_value(path: &Path) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}

fn transform_value(transform: &TransformDescriptor) -> Value {
    let mut options: Map<String, Value> = transform
        .options
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    if transform.name == LINT_LOADER {
        options.insert(
            "failOnError".to_string(),
            Value::Bool(transform.on_error.fails_build()),
        );
        options.insert(
            "failOnWarning".to_string(),
            Value::Bool(transform.on_warning.fails_build()),
        );
    }

    json!({
        "loader": transform.name,
        "options": options,
    })
}

fn rule_value(rule: &Rule) -> Value {
    let mut map = Map::new();
    if rule.stage == Stage::Pre {
        map.insert("enforce".to_string(), json!("pre"));
    }
    map.insert("test".to_string(), json!(rule.test.as_str()));
    if let Some(exclude) = &rule.exclude {
        map.insert("exclude".to_string(), json!(exclude.as_str()));
    }
    map.insert(
        "use".to_string(),
        Value::Array(rule.transforms.iter().map(transform_value).collect()),
    );
    for (key, value) in &rule.options {
        map.entry(key.clone()).or_insert_with(|| value.clone());
    }
    Value::Object(map)
}

fn plugin_value(plugin: &Plugin) -> Value {
    json!({
        "name": plugin.name(),
        "options": plugin.config,
    })
}

impl BuildConfig {
    /// Engine document for this config.
    ///
    /// # Example
    ///
    /// ```
    /// use packwright_config::{assemble, RawInput};
    ///
    /// let doc = assemble("/work/app", &RawInput::new()).to_engine_value();
    /// assert_eq!(doc["module"]["rules"][0]["enforce"], "pre");
    /// assert_eq!(doc["output"]["libraryTarget"], "umd");
    /// ```
    pub fn to_engine_value(&self) -> Value {
        let resolution = self.resolution();
        let alias: Map<String, Value> = resolution
            .aliases()
            .iter()
            .map(|(name, path)| (name.clone(), path_value(path)))
            .collect();
        let output = self.output();

        json!({
            "mode": self.environment().mode().as_str(),
            "entry": self.entry().iter().map(|p| path_value(p)).collect::<Vec<_>>(),
            "module": {
                "rules": self.rules().iter().map(rule_value).collect::<Vec<_>>(),
            },
            "plugins": self.plugins().iter().map(plugin_value).collect::<Vec<_>>(),
            "resolve": {
                "alias": alias,
                "extensions": resolution.extensions(),
            },
            "output": {
                "filename": output.filename,
                "library": output.export_name,
                "libraryTarget": output.module_format.as_str(),
                "path": path_value(&output.directory),
            },
            "devtool": self.source_map().as_str(),
        })
    }

    /// Engine document as JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if JSON encoding fails.
    pub fn to_engine_string(&self, pretty: bool) -> Result<String> {
        let value = self.to_engine_value();
        let text = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use crate::assembler::assemble;
    use crate::environment::RawInput;
    use serde_json::json;

    #[test]
    fn lint_loader_receives_failure_flags() {
        let doc = assemble("/work/app", &RawInput::new()).to_engine_value();
        let lint = &doc["module"]["rules"][0];
        assert_eq!(lint["use"][0]["loader"], "eslint-loader");
        assert_eq!(lint["use"][0]["options"]["failOnError"], json!(true));
        assert_eq!(lint["use"][0]["options"]["failOnWarning"], json!(false));
        assert_eq!(lint["exclude"], "node_modules");
    }

    #[test]
    fn normal_rule_has_no_enforce_key() {
        let doc = assemble("/work/app", &RawInput::new()).to_engine_value();
        let transform = &doc["module"]["rules"][1];
        assert!(transform.get("enforce").is_none());
        assert_eq!(transform["use"][0]["options"]["plugins"], json!(["lodash"]));
        assert!(transform["use"][0]["options"].get("failOnError").is_none());
    }

    #[test]
    fn plugins_render_engine_names_in_order() {
        let raw = RawInput::new().with_mode("production").with_report(true);
        let doc = assemble("/work/app", &raw).to_engine_value();
        let names: Vec<&str> = doc["plugins"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "DefinePlugin",
                "ProvidePlugin",
                "LodashModuleReplacementPlugin",
                "UglifyJsPlugin",
                "BundleAnalyzerPlugin",
            ]
        );
    }

    #[test]
    fn compact_string_is_single_line() {
        let text = assemble("/work/app", &RawInput::new())
            .to_engine_string(false)
            .unwrap();
        assert!(!text.contains('\n'));
        assert!(text.starts_with("{\"mode\":\"development\""));
    }
}
