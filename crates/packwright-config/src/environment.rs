//! Build environment normalization.
//!
//! Raw override input is loose: any field may be missing and the mode may be
//! any string. [`EnvironmentResolver::resolve`] turns it into an
//! [`Environment`] that every builder reads, so no builder ever looks at
//! process state.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mode string that selects a production build. Compared case-sensitively.
pub const PRODUCTION_SENTINEL: &str = "production";

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fast rebuilds, no minification (default)
    #[default]
    Development,
    /// Minified output with external source maps
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => PRODUCTION_SENTINEL,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Mode::Production)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Override record as received from the launcher layer.
///
/// Both fields are optional. See [`EnvironmentResolver::resolve`] for the
/// defaults applied to each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    /// Build mode signal (e.g. the value of `NODE_ENV`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Emit a bundle-analysis report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<bool>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_report(mut self, report: bool) -> Self {
        self.report = Some(report);
        self
    }

    /// Read an override record from an untyped JSON value.
    ///
    /// Never fails. A `mode` that is not a string is treated as absent, and
    /// `report` is only set when it is the JSON literal `true`.
    ///
    /// # Example
    ///
    /// ```
    /// use packwright_config::RawInput;
    /// use serde_json::json;
    ///
    /// let raw = RawInput::from_value(&json!({ "mode": "production", "report": "yes" }));
    /// assert_eq!(raw.mode.as_deref(), Some("production"));
    /// assert_eq!(raw.report, None);
    /// ```
    pub fn from_value(value: &Value) -> Self {
        let mode = value
            .get("mode")
            .and_then(Value::as_str)
            .map(str::to_string);
        let report = match value.get("report") {
            Some(Value::Bool(true)) => Some(true),
            _ => None,
        };
        Self { mode, report }
    }
}

/// Normalized, immutable build environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Environment {
    mode: Mode,
    report: bool,
}

impl Environment {
    pub fn new(mode: Mode, report: bool) -> Self {
        Self { mode, report }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn report(&self) -> bool {
        self.report
    }

    pub fn is_production(&self) -> bool {
        self.mode.is_production()
    }
}

/// Turns raw override input into an [`Environment`].
pub struct EnvironmentResolver;

impl EnvironmentResolver {
    /// Resolve the build environment.
    ///
    /// Total: unrecognized modes fall back to [`Mode::Development`] and a
    /// missing report flag means no report.
    pub fn resolve(raw: &RawInput) -> Environment {
        let mode = match raw.mode.as_deref() {
            Some(PRODUCTION_SENTINEL) => Mode::Production,
            Some(other) => {
                if other != Mode::Development.as_str() {
                    tracing::debug!(mode = other, "unrecognized build mode, using development");
                }
                Mode::Development
            }
            None => Mode::Development,
        };
        let report = raw.report == Some(true);

        tracing::debug!(%mode, report, "resolved build environment");
        Environment::new(mode, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_resolves_to_development_without_report() {
        let env = EnvironmentResolver::resolve(&RawInput::new());
        assert_eq!(env.mode(), Mode::Development);
        assert!(!env.report());
    }

    #[test]
    fn production_sentinel_is_case_sensitive() {
        let env = EnvironmentResolver::resolve(&RawInput::new().with_mode("Production"));
        assert_eq!(env.mode(), Mode::Development);

        let env = EnvironmentResolver::resolve(&RawInput::new().with_mode("production"));
        assert_eq!(env.mode(), Mode::Production);
    }

    #[test]
    fn report_false_stays_false() {
        let env = EnvironmentResolver::resolve(&RawInput::new().with_report(false));
        assert!(!env.report());
    }

    #[test]
    fn from_value_ignores_non_boolean_report() {
        let raw = RawInput::from_value(&json!({ "report": "true" }));
        assert_eq!(raw.report, None);

        let raw = RawInput::from_value(&json!({ "report": 1 }));
        assert_eq!(raw.report, None);
    }

    #[test]
    fn from_value_ignores_non_string_mode() {
        let raw = RawInput::from_value(&json!({ "mode": 42, "report": true }));
        assert_eq!(raw.mode, None);
        assert_eq!(raw.report, Some(true));
    }

    #[test]
    fn from_value_accepts_non_object() {
        assert_eq!(RawInput::from_value(&Value::Null), RawInput::default());
        assert_eq!(RawInput::from_value(&json!([1, 2])), RawInput::default());
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Production).unwrap(), "\"production\"");
        assert_eq!(Mode::Development.to_string(), "development");
    }
}
