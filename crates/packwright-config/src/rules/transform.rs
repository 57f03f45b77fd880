use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Options;

/// What the engine does with a finding raised by a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the build
    HardFail,
    /// Report (or drop) the finding and keep building
    WarnOnly,
}

impl FailurePolicy {
    pub fn fails_build(&self) -> bool {
        matches!(self, FailurePolicy::HardFail)
    }
}

/// One transformation step applied by a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformDescriptor {
    /// Loader name as the engine knows it
    pub name: String,

    /// Loader options, forwarded verbatim
    #[serde(default)]
    pub options: Options,

    /// Policy for error-severity findings
    pub on_error: FailurePolicy,

    /// Policy for warning-severity findings
    pub on_warning: FailurePolicy,
}

impl TransformDescriptor {
    /// Errors fail the build, warnings do not.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Options::new(),
            on_error: FailurePolicy::HardFail,
            on_warning: FailurePolicy::WarnOnly,
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn on_error(mut self, policy: FailurePolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn on_warning(mut self, policy: FailurePolicy) -> Self {
        self.on_warning = policy;
        self
    }
}
