//! File transformation rules.
//!
//! A [`RuleSet`] is the engine's `module.rules` list. Rules in the
//! [`Stage::Pre`] stage run before [`Stage::Normal`] rules on any file that
//! matches both, and the builder also places them first in the list so an
//! engine that only honors list order gets the same result.

mod pattern;
mod transform;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::Path;

use crate::Options;
use crate::environment::Environment;

pub use pattern::Pattern;
pub use transform::{FailurePolicy, TransformDescriptor};

/// Dependency directory excluded from every rule.
pub const DEPENDENCY_DIR_PATTERN: &str = "node_modules";

/// Source-text files the lint pass checks (scripts and data files).
pub const LINT_TEST_PATTERN: &str = r"\.(js|json)$";

/// Script files the language transform handles.
pub const TRANSFORM_TEST_PATTERN: &str = r"\.js$";

pub const LINT_LOADER: &str = "eslint-loader";
pub const TRANSFORM_LOADER: &str = "babel-loader";

/// Transform plugin that drops unused utility-library code paths.
pub const UTILITY_TRIM_PLUGIN: &str = "lodash";

/// Rule evaluation stage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Runs before every normal rule (`enforce: "pre"`)
    Pre,
    #[default]
    Normal,
}

/// A file-pattern-scoped list of transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub stage: Stage,

    /// Files the rule applies to
    pub test: Pattern,

    /// Files skipped even when `test` matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Pattern>,

    /// Transforms in application order
    #[serde(default)]
    pub transforms: Vec<TransformDescriptor>,

    /// Extra rule-level options spliced into the engine rule
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    pub options: Options,
}

impl Rule {
    pub fn new(stage: Stage, test: Pattern) -> Self {
        Self {
            stage,
            test,
            exclude: None,
            transforms: Vec::new(),
            options: Options::new(),
        }
    }

    pub fn with_exclude(mut self, exclude: Pattern) -> Self {
        self.exclude = Some(exclude);
        self
    }

    pub fn with_transform(mut self, transform: TransformDescriptor) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Whether this rule applies to `path`: `test` matches and `exclude` does not.
    pub fn applies_to(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.test.matches(path) && !self.exclude.as_ref().is_some_and(|ex| ex.matches(path))
    }
}

/// Ordered rule list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<Rule>);

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule) {
        self.0.push(rule);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.0
    }

    /// Rules that apply to `path`, in the order the engine applies them.
    ///
    /// All matching pre-stage rules come first, then normal-stage rules;
    /// within a stage the declared order is kept.
    ///
    /// # Example
    ///
    /// ```
    /// use packwright_config::{Environment, RuleSetBuilder, Stage};
    ///
    /// let rules = RuleSetBuilder::build(&Environment::default());
    /// let applied: Vec<Stage> = rules.matching("src/index.js").iter().map(|r| r.stage).collect();
    /// assert_eq!(applied, vec![Stage::Pre, Stage::Normal]);
    ///
    /// assert_eq!(rules.matching("src/data.json").len(), 1);
    /// assert!(rules.matching("node_modules/lodash/index.js").is_empty());
    /// ```
    pub fn matching(&self, path: impl AsRef<Path>) -> Vec<&Rule> {
        let path = path.as_ref();
        let mut matched: Vec<&Rule> = self.0.iter().filter(|rule| rule.applies_to(path)).collect();
        // stable: keeps declared order within a stage
        matched.sort_by_key(|rule| rule.stage);
        matched
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds the rule list: lint pre-pass, then the language transform.
pub struct RuleSetBuilder;

impl RuleSetBuilder {
    /// Always two rules; `env` does not change rule composition.
    pub fn build(_env: &Environment) -> RuleSet {
        let rules = RuleSet::from(vec![Self::lint_rule(), Self::transform_rule()]);
        tracing::trace!(count = rules.len(), "built rule set");
        rules
    }

    fn lint_rule() -> Rule {
        Rule::new(Stage::Pre, Pattern::new(LINT_TEST_PATTERN))
            .with_exclude(Pattern::new(DEPENDENCY_DIR_PATTERN))
            .with_transform(
                TransformDescriptor::new(LINT_LOADER)
                    .on_error(FailurePolicy::HardFail)
                    .on_warning(FailurePolicy::WarnOnly),
            )
    }

    fn transform_rule() -> Rule {
        Rule::new(Stage::Normal, Pattern::new(TRANSFORM_TEST_PATTERN))
            .with_exclude(Pattern::new(DEPENDENCY_DIR_PATTERN))
            .with_transform(
                TransformDescriptor::new(TRANSFORM_LOADER)
                    .with_option("plugins", json!([UTILITY_TRIM_PLUGIN])),
            )
    }
}
