//! Build engine plugins and their activation predicates.
//!
//! Every plugin is declared with an [`Activation`]. [`PluginComposer`] walks
//! the declarations in a fixed order and keeps only the ones active for the
//! given [`Environment`], so the output order is always the declaration
//! order with inactive entries removed.

mod kind;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::Options;
use crate::environment::Environment;

pub use kind::{Activation, PluginKind};

/// Module substituted for the global `fetch` symbol.
pub const FETCH_POLYFILL: &str = "isomorphic-fetch";

/// Language level the minifier emits.
pub const MINIFIER_ECMA_TARGET: u32 = 8;

pub const ANALYZER_REPORT_FILENAME: &str = "report.html";

/// A build engine extension point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    pub kind: PluginKind,

    /// Plugin options, forwarded verbatim
    #[serde(default)]
    pub config: Options,

    #[serde(default)]
    pub active: Activation,
}

impl Plugin {
    pub fn new(kind: PluginKind, active: Activation) -> Self {
        Self {
            kind,
            config: Options::new(),
            active,
        }
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.engine_name()
    }

    pub fn is_active(&self, env: &Environment) -> bool {
        self.active.is_active(env)
    }
}

/// Ordered plugin list that drops entries whose predicate fails.
struct PluginList<'a> {
    env: &'a Environment,
    plugins: Vec<Plugin>,
}

impl<'a> PluginList<'a> {
    fn new(env: &'a Environment) -> Self {
        Self {
            env,
            plugins: Vec::new(),
        }
    }

    fn push(mut self, plugin: Plugin) -> Self {
        if plugin.is_active(self.env) {
            tracing::trace!(plugin = plugin.name(), "plugin active");
            self.plugins.push(plugin);
        } else {
            tracing::debug!(
                plugin = plugin.name(),
                activation = ?plugin.active,
                "plugin inactive, skipping"
            );
        }
        self
    }

    fn finish(self) -> Vec<Plugin> {
        self.plugins
    }
}

pub struct PluginComposer;

impl PluginComposer {
    /// Active plugins for `env`, in declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// use packwright_config::{Environment, Mode, PluginComposer, PluginKind};
    ///
    /// let plugins = PluginComposer::build(&Environment::new(Mode::Production, true));
    /// let kinds: Vec<PluginKind> = plugins.iter().map(|p| p.kind).collect();
    /// assert_eq!(&kinds[3..], &[PluginKind::Minifier, PluginKind::BundleAnalyzer]);
    /// ```
    pub fn build(env: &Environment) -> Vec<Plugin> {
        Self::declarations(env)
            .into_iter()
            .fold(PluginList::new(env), PluginList::push)
            .finish()
    }

    /// Every plugin declaration, active or not, in declaration order.
    ///
    /// Unconditional plugins come first; conditional ones follow with the
    /// minifier ahead of the analyzer.
    pub fn declarations(env: &Environment) -> Vec<Plugin> {
        vec![
            Self::environment_define(env),
            Self::fetch_polyfill(),
            Self::utility_size_reduction(),
            Self::minifier(),
            Self::bundle_analyzer(),
        ]
    }

    /// Compile-time constants so runtime code can branch on the build mode.
    ///
    /// Values are source text, hence the JSON-encoded strings.
    fn environment_define(env: &Environment) -> Plugin {
        let mode = Value::String(env.mode().as_str().to_string()).to_string();
        Plugin::new(PluginKind::EnvironmentDefine, Activation::Always)
            .with_config("process.env.DEBUG", "false")
            .with_config("process.env.NODE_ENV", mode)
    }

    /// Offers a `fetch` substitute; the engine injects it only where the
    /// artifact references the global.
    fn fetch_polyfill() -> Plugin {
        Plugin::new(PluginKind::FetchPolyfill, Activation::Always)
            .with_config("fetch", FETCH_POLYFILL)
    }

    fn utility_size_reduction() -> Plugin {
        Plugin::new(PluginKind::UtilitySizeReduction, Activation::Always)
    }

    fn minifier() -> Plugin {
        Plugin::new(PluginKind::Minifier, Activation::ProductionOnly)
            .with_config("sourceMap", true)
            .with_config("parallel", true)
            .with_config("uglifyOptions", json!({ "ecma": MINIFIER_ECMA_TARGET }))
    }

    fn bundle_analyzer() -> Plugin {
        Plugin::new(PluginKind::BundleAnalyzer, Activation::ReportOnly)
            .with_config("analyzerMode", "static")
            .with_config("openAnalyzer", false)
            .with_config("reportFilename", ANALYZER_REPORT_FILENAME)
    }
}
