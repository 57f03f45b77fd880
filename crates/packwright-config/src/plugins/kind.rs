use serde::{Deserialize, Serialize};

use crate::environment::Environment;

/// Plugins the composer knows how to declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    /// Injects compile-time environment constants
    EnvironmentDefine,
    /// Provides a `fetch` polyfill where the global is referenced
    FetchPolyfill,
    /// Rewrites broad utility-library imports into per-function imports
    UtilitySizeReduction,
    /// Minifies the artifact
    Minifier,
    /// Writes a bundle size visualization
    BundleAnalyzer,
}

impl PluginKind {
    /// Plugin name as the build engine knows it.
    pub fn engine_name(&self) -> &'static str {
        match self {
            PluginKind::EnvironmentDefine => "DefinePlugin",
            PluginKind::FetchPolyfill => "ProvidePlugin",
            PluginKind::UtilitySizeReduction => "LodashModuleReplacementPlugin",
            PluginKind::Minifier => "UglifyJsPlugin",
            PluginKind::BundleAnalyzer => "BundleAnalyzerPlugin",
        }
    }
}

/// Predicate deciding whether a plugin is part of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Activation {
    #[default]
    Always,
    /// Only in production mode
    ProductionOnly,
    /// Only when a report was requested
    ReportOnly,
}

impl Activation {
    pub fn is_active(&self, env: &Environment) -> bool {
        match self {
            Activation::Always => true,
            Activation::ProductionOnly => env.is_production(),
            Activation::ReportOnly => env.report(),
        }
    }
}
