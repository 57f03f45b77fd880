//! Composes the individual builders into a [`BuildConfig`].

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::environment::{Environment, EnvironmentResolver, Mode, RawInput};
use crate::layout::ProjectLayout;
use crate::output::{OutputSpec, OutputSpecBuilder};
use crate::plugins::{Plugin, PluginComposer};
use crate::resolution::{ResolutionSpec, ResolutionSpecBuilder};
use crate::rules::{RuleSet, RuleSetBuilder};

/// Source map generation mode (`devtool`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapMode {
    /// Full external `.map` file
    SourceMap,
    /// Inline, eval-wrapped, line-only map; fastest to rebuild
    CheapModuleEvalSourceMap,
}

impl SourceMapMode {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Production => SourceMapMode::SourceMap,
            Mode::Development => SourceMapMode::CheapModuleEvalSourceMap,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceMapMode::SourceMap => "source-map",
            SourceMapMode::CheapModuleEvalSourceMap => "cheap-module-eval-source-map",
        }
    }
}

/// Complete build specification handed to the build engine.
///
/// Only [`ConfigAssembler`] constructs it, and nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildConfig {
    environment: Environment,
    rules: RuleSet,
    plugins: Vec<Plugin>,
    resolution: ResolutionSpec,
    output: OutputSpec,
    entry: Vec<PathBuf>,
    source_map: SourceMapMode,
}

impl BuildConfig {
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    pub fn resolution(&self) -> &ResolutionSpec {
        &self.resolution
    }

    pub fn output(&self) -> &OutputSpec {
        &self.output
    }

    pub fn entry(&self) -> &[PathBuf] {
        &self.entry
    }

    pub fn source_map(&self) -> SourceMapMode {
        self.source_map
    }
}

/// Sole composition entry point.
#[derive(Debug, Clone)]
pub struct ConfigAssembler {
    layout: ProjectLayout,
}

impl ConfigAssembler {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Resolve the environment from `raw` and compose the config.
    pub fn assemble(&self, raw: &RawInput) -> BuildConfig {
        self.assemble_for(EnvironmentResolver::resolve(raw))
    }

    /// Compose the config for an already-resolved environment.
    pub fn assemble_for(&self, environment: Environment) -> BuildConfig {
        let config = BuildConfig {
            environment,
            rules: RuleSetBuilder::build(&environment),
            plugins: PluginComposer::build(&environment),
            resolution: ResolutionSpecBuilder::build(&self.layout),
            output: OutputSpecBuilder::build(&self.layout),
            entry: vec![self.layout.entry_path()],
            source_map: SourceMapMode::for_mode(environment.mode()),
        };

        tracing::info!(
            mode = %environment.mode(),
            report = environment.report(),
            rules = config.rules.len(),
            plugins = config.plugins.len(),
            devtool = config.source_map.as_str(),
            "composed build config"
        );
        config
    }
}

/// Compose a config for the default layout rooted at `project_root`.
///
/// # Example
///
/// ```
/// use packwright_config::{assemble, RawInput};
///
/// let config = assemble("/work/app", &RawInput::new());
/// assert_eq!(config.plugins().len(), 3);
/// assert_eq!(config.source_map().as_str(), "cheap-module-eval-source-map");
/// ```
pub fn assemble(project_root: impl AsRef<Path>, raw: &RawInput) -> BuildConfig {
    ConfigAssembler::new(ProjectLayout::new(project_root.as_ref())).assemble(raw)
}
