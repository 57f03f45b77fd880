//! Build configuration composer for a module bundler.
//!
//! Given a raw override record (build mode, report flag) this crate produces a
//! complete [`BuildConfig`]: entry points, ordered transformation rules,
//! environment-gated plugins, resolution aliases and the output layout. The
//! result is plain data; handing it to a build engine is the caller's job.
//!
//! # Example
//!
//! ```
//! use packwright_config::{ConfigAssembler, Mode, ProjectLayout, RawInput};
//!
//! let assembler = ConfigAssembler::new(ProjectLayout::new("/work/app"));
//! let config = assembler.assemble(&RawInput::new().with_mode("production"));
//!
//! assert_eq!(config.environment().mode(), Mode::Production);
//! assert_eq!(config.plugins().len(), 4);
//! assert_eq!(config.source_map().as_str(), "source-map");
//! ```

pub mod assembler;
pub mod engine;
pub mod environment;
pub mod error;
pub mod layout;
pub mod output;
pub mod plugins;
pub mod resolution;
pub mod rules;
pub mod validation;

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered option mapping forwarded verbatim to the build engine.
pub type Options = IndexMap<String, Value>;

pub use assembler::{BuildConfig, ConfigAssembler, SourceMapMode, assemble};
pub use environment::{Environment, EnvironmentResolver, Mode, PRODUCTION_SENTINEL, RawInput};
pub use error::{ConfigError, Result};
pub use layout::ProjectLayout;
pub use output::{ModuleFormat, OutputSpec, OutputSpecBuilder};
pub use plugins::{Activation, Plugin, PluginComposer, PluginKind};
pub use resolution::{ResolutionSpec, ResolutionSpecBuilder};
pub use rules::{FailurePolicy, Pattern, Rule, RuleSet, RuleSetBuilder, Stage, TransformDescriptor};
pub use validation::{ConfigValidator, StructuralValidator, validate_structure};
