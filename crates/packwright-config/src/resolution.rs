//! Module resolution aliases and extensions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::layout::ProjectLayout;

/// Alias for the project root.
pub const ROOT_ALIAS: &str = "~";

/// Alias for the source directory.
pub const SOURCE_ALIAS: &str = "@";

/// Extensions tried, in order, for extensionless imports.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".js", ".json"];

/// How the engine resolves bare module references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSpec {
    aliases: IndexMap<String, PathBuf>,
    extensions: Vec<String>,
}

impl ResolutionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias. A repeated name replaces the earlier target in place.
    pub fn with_alias(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.aliases.insert(name.into(), path.into());
        self
    }

    /// Add an extension. Already-listed extensions are ignored.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        if !self.extensions.contains(&extension) {
            self.extensions.push(extension);
        }
        self
    }

    pub fn aliases(&self) -> &IndexMap<String, PathBuf> {
        &self.aliases
    }

    pub fn alias(&self, name: &str) -> Option<&Path> {
        self.aliases.get(name).map(PathBuf::as_path)
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

pub struct ResolutionSpecBuilder;

impl ResolutionSpecBuilder {
    /// `~` points at the project root and `@` at its source directory.
    pub fn build(layout: &ProjectLayout) -> ResolutionSpec {
        DEFAULT_EXTENSIONS.iter().fold(
            ResolutionSpec::new()
                .with_alias(ROOT_ALIAS, layout.root())
                .with_alias(SOURCE_ALIAS, layout.source_path()),
            |spec, ext| spec.with_extension(*ext),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_root_and_source_aliases() {
        let spec = ResolutionSpecBuilder::build(&ProjectLayout::new("/work/app"));
        assert_eq!(spec.aliases().len(), 2);
        assert_eq!(spec.alias("~"), Some(Path::new("/work/app")));
        assert_eq!(spec.alias("@"), Some(Path::new("/work/app/src")));
        assert_eq!(spec.extensions(), &[".js", ".json"]);
    }

    #[test]
    fn extensions_stay_unique() {
        let spec = ResolutionSpec::new()
            .with_extension(".js")
            .with_extension(".mjs")
            .with_extension(".js");
        assert_eq!(spec.extensions(), &[".js", ".mjs"]);
    }

    #[test]
    fn repeated_alias_keeps_position() {
        let spec = ResolutionSpec::new()
            .with_alias("a", "/one")
            .with_alias("b", "/two")
            .with_alias("a", "/three");
        let names: Vec<&str> = spec.aliases().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(spec.alias("a"), Some(Path::new("/three")));
    }
}
