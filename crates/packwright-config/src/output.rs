//! Artifact naming and module format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::layout::ProjectLayout;

/// Module definition the artifact is wrapped in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// Universal module definition: AMD, CommonJS, or a plain global
    #[default]
    Umd,
}

impl ModuleFormat {
    /// Name the engine expects for `output.libraryTarget`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleFormat::Umd => "umd",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub filename: String,
    pub module_format: ModuleFormat,
    /// Symbol the artifact exports (`output.library`)
    pub export_name: String,
    pub directory: PathBuf,
}

pub struct OutputSpecBuilder;

impl OutputSpecBuilder {
    pub fn build(layout: &ProjectLayout) -> OutputSpec {
        OutputSpec {
            filename: layout.filename.clone(),
            module_format: ModuleFormat::Umd,
            export_name: layout.export_name.clone(),
            directory: layout.output_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_is_umd_under_dist() {
        let output = OutputSpecBuilder::build(&ProjectLayout::new("/work/app"));
        assert_eq!(output.filename, "index.js");
        assert_eq!(output.module_format, ModuleFormat::Umd);
        assert_eq!(output.module_format.as_str(), "umd");
        assert_eq!(output.export_name, "Packwright");
        assert_eq!(output.directory, PathBuf::from("/work/app/dist"));
    }
}
