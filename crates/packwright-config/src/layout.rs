//! Project layout conventions.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Layout defaults
fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_entry_file() -> PathBuf {
    PathBuf::from("index.js")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_filename() -> String {
    "index.js".to_string()
}

fn default_export_name() -> String {
    "Packwright".to_string()
}

/// Where the project keeps its sources and where the artifact goes.
///
/// Every path except `root` is relative to `root`. The root should be
/// absolute; the composer never consults the filesystem to make it so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Project root directory
    pub root: PathBuf,

    /// Source directory (aliased as `@`)
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Entry module, relative to the source directory
    #[serde(default = "default_entry_file")]
    pub entry_file: PathBuf,

    /// Artifact output directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Artifact file name
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Global symbol the UMD artifact exports
    #[serde(default = "default_export_name")]
    pub export_name: String,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            source_dir: default_source_dir(),
            entry_file: default_entry_file(),
            output_dir: default_output_dir(),
            filename: default_filename(),
            export_name: default_export_name(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    pub fn entry_path(&self) -> PathBuf {
        self.source_path().join(&self.entry_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_paths_hang_off_root() {
        let layout = ProjectLayout::new("/work/app");
        assert_eq!(layout.source_path(), PathBuf::from("/work/app/src"));
        assert_eq!(layout.entry_path(), PathBuf::from("/work/app/src/index.js"));
        assert_eq!(layout.output_path(), PathBuf::from("/work/app/dist"));
    }

    #[test]
    fn deserialize_fills_defaults() {
        let layout: ProjectLayout =
            serde_json::from_value(json!({ "root": "/work/app", "output_dir": "build" })).unwrap();
        assert_eq!(layout.source_dir, PathBuf::from("src"));
        assert_eq!(layout.output_path(), PathBuf::from("/work/app/build"));
        assert_eq!(layout.export_name, "Packwright");
    }
}
