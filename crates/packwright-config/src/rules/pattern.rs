use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Regular expression matched against module paths.
///
/// Stored as source text so rules stay comparable and serializable; the
/// expression is compiled when matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(String);

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compile the expression.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if the source is not a valid regex.
    pub fn compile(&self) -> Result<Regex> {
        Regex::new(&self.0).map_err(|e| ConfigError::InvalidPattern {
            pattern: self.0.clone(),
            message: e.to_string(),
        })
    }

    /// Whether the pattern matches anywhere in `path`.
    ///
    /// An unparsable pattern matches nothing.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref().to_string_lossy();
        self.compile().is_ok_and(|re| re.is_match(&path))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_extension_suffix() {
        let pattern = Pattern::new(r"\.(js|json)$");
        assert!(pattern.matches("src/index.js"));
        assert!(pattern.matches("src/data.json"));
        assert!(!pattern.matches("src/index.jsx"));
        assert!(!pattern.matches("src/index.js.map"));
    }

    #[test]
    fn invalid_pattern_matches_nothing() {
        let pattern = Pattern::new("(unclosed");
        assert!(!pattern.matches("(unclosed"));
        assert!(matches!(
            pattern.compile(),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }
}
