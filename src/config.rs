//
//  config.rs
//  classgraph
//

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level classgraph configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub diagram: DiagramConfig,
}

/// Source discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions treated as source files.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names skipped in addition to the builtin list.
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
}

/// Diagram output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// Extension of the generated diagram file.
    #[serde(default = "default_diagram_extension")]
    pub file_extension: String,
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

fn default_diagram_extension() -> String {
    "puml".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: Vec::new(),
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            file_extension: default_diagram_extension(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.extensions, vec!["java"]);
        assert!(config.scan.exclude_dirs.is_empty());
        assert_eq!(config.diagram.file_extension, "puml");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scan]
            exclude_dirs = ["generated"]
            "#,
        )
        .unwrap();
        assert_eq!(config.scan.exclude_dirs, vec!["generated"]);
        assert_eq!(config.scan.extensions, vec!["java"]);
        assert_eq!(config.diagram.file_extension, "puml");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = Config::load(Path::new("/nonexistent/classgraph.toml"));
        assert_eq!(config.scan.extensions, vec!["java"]);
    }
}
