//
//  scan.rs
//  classgraph
//

use ignore::WalkBuilder;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::ScanConfig;
use crate::error::{ClassGraphError, Result};
use crate::model::{TypeNode, TypeRegistry};
use crate::parser::{extract_tree, JavaSource};

/// Directories that should never be scanned, even without .gitignore.
const BUILTIN_IGNORE: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "target",
    "build",
    "out",
    "bin",
    ".gradle",
    ".idea",
    "node_modules",
    "generated",
];

/// One file the run could not extract.
#[derive(Debug)]
pub struct ParseFailure {
    pub path: PathBuf,
    pub error: ClassGraphError,
}

/// Everything one extraction run produced: the merged registry plus the
/// files that had to be skipped.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub registry: TypeRegistry,
    pub failures: Vec<ParseFailure>,
}

/// Check if a path contains a builtin-ignored or configured directory.
fn is_excluded(path: &Path, scan: &ScanConfig) -> bool {
    path.components().any(|c| {
        if let std::path::Component::Normal(name) = c {
            let name = name.to_str().unwrap_or("");
            BUILTIN_IGNORE.contains(&name) || scan.exclude_dirs.iter().any(|d| d == name)
        } else {
            false
        }
    })
}

fn has_source_extension(path: &Path, scan: &ScanConfig) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| scan.extensions.iter().any(|wanted| wanted == ext))
}

/// Collect candidate source files under a root.
///
/// Respects .gitignore, walks recursively, and applies the extension
/// and exclusion predicates from config.
pub fn source_files(root: &Path, scan: &ScanConfig) -> Vec<PathBuf> {
    WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| !is_excluded(entry.path(), scan))
        .filter(|entry| has_source_extension(entry.path(), scan))
        .map(|entry| entry.into_path())
        .collect()
}

/// Read, extract, and flatten a single file.
fn extract_file(path: &Path) -> Result<Vec<TypeNode>> {
    let source =
        fs::read_to_string(path).map_err(|e| ClassGraphError::FileRead(path.to_path_buf(), e))?;
    let tree = JavaSource::parse(path, source)?;
    Ok(extract_tree(&tree).flatten())
}

/// Extract every source file under a root with default settings.
pub fn extract_all(root: &Path) -> ExtractionReport {
    extract_all_with(root, &ScanConfig::default())
}

/// Extract every source file under a root.
///
/// Each file is parsed, extracted, and flattened in parallel; the merge
/// into the registry happens after all workers finish. A failing file
/// is recorded and skipped, never fatal.
pub fn extract_all_with(root: &Path, scan: &ScanConfig) -> ExtractionReport {
    let files = source_files(root, scan);
    info!(root = %root.display(), files = files.len(), "scanning source tree");

    let results: Vec<(PathBuf, Result<Vec<TypeNode>>)> = files
        .into_par_iter()
        .map(|path| {
            debug!(file = %path.display(), "extracting");
            let result = extract_file(&path);
            (path, result)
        })
        .collect();

    let mut report = ExtractionReport::default();
    for (path, result) in results {
        match result {
            Ok(nodes) => {
                for node in nodes {
                    report.registry.insert(node);
                }
            }
            Err(error) => {
                warn!(file = %path.display(), error = %error, "skipping file");
                report.failures.push(ParseFailure { path, error });
            }
        }
    }

    info!(
        types = report.registry.len(),
        skipped = report.failures.len(),
        "extraction complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, rel: &str, content: &[u8]) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut file = fs::File::create(path).unwrap();
        file.write_all(content).unwrap();
    }

    #[test]
    fn test_scan_collects_java_files_only() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "a/App.java", b"class App {}");
        write_file(dir.path(), "a/notes.txt", b"not source");
        write_file(dir.path(), "b/Util.java", b"class Util {}");

        let files = source_files(dir.path(), &ScanConfig::default());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "java"));
    }

    #[test]
    fn test_scan_skips_builtin_and_configured_dirs() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "src/App.java", b"class App {}");
        write_file(dir.path(), "build/Gen.java", b"class Gen {}");
        write_file(dir.path(), "extra/Skip.java", b"class Skip {}");

        let scan = ScanConfig {
            exclude_dirs: vec!["extra".to_string()],
            ..ScanConfig::default()
        };
        let files = source_files(dir.path(), &scan);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/App.java"));
    }

    #[test]
    fn test_extract_all_merges_files_and_flattens_nesting() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "App.java",
            b"package com.example;\npublic class App { static class Helper {} }",
        );
        write_file(
            dir.path(),
            "Util.java",
            b"package com.example;\npublic class Util {}",
        );

        let report = extract_all(dir.path());
        assert!(report.failures.is_empty());
        assert_eq!(report.registry.len(), 3);
        assert!(report.registry.contains("com.example.App"));
        assert!(report.registry.contains("com.example.App.Helper"));
        assert!(report.registry.contains("com.example.Util"));
    }

    #[test]
    fn test_unreadable_file_is_isolated() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "Good.java", b"class Good {}");
        // Invalid UTF-8 makes read_to_string fail for this file only.
        write_file(dir.path(), "Bad.java", &[0xff, 0xfe, 0x00, 0x01]);

        let report = extract_all(dir.path());
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("Bad.java"));
        assert!(report.registry.contains("Good"));
    }

    #[test]
    fn test_extract_all_is_idempotent() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "A.java",
            b"package p;\nclass A extends B {}\nclass B {}",
        );

        let first = extract_all(dir.path());
        let second = extract_all(dir.path());
        assert_eq!(first.registry.len(), second.registry.len());

        let mut first_names: Vec<String> =
            first.registry.iter().map(|n| n.full_name()).collect();
        let mut second_names: Vec<String> =
            second.registry.iter().map(|n| n.full_name()).collect();
        first_names.sort();
        second_names.sort();
        assert_eq!(first_names, second_names);
    }
}
