//! Error types for the classgraph library.

use std::path::PathBuf;
use thiserror::Error;

/// All errors the library surfaces to callers.
#[derive(Error, Debug)]
pub enum ClassGraphError {
    /// A source file could not be read.
    #[error("failed to read source file {}", .0.display())]
    FileRead(PathBuf, #[source] std::io::Error),

    /// The tree-sitter parser rejected the grammar.
    #[error("failed to initialize parser for {}: {}", .0.display(), .1)]
    ParserInit(PathBuf, String),

    /// tree-sitter returned no tree for the file.
    #[error("could not parse {}", .0.display())]
    ParseFailed(PathBuf),

    /// A connectivity query named a type that is not in the graph.
    #[error("type not found in the scanned tree: {0}")]
    TypeNotFound(String),

    /// Plain I/O failure (diagram output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClassGraphError>;
