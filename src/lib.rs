//! # classgraph
//!
//! Class diagram extraction for Java source trees.
//!
//! classgraph scans a directory of source files in parallel, extracts a
//! normalized class model (classes, interfaces, enums, abstract types,
//! their fields, methods and inheritance relations, nested types
//! included), links an undirected dependency graph over the discovered
//! types, and renders either the whole model or the connected
//! neighborhood of one chosen type as a PlantUML class diagram.
//!
//! Analysis is closed-world: references to types outside the scanned
//! tree simply produce no edge. A file that cannot be read or parsed is
//! reported and skipped without aborting the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use classgraph::{build_graph, extract_all};
//! use std::path::Path;
//!
//! let report = extract_all(Path::new("./src/main/java"));
//! let graph = build_graph(&report.registry);
//!
//! for node in graph.connected_component("com.example.App").unwrap() {
//!     println!("{}", node.full_name());
//! }
//! ```

pub mod config;
pub mod diagram;
pub mod error;
pub mod graph;
pub mod model;
pub mod parser;
pub mod scan;

// Re-exports for convenience
pub use error::{ClassGraphError, Result};
pub use graph::{build_graph, DependencyGraph};
pub use model::{MethodSignature, TypeKind, TypeNode, TypeRegistry};
pub use scan::{extract_all, extract_all_with, ExtractionReport, ParseFailure};
