//! Dependency graph over the type registry.
//!
//! Provides the graph engine, the builder that resolves textual
//! references into edges, and the connectivity query.

mod builder;
mod engine;
mod query;

pub use builder::build_graph;
pub use engine::DependencyGraph;
