//
//  builder.rs
//  classgraph
//

use tracing::info;

use super::engine::DependencyGraph;
use crate::model::{TypeNode, TypeRegistry};

/// Build the dependency graph of a finished registry.
///
/// Every registry node becomes a graph node. Each node's extends,
/// implements and member-type references are resolved and connected;
/// references to types outside the registry produce no edge.
pub fn build_graph(registry: &TypeRegistry) -> DependencyGraph<'_> {
    let mut graph = DependencyGraph::new();
    for node in registry.iter() {
        graph.add_type(node);
    }

    for node in registry.iter() {
        let from = node.full_name();
        let references = node
            .extends
            .iter()
            .chain(node.implements.iter())
            .chain(node.members.values());
        for reference in references {
            if let Some(to) = resolve(registry, node, reference) {
                graph.connect(&from, &to);
            }
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "dependency graph linked"
    );
    graph
}

/// Resolve a textual reference to a registered full name.
///
/// The reference is tried as already fully qualified first, then as a
/// sibling in the referencing node's own scope. Anything else stays
/// unresolved: closed-world analysis.
fn resolve(registry: &TypeRegistry, from: &TypeNode, reference: &str) -> Option<String> {
    if registry.contains(reference) {
        return Some(reference.to_string());
    }
    let sibling = from.qualify(reference);
    registry.contains(&sibling).then_some(sibling)
}
