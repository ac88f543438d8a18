//
//  engine.rs
//  classgraph
//

use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

use crate::model::TypeNode;

/// Undirected dependency graph over the nodes of one finished registry.
///
/// Nodes borrow the registry, so the registry stays read-only for as
/// long as the graph lives. Edges merge the extends, implements and
/// field-type relations into one adjacency; they carry no label.
pub struct DependencyGraph<'r> {
    /// The undirected graph storing type relationships.
    pub(crate) graph: UnGraph<&'r TypeNode, ()>,
    /// Index: full name -> node index.
    pub(crate) index: HashMap<String, NodeIndex>,
}

impl<'r> DependencyGraph<'r> {
    pub(crate) fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
        }
    }

    // ─── Node Operations ────────────────────────────────────────

    /// Add a registry node to the graph. Returns the node index.
    pub(crate) fn add_type(&mut self, node: &'r TypeNode) -> NodeIndex {
        let full_name = node.full_name();
        if let Some(&idx) = self.index.get(&full_name) {
            return idx;
        }
        let idx = self.graph.add_node(node);
        self.index.insert(full_name, idx);
        idx
    }

    // ─── Edge Operations ────────────────────────────────────────

    /// Connect two nodes by full name. Self references and unknown
    /// names are dropped; a repeated pair keeps a single edge.
    pub(crate) fn connect(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        let (Some(&from), Some(&to)) = (self.index.get(a), self.index.get(b)) else {
            return;
        };
        self.graph.update_edge(from, to, ());
    }

    // ─── Accessors ──────────────────────────────────────────────

    pub fn contains(&self, full_name: &str) -> bool {
        self.index.contains_key(full_name)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes in the graph. Order is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = &'r TypeNode> + '_ {
        self.graph.node_weights().copied()
    }
}
