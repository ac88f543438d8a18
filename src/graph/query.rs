//
//  query.rs
//  classgraph
//

use std::collections::{HashSet, VecDeque};

use super::engine::DependencyGraph;
use crate::error::{ClassGraphError, Result};
use crate::model::TypeNode;

impl<'r> DependencyGraph<'r> {
    /// Return the full connected component containing `full_name`,
    /// the root included.
    ///
    /// Breadth-first over the undirected adjacency; the caller must
    /// not rely on the order. An isolated root yields a singleton.
    /// A name absent from the graph is an error.
    pub fn connected_component(&self, full_name: &str) -> Result<Vec<&'r TypeNode>> {
        let root = self
            .index
            .get(full_name)
            .copied()
            .ok_or_else(|| ClassGraphError::TypeNotFound(full_name.to_string()))?;

        let mut seen = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        let mut component = Vec::new();

        while let Some(idx) = queue.pop_front() {
            component.push(self.graph[idx]);
            for neighbor in self.graph.neighbors(idx) {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(component)
    }
}
