//
//  registry.rs
//  classgraph
//

use std::collections::HashMap;
use tracing::warn;

use super::types::{TypeNode, UnitExtraction};

/// Process-wide mapping from full name to type node, assembled once per
/// run and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeNode>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every node of one compilation unit, nested types included.
    pub fn absorb(&mut self, unit: UnitExtraction) {
        for node in unit.flatten() {
            self.insert(node);
        }
    }

    /// Insert one node keyed by its full name. A collision keeps the
    /// newer node.
    pub fn insert(&mut self, node: TypeNode) {
        let full_name = node.full_name();
        if self.types.insert(full_name.clone(), node).is_some() {
            warn!(type_name = %full_name, "duplicate type declaration, keeping the newer one");
        }
    }

    pub fn get(&self, full_name: &str) -> Option<&TypeNode> {
        self.types.get(full_name)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.types.contains_key(full_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all registered nodes. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &TypeNode> {
        self.types.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::TypeKind;

    fn unit(scope: Option<&str>, types: Vec<TypeNode>) -> UnitExtraction {
        UnitExtraction {
            scope: scope.map(str::to_string),
            types,
        }
    }

    #[test]
    fn test_absorb_assigns_package_scope() {
        let mut registry = TypeRegistry::new();
        registry.absorb(unit(
            Some("com.example"),
            vec![TypeNode::new("App", TypeKind::Class)],
        ));

        assert_eq!(registry.len(), 1);
        let node = registry.get("com.example.App").unwrap();
        assert_eq!(node.simple_name, "App");
        assert_eq!(node.scope.as_deref(), Some("com.example"));
    }

    #[test]
    fn test_absorb_flattens_nested_types() {
        let mut inner = TypeNode::new("Inner", TypeKind::Class);
        inner.nested.push(TypeNode::new("Innermost", TypeKind::Enum));
        let mut outer = TypeNode::new("Outer", TypeKind::Class);
        outer.nested.push(inner);

        let mut registry = TypeRegistry::new();
        registry.absorb(unit(Some("com.example"), vec![outer]));

        assert_eq!(registry.len(), 3);
        assert!(registry.contains("com.example.Outer"));
        assert!(registry.contains("com.example.Outer.Inner"));
        assert!(registry.contains("com.example.Outer.Inner.Innermost"));

        // The registry owns the nested nodes now.
        assert!(registry.get("com.example.Outer").unwrap().nested.is_empty());
        let inner = registry.get("com.example.Outer.Inner").unwrap();
        assert_eq!(inner.scope.as_deref(), Some("com.example.Outer"));
    }

    #[test]
    fn test_absorb_without_package() {
        let mut registry = TypeRegistry::new();
        registry.absorb(unit(None, vec![TypeNode::new("Standalone", TypeKind::Class)]));
        assert!(registry.contains("Standalone"));
    }

    #[test]
    fn test_collision_keeps_newer() {
        let mut first = TypeNode::new("App", TypeKind::Class);
        first.scope = Some("com.example".to_string());
        let mut second = TypeNode::new("App", TypeKind::Interface);
        second.scope = Some("com.example".to_string());

        let mut registry = TypeRegistry::new();
        registry.insert(first);
        registry.insert(second);

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("com.example.App").unwrap().kind,
            TypeKind::Interface
        );
    }
}
