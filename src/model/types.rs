//
//  types.rs
//  classgraph
//

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator joining a scope chain into a full name: `pkg.Outer.Inner`.
pub const NESTING_SEPARATOR: char = '.';

/// The declaration kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    AbstractClass,
}

impl TypeKind {
    /// PlantUML keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::AbstractClass => "abstract class",
        }
    }
}

/// One method of a type. Bodies, throws clauses and visibility are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    /// Return type as written in source.
    pub return_type: String,
    /// Parameter types as written, in declaration order.
    pub param_types: Vec<String>,
}

/// Normalized model of one declared type, top-level or nested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeNode {
    /// Unqualified name as declared.
    pub simple_name: String,
    /// Enclosing scope: the package for a top-level type, the enclosing
    /// type's full name for a nested one. Assigned at registration.
    pub scope: Option<String>,
    pub kind: TypeKind,
    /// Textual extends references, as written (may carry generics).
    pub extends: Vec<String>,
    /// Textual implements references. Interface extends lists land here too.
    pub implements: Vec<String>,
    /// Field name to declared type text. Last declaration wins on a
    /// duplicate name; insertion order is kept for rendering.
    pub members: IndexMap<String, String>,
    pub methods: Vec<MethodSignature>,
    /// Nested declarations, owned here until the registry absorbs them.
    pub nested: Vec<TypeNode>,
}

impl TypeNode {
    pub fn new(simple_name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            simple_name: simple_name.into(),
            scope: None,
            kind,
            extends: Vec::new(),
            implements: Vec::new(),
            members: IndexMap::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Unique key for this node: the scope chain joined with the
    /// nesting separator.
    pub fn full_name(&self) -> String {
        match &self.scope {
            Some(scope) if !scope.is_empty() => {
                format!("{}{}{}", scope, NESTING_SEPARATOR, self.simple_name)
            }
            _ => self.simple_name.clone(),
        }
    }

    /// Qualify a textual reference as a sibling in this node's scope.
    /// `com.example.A` qualifying `B` gives `com.example.B`.
    pub fn qualify(&self, reference: &str) -> String {
        match &self.scope {
            Some(scope) if !scope.is_empty() => {
                format!("{}{}{}", scope, NESTING_SEPARATOR, reference)
            }
            _ => reference.to_string(),
        }
    }
}

/// Extraction result for one compilation unit, before registration.
#[derive(Debug, Clone, Default)]
pub struct UnitExtraction {
    /// Scope prefix shared by all top-level declarations (the package).
    pub scope: Option<String>,
    /// Top-level declarations, each owning its nested types.
    pub types: Vec<TypeNode>,
}

impl UnitExtraction {
    /// Flatten the unit into registrable nodes, nested types included.
    ///
    /// Walks breadth-first and assigns each node's scope along the way:
    /// the unit's scope for top-level nodes, the parent's full name for
    /// nested ones. Nested lists are moved out of their parents, so
    /// each node appears in the result exactly once.
    pub fn flatten(self) -> Vec<TypeNode> {
        let mut queue: VecDeque<TypeNode> = VecDeque::new();
        for mut node in self.types {
            node.scope = self.scope.clone();
            queue.push_back(node);
        }

        let mut flat = Vec::new();
        while let Some(mut node) = queue.pop_front() {
            let parent_name = node.full_name();
            for mut child in std::mem::take(&mut node.nested) {
                child.scope = Some(parent_name.clone());
                queue.push_back(child);
            }
            flat.push(node);
        }
        flat
    }
}
