//! Java grammar binding for the capability interface.
//!
//! Maps tree-sitter-java compilation units onto [`SourceTree`] and
//! [`TypeDeclaration`]. Annotation types and records take the class
//! form; enum constants surface as fields typed as the enum itself,
//! the way compilers desugar them.

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use super::decl::{DeclarationForm, FieldMember, Member, MethodMember, SourceTree, TypeDeclaration};
use crate::error::{ClassGraphError, Result};

/// Node kinds that declare a type.
const DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "annotation_type_declaration",
    "record_declaration",
];

/// One parsed Java compilation unit.
pub struct JavaSource {
    tree: Tree,
    source: String,
}

impl JavaSource {
    /// Parse one file's content.
    pub fn parse(path: &Path, source: String) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| ClassGraphError::ParserInit(path.to_path_buf(), e.to_string()))?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ClassGraphError::ParseFailed(path.to_path_buf()))?;

        Ok(Self { tree, source })
    }

    fn text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

impl SourceTree for JavaSource {
    type Decl<'a>
        = JavaDeclaration<'a>
    where
        Self: 'a;

    /// The package name, if the unit declares one.
    fn scope(&self) -> Option<String> {
        let root = self.tree.root_node();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() != "package_declaration" {
                continue;
            }
            let mut inner = child.walk();
            for part in child.children(&mut inner) {
                if matches!(part.kind(), "scoped_identifier" | "identifier") {
                    return Some(self.text(part).to_string());
                }
            }
        }
        None
    }

    fn declarations(&self) -> Vec<JavaDeclaration<'_>> {
        let root = self.tree.root_node();
        let mut cursor = root.walk();
        root.children(&mut cursor)
            .filter(|child| DECLARATION_KINDS.contains(&child.kind()))
            .map(|node| JavaDeclaration {
                node,
                source: &self.source,
            })
            .collect()
    }
}

/// One type declaration inside a [`JavaSource`].
pub struct JavaDeclaration<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> JavaDeclaration<'a> {
    fn text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// Types listed in an `implements` or interface `extends` clause.
    fn clause_types(&self, clause: Node<'a>) -> Vec<String> {
        let mut out = Vec::new();
        let mut cursor = clause.walk();
        for child in clause.children(&mut cursor) {
            if child.kind() == "type_list" {
                let mut inner = child.walk();
                for ty in child.named_children(&mut inner) {
                    out.push(self.text(ty).to_string());
                }
            }
        }
        out
    }

    fn collect_body(&self, body: Node<'a>, out: &mut Vec<Member<JavaDeclaration<'a>>>) {
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            match child.kind() {
                "field_declaration" | "constant_declaration" => {
                    for field in self.field_members(child) {
                        out.push(Member::Field(field));
                    }
                }
                "method_declaration" => {
                    if let Some(method) = self.method_member(child) {
                        out.push(Member::Method(method));
                    }
                }
                // Constructors carry no return type and are not modeled.
                "constructor_declaration" => {}
                "enum_constant" => {
                    if let Some(constant) = self.enum_constant_member(child) {
                        out.push(Member::Field(constant));
                    }
                }
                "enum_body_declarations" => self.collect_body(child, out),
                kind if DECLARATION_KINDS.contains(&kind) => {
                    out.push(Member::Nested(JavaDeclaration {
                        node: child,
                        source: self.source,
                    }));
                }
                _ => {}
            }
        }
    }

    /// One field declaration can carry several declarators sharing a type:
    /// `int x, y;` yields two members.
    fn field_members(&self, node: Node<'a>) -> Vec<FieldMember> {
        let Some(type_node) = node.child_by_field_name("type") else {
            return Vec::new();
        };
        let type_text = self.text(type_node).to_string();

        let mut fields = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() != "variable_declarator" {
                continue;
            }
            if let Some(name) = child.child_by_field_name("name") {
                fields.push(FieldMember {
                    name: self.text(name).to_string(),
                    type_text: type_text.clone(),
                });
            }
        }
        fields
    }

    fn method_member(&self, node: Node<'a>) -> Option<MethodMember> {
        let name = self.text(node.child_by_field_name("name")?).to_string();
        let return_type = self.text(node.child_by_field_name("type")?).to_string();

        let mut param_types = Vec::new();
        if let Some(params) = node.child_by_field_name("parameters") {
            let mut cursor = params.walk();
            for param in params.named_children(&mut cursor) {
                match param.kind() {
                    "formal_parameter" => {
                        if let Some(ty) = param.child_by_field_name("type") {
                            param_types.push(self.text(ty).to_string());
                        }
                    }
                    // spread_parameter has no type field; the type is the
                    // first named child after any modifiers.
                    "spread_parameter" => {
                        let mut inner = param.walk();
                        let ty = param
                            .named_children(&mut inner)
                            .find(|c| c.kind() != "modifiers");
                        if let Some(ty) = ty {
                            param_types.push(self.text(ty).to_string());
                        }
                    }
                    _ => {}
                }
            }
        }

        Some(MethodMember {
            name,
            return_type,
            param_types,
        })
    }

    /// An enum constant is an implicit field typed as the enum itself.
    fn enum_constant_member(&self, node: Node<'a>) -> Option<FieldMember> {
        let name = self.text(node.child_by_field_name("name")?).to_string();
        let type_text = self.name()?;
        Some(FieldMember { name, type_text })
    }

    /// Record components are implicit fields.
    fn record_component_members(&self, out: &mut Vec<Member<JavaDeclaration<'a>>>) {
        let Some(params) = self.node.child_by_field_name("parameters") else {
            return;
        };
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            if param.kind() != "formal_parameter" {
                continue;
            }
            let (Some(ty), Some(name)) = (
                param.child_by_field_name("type"),
                param.child_by_field_name("name"),
            ) else {
                continue;
            };
            out.push(Member::Field(FieldMember {
                name: self.text(name).to_string(),
                type_text: self.text(ty).to_string(),
            }));
        }
    }
}

impl<'a> TypeDeclaration for JavaDeclaration<'a> {
    fn form(&self) -> DeclarationForm {
        match self.node.kind() {
            "interface_declaration" => DeclarationForm::Interface,
            "enum_declaration" => DeclarationForm::Enum,
            _ => DeclarationForm::Class,
        }
    }

    fn name(&self) -> Option<String> {
        self.node
            .child_by_field_name("name")
            .map(|n| self.text(n).to_string())
    }

    fn modifiers(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut cursor = self.node.walk();
        for child in self.node.children(&mut cursor) {
            if child.kind() != "modifiers" {
                continue;
            }
            let mut inner = child.walk();
            for modifier in child.children(&mut inner) {
                if !matches!(modifier.kind(), "marker_annotation" | "annotation") {
                    out.push(self.text(modifier).to_string());
                }
            }
        }
        out
    }

    /// The superclass reference, verbatim, generics included.
    fn extends_types(&self) -> Vec<String> {
        let Some(superclass) = self.node.child_by_field_name("superclass") else {
            return Vec::new();
        };
        let mut cursor = superclass.walk();
        // The child iterator borrows the cursor and must drop first.
        let parent = superclass.named_children(&mut cursor).next();
        parent
            .map(|ty| vec![self.text(ty).to_string()])
            .unwrap_or_default()
    }

    fn implements_types(&self) -> Vec<String> {
        if self.node.kind() == "interface_declaration" {
            let mut out = Vec::new();
            let mut cursor = self.node.walk();
            for child in self.node.children(&mut cursor) {
                if child.kind() == "extends_interfaces" {
                    out.extend(self.clause_types(child));
                }
            }
            return out;
        }
        self.node
            .child_by_field_name("interfaces")
            .map(|clause| self.clause_types(clause))
            .unwrap_or_default()
    }

    fn members(&self) -> Vec<Member<Self>> {
        let mut out = Vec::new();
        if self.node.kind() == "record_declaration" {
            self.record_component_members(&mut out);
        }
        if let Some(body) = self.node.child_by_field_name("body") {
            self.collect_body(body, &mut out);
        }
        out
    }
}
