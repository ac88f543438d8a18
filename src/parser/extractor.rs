//! Generic model extraction over the capability interface.
//!
//! Turns one declaration into a [`TypeNode`] and one compilation unit
//! into a [`UnitExtraction`]. Malformed constructs are skipped, never
//! propagated: the graph layer already tolerates missing references.

use super::decl::{DeclarationForm, Member, SourceTree, TypeDeclaration};
use crate::model::{MethodSignature, TypeKind, TypeNode, UnitExtraction};

const VISIBILITY_KEYWORDS: &[&str] = &["public", "protected", "private"];

/// Extract one declaration and, recursively, everything nested in it.
/// Returns `None` for a declaration without a name.
pub fn extract_declaration<D: TypeDeclaration>(decl: &D) -> Option<TypeNode> {
    let simple_name = decl.name()?;
    let mut node = TypeNode::new(simple_name, classify(decl));

    node.extends = decl.extends_types();
    node.implements = decl.implements_types();

    for member in decl.members() {
        match member {
            Member::Field(field) => {
                node.members.insert(field.name, field.type_text);
            }
            Member::Method(method) => {
                node.methods.push(MethodSignature {
                    name: method.name,
                    return_type: method.return_type,
                    param_types: method.param_types,
                });
            }
            Member::Nested(nested) => {
                if let Some(child) = extract_declaration(&nested) {
                    node.nested.push(child);
                }
            }
        }
    }

    Some(node)
}

/// Extract all top-level declarations of one compilation unit.
pub fn extract_tree<T: SourceTree>(tree: &T) -> UnitExtraction {
    let types = tree
        .declarations()
        .iter()
        .filter_map(extract_declaration)
        .collect();
    UnitExtraction {
        scope: tree.scope(),
        types,
    }
}

fn classify<D: TypeDeclaration>(decl: &D) -> TypeKind {
    match decl.form() {
        DeclarationForm::Enum => TypeKind::Enum,
        DeclarationForm::Interface => TypeKind::Interface,
        DeclarationForm::Class => {
            if is_abstract_only(&decl.modifiers()) {
                TypeKind::AbstractClass
            } else {
                TypeKind::Class
            }
        }
    }
}

/// `abstract` present and nothing else beyond visibility keywords.
/// `abstract static class` stays a plain class.
fn is_abstract_only(modifiers: &[String]) -> bool {
    modifiers.iter().any(|m| m == "abstract")
        && modifiers
            .iter()
            .all(|m| m == "abstract" || VISIBILITY_KEYWORDS.contains(&m.as_str()))
}
