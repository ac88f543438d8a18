//! Source parsing: the capability interface the extractor is generic
//! over, the generic extractor itself, and the Java grammar binding.

mod decl;
mod extractor;
mod java;

pub use decl::{DeclarationForm, FieldMember, Member, MethodMember, SourceTree, TypeDeclaration};
pub use extractor::{extract_declaration, extract_tree};
pub use java::{JavaDeclaration, JavaSource};
