//! Parse-tree capability interface.
//!
//! The extractor is generic over these traits rather than over any
//! concrete parser. A grammar binding only has to answer: what is
//! declared, what does it extend and implement, and what does its
//! body contain.

/// Declaration form as written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationForm {
    Class,
    Interface,
    Enum,
}

/// One field: its name and its declared type, both as written.
#[derive(Debug, Clone)]
pub struct FieldMember {
    pub name: String,
    pub type_text: String,
}

/// One method signature. Bodies are never surfaced.
#[derive(Debug, Clone)]
pub struct MethodMember {
    pub name: String,
    pub return_type: String,
    pub param_types: Vec<String>,
}

/// A single entry in a type body.
#[derive(Debug)]
pub enum Member<D> {
    Field(FieldMember),
    Method(MethodMember),
    /// A nested type declaration, extracted recursively.
    Nested(D),
}

/// One type declaration in a parse tree.
pub trait TypeDeclaration: Sized {
    fn form(&self) -> DeclarationForm;
    /// Declared name. `None` for malformed declarations, which are
    /// skipped silently.
    fn name(&self) -> Option<String>;
    /// Modifier keywords, annotations excluded.
    fn modifiers(&self) -> Vec<String>;
    /// Textual extends references. At most one for class syntax.
    fn extends_types(&self) -> Vec<String>;
    /// Textual implements references. Interface extends lists are
    /// reported here, matching how compilers surface them.
    fn implements_types(&self) -> Vec<String>;
    fn members(&self) -> Vec<Member<Self>>;
}

/// One parsed compilation unit.
pub trait SourceTree {
    type Decl<'a>: TypeDeclaration
    where
        Self: 'a;

    /// Scope prefix shared by every top-level declaration, if any.
    fn scope(&self) -> Option<String>;
    fn declarations(&self) -> Vec<Self::Decl<'_>>;
}
