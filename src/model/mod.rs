//! Class model: the type nodes produced by extraction and the registry
//! that indexes them by full name.

mod registry;
mod types;

pub use registry::TypeRegistry;
pub use types::{MethodSignature, TypeKind, TypeNode, UnitExtraction, NESTING_SEPARATOR};
