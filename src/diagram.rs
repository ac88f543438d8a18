//! PlantUML rendering of type nodes.
//!
//! Purely mechanical: members, methods and inheritance arrows are
//! written as extracted, with no resolution of the referenced names.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::model::TypeNode;

/// Writes one diagram file. `begin`, `paint` any number of times,
/// then `end` to flush.
pub struct PlantUmlWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl PlantUmlWriter {
    /// Create the diagram file under `dest` as `<name>.<extension>`.
    pub fn create(dest: &Path, name: &str, extension: &str) -> Result<Self> {
        let path = dest.join(format!("{name}.{extension}"));
        let file = File::create(&path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn begin(&mut self) -> Result<()> {
        writeln!(self.writer, "@startuml")?;
        Ok(())
    }

    pub fn paint(&mut self, nodes: &[&TypeNode]) -> Result<()> {
        for node in nodes {
            self.paint_node(node)?;
        }
        Ok(())
    }

    fn paint_node(&mut self, node: &TypeNode) -> Result<()> {
        let full_name = node.full_name();

        writeln!(self.writer, "{} {} {{", node.kind.keyword(), full_name)?;
        for (name, type_text) in &node.members {
            writeln!(self.writer, "  {} : {}", name, type_text)?;
        }
        for method in &node.methods {
            writeln!(
                self.writer,
                "  {}({}) : {}",
                method.name,
                method.param_types.join(", "),
                method.return_type
            )?;
        }
        writeln!(self.writer, "}}")?;

        for parent in &node.extends {
            writeln!(self.writer, "{} --|> {}", full_name, parent)?;
        }
        for parent in &node.implements {
            writeln!(self.writer, "{} ..|> {}", full_name, parent)?;
        }
        Ok(())
    }

    pub fn end(mut self) -> Result<()> {
        writeln!(self.writer, "@enduml")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render a complete diagram in one call.
///
/// Nodes are sorted by full name so the same model always produces the
/// same file. Returns the path of the written diagram.
pub fn render(
    dest: &Path,
    name: &str,
    extension: &str,
    mut nodes: Vec<&TypeNode>,
) -> Result<PathBuf> {
    nodes.sort_by_key(|n| n.full_name());

    let mut writer = PlantUmlWriter::create(dest, name, extension)?;
    let path = writer.path().to_path_buf();
    writer.begin()?;
    writer.paint(&nodes)?;
    writer.end()?;

    info!(diagram = %path.display(), types = nodes.len(), "diagram written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MethodSignature, TypeKind};
    use std::fs;
    use tempfile::tempdir;

    fn sample(name: &str, kind: TypeKind) -> TypeNode {
        let mut node = TypeNode::new(name, kind);
        node.scope = Some("com.example".to_string());
        node
    }

    #[test]
    fn test_render_full_diagram() {
        let mut dog = sample("Dog", TypeKind::Class);
        dog.extends.push("Animal".to_string());
        dog.implements.push("Pet".to_string());
        dog.members.insert("name".to_string(), "String".to_string());
        dog.methods.push(MethodSignature {
            name: "speak".to_string(),
            return_type: "void".to_string(),
            param_types: vec!["int".to_string(), "String".to_string()],
        });

        let dir = tempdir().unwrap();
        let path = render(dir.path(), "pets", "puml", vec![&dog]).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("@startuml\n"));
        assert!(content.ends_with("@enduml\n"));
        assert!(content.contains("class com.example.Dog {\n"));
        assert!(content.contains("  name : String\n"));
        assert!(content.contains("  speak(int, String) : void\n"));
        assert!(content.contains("com.example.Dog --|> Animal\n"));
        assert!(content.contains("com.example.Dog ..|> Pet\n"));
    }

    #[test]
    fn test_kind_keywords_in_output() {
        let nodes = [
            sample("A", TypeKind::AbstractClass),
            sample("E", TypeKind::Enum),
            sample("I", TypeKind::Interface),
        ];
        let dir = tempdir().unwrap();
        let path = render(dir.path(), "kinds", "puml", nodes.iter().collect()).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("abstract class com.example.A {"));
        assert!(content.contains("enum com.example.E {"));
        assert!(content.contains("interface com.example.I {"));
    }

    #[test]
    fn test_nodes_are_sorted_by_full_name() {
        let z = sample("Zebra", TypeKind::Class);
        let a = sample("Ant", TypeKind::Class);
        let dir = tempdir().unwrap();
        let path = render(dir.path(), "sorted", "puml", vec![&z, &a]).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        let ant = content.find("com.example.Ant").unwrap();
        let zebra = content.find("com.example.Zebra").unwrap();
        assert!(ant < zebra);
    }

    #[test]
    fn test_empty_model_still_renders() {
        let dir = tempdir().unwrap();
        let path = render(dir.path(), "empty", "puml", Vec::new()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "@startuml\n@enduml\n");
    }
}
