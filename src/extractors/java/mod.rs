/// Java extractors for the two source-side halves of the corpus
///
/// This module is organized into focused sub-modules:
/// - helpers: shared node utilities (package lookup, type names, type arguments)
/// - entities: entity-class extraction (classes and their fields)
/// - interfaces: mapper-interface extraction (methods, annotations, documentation)
/// - annotations: annotation element flattening
/// - javadoc: structured Javadoc parsing
mod annotations;
mod entities;
mod helpers;
mod interfaces;
mod javadoc;

pub use entities::parse_entity_file;
pub use interfaces::parse_interface_file;

use crate::extractors::base::BaseExtractor;
use crate::language;
use anyhow::Context;
use tree_sitter::Tree;

/// Parse Java source text into a tree plus the extractor around it.
///
/// A tree containing syntax errors rejects the whole file; per-file
/// isolation means the caller records the failure and moves on.
fn parse_source(content: &str, file_path: &str) -> anyhow::Result<(Tree, BaseExtractor)> {
    let mut parser = language::parser_for("java")?;
    let tree = parser
        .parse(content, None)
        .with_context(|| format!("Failed to parse file: {}", file_path))?;
    if tree.root_node().has_error() {
        anyhow::bail!("Java syntax error in {}", file_path);
    }
    Ok((
        tree,
        BaseExtractor::new(file_path.to_string(), content.to_string()),
    ))
}
