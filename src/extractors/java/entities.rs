/// Entity-class extraction
use crate::extractors::base::BaseExtractor;
use crate::model::{EntityClass, Field};
use crate::utils::paths;
use anyhow::Result;
use std::path::Path;
use tree_sitter::Node;

use super::helpers;

/// Parse one entity source file into its declared classes.
///
/// Files without a package declaration get one synthesized from their
/// location under `entity_root`, with path separators replaced by dots.
pub fn parse_entity_file(
    content: &str,
    file_path: &str,
    entity_root: &Path,
) -> Result<Vec<EntityClass>> {
    let (tree, base) = super::parse_source(content, file_path)?;

    let mut package = helpers::declared_package(&base, &tree);
    if package.is_empty() {
        package = paths::package_from_path(Path::new(file_path), entity_root);
    }

    let mut classes = Vec::new();
    collect_classes(&base, tree.root_node(), &package, file_path, &mut classes);
    Ok(classes)
}

fn collect_classes(
    base: &BaseExtractor,
    node: Node,
    package: &str,
    file_path: &str,
    out: &mut Vec<EntityClass>,
) {
    if node.kind() == "class_declaration" {
        if let Some(class) = extract_class(base, node, package, file_path) {
            out.push(class);
        }
    }
    // Nested classes are declarations of their own
    for child in node.children(&mut node.walk()) {
        collect_classes(base, child, package, file_path, out);
    }
}

fn extract_class(
    base: &BaseExtractor,
    node: Node,
    package: &str,
    file_path: &str,
) -> Option<EntityClass> {
    let name_node = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "identifier")?;
    let name = base.node_text(&name_node);

    let mut fields = Vec::new();
    if let Some(body) = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "class_body")
    {
        for child in body.children(&mut body.walk()) {
            if child.kind() == "field_declaration" {
                extract_fields(base, child, &mut fields);
            }
        }
    }

    Some(EntityClass {
        name,
        package: package.to_string(),
        fields,
        file_path: file_path.to_string(),
    })
}

/// One `Field` per declarator, in declaration order - `private long a, b;`
/// yields two fields of the same type.
fn extract_fields(base: &BaseExtractor, node: Node, out: &mut Vec<Field>) {
    let Some(type_node) = node
        .children(&mut node.walk())
        .find(|c| helpers::is_type_node(c.kind()))
    else {
        return;
    };
    let field_type = helpers::type_name(base, &type_node);
    let generic_types = helpers::type_arguments(base, &type_node);

    for declarator in node
        .children(&mut node.walk())
        .filter(|c| c.kind() == "variable_declarator")
    {
        let Some(name_node) = declarator
            .children(&mut declarator.walk())
            .find(|c| c.kind() == "identifier")
        else {
            continue;
        };
        out.push(Field {
            name: base.node_text(&name_node),
            field_type: field_type.clone(),
            generic_types: generic_types.clone(),
        });
    }
}
