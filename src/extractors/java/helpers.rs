/// Shared node utilities for Java extraction
use crate::extractors::base::BaseExtractor;
use tree_sitter::{Node, Tree};

/// Package declared at the top of a compilation unit, empty when absent.
pub(super) fn declared_package(base: &BaseExtractor, tree: &Tree) -> String {
    let root = tree.root_node();
    let package_node = root
        .children(&mut root.walk())
        .find(|c| c.kind() == "package_declaration");
    let Some(package_node) = package_node else {
        return String::new();
    };
    package_node
        .children(&mut package_node.walk())
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
        .map(|n| base.node_text(&n))
        .unwrap_or_default()
}

/// Kinds that can appear as the declared type of a field, parameter, or
/// return value.
pub(super) fn is_type_node(kind: &str) -> bool {
    matches!(
        kind,
        "type_identifier"
            | "generic_type"
            | "scoped_type_identifier"
            | "array_type"
            | "void_type"
            | "boolean_type"
            | "integral_type"
            | "floating_point_type"
    )
}

/// Type name of a declaration's type node, without type arguments.
///
/// `List<Long>` -> `List`.
pub(super) fn type_name(base: &BaseExtractor, node: &Node) -> String {
    if node.kind() == "generic_type" {
        node.children(&mut node.walk())
            .find(|c| matches!(c.kind(), "type_identifier" | "scoped_type_identifier"))
            .map(|n| base.node_text(&n))
            .unwrap_or_else(|| base.node_text(node))
    } else {
        base.node_text(node)
    }
}

/// Ordered type-argument names of a parameterized type, empty otherwise.
///
/// `Map<String, Long>` -> `["String", "Long"]`.
pub(super) fn type_arguments(base: &BaseExtractor, node: &Node) -> Vec<String> {
    if node.kind() != "generic_type" {
        return Vec::new();
    }
    let Some(args) = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "type_arguments")
    else {
        return Vec::new();
    };
    args.named_children(&mut args.walk())
        .map(|c| type_name(base, &c))
        .collect()
}
