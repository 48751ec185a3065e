/// Annotation extraction and element flattening
use crate::extractors::base::BaseExtractor;
use crate::model::Annotation;
use std::collections::BTreeMap;
use tree_sitter::Node;

/// Reserved element key for a single unnamed annotation value.
const VALUE_KEY: &str = "value";

/// Extract the annotations attached to a declaration, flattening each
/// element list into name -> value text.
pub(super) fn extract_annotations(base: &BaseExtractor, node: Node) -> Vec<Annotation> {
    let Some(modifiers) = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "modifiers")
    else {
        return Vec::new();
    };
    modifiers
        .children(&mut modifiers.walk())
        .filter(|c| matches!(c.kind(), "annotation" | "marker_annotation"))
        .filter_map(|ann| extract_annotation(base, ann))
        .collect()
}

fn extract_annotation(base: &BaseExtractor, node: Node) -> Option<Annotation> {
    let name = node
        .children(&mut node.walk())
        .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))
        .map(|n| base.node_text(&n))?;

    let mut elements = BTreeMap::new();
    if let Some(args) = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "annotation_argument_list")
    {
        for arg in args.named_children(&mut args.walk()) {
            if arg.kind() == "element_value_pair" {
                let key = arg
                    .child_by_field_name("key")
                    .map(|n| base.node_text(&n));
                let value = arg
                    .child_by_field_name("value")
                    .map(|n| unquote(&base.node_text(&n)));
                if let (Some(key), Some(value)) = (key, value) {
                    elements.insert(key, value);
                }
            } else {
                // A single unnamed value, e.g. @Select("...")
                elements.insert(VALUE_KEY.to_string(), unquote(&base.node_text(&arg)));
            }
        }
    }

    Some(Annotation { name, elements })
}

/// Strip one layer of double quotes from a literal value.
fn unquote(text: &str) -> String {
    text.trim().trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote_strips_string_literals() {
        assert_eq!(unquote("\"id\""), "id");
        assert_eq!(unquote("20"), "20");
        assert_eq!(unquote("true"), "true");
    }
}
