/// Mapper-interface extraction
use crate::extractors::base::BaseExtractor;
use crate::model::{InterfaceDefinition, MethodSignature, Parameter};
use anyhow::Result;
use tree_sitter::Node;

use super::{annotations, helpers, javadoc};

/// Parse one interface source file into its declared interfaces.
pub fn parse_interface_file(content: &str, file_path: &str) -> Result<Vec<InterfaceDefinition>> {
    let (tree, base) = super::parse_source(content, file_path)?;
    let package = helpers::declared_package(&base, &tree);

    let mut interfaces = Vec::new();
    collect_interfaces(&base, tree.root_node(), &package, file_path, &mut interfaces);
    Ok(interfaces)
}

fn collect_interfaces(
    base: &BaseExtractor,
    node: Node,
    package: &str,
    file_path: &str,
    out: &mut Vec<InterfaceDefinition>,
) {
    if node.kind() == "interface_declaration" {
        if let Some(interface) = extract_interface(base, node, package, file_path) {
            out.push(interface);
        }
    }
    for child in node.children(&mut node.walk()) {
        collect_interfaces(base, child, package, file_path, out);
    }
}

fn extract_interface(
    base: &BaseExtractor,
    node: Node,
    package: &str,
    file_path: &str,
) -> Option<InterfaceDefinition> {
    let name_node = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "identifier")?;
    let name = base.node_text(&name_node);

    let mut methods = Vec::new();
    if let Some(body) = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "interface_body")
    {
        for child in body.children(&mut body.walk()) {
            if child.kind() == "method_declaration" {
                if let Some(method) = extract_method(base, child) {
                    methods.push(method);
                }
            }
        }
    }

    Some(InterfaceDefinition {
        name,
        package: package.to_string(),
        methods,
        file_path: file_path.to_string(),
    })
}

fn extract_method(base: &BaseExtractor, node: Node) -> Option<MethodSignature> {
    let name_node = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "identifier")?;
    let name = base.node_text(&name_node);

    // Return type comes before the method name in the AST
    let children: Vec<Node> = node.children(&mut node.walk()).collect();
    let name_index = children.iter().position(|c| c.id() == name_node.id())?;
    let return_type = children[..name_index]
        .iter()
        .find(|c| helpers::is_type_node(c.kind()))
        .map(|n| base.node_text(n))
        .unwrap_or_else(|| "void".to_string());

    let parameters = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "formal_parameters")
        .map(|params| extract_parameters(base, params))
        .unwrap_or_default();

    let annotations = annotations::extract_annotations(base, node);
    let documentation = base
        .find_doc_comment(&node)
        .map(|text| javadoc::parse_javadoc(&text))
        .unwrap_or_default();

    Some(MethodSignature {
        name,
        return_type,
        parameters,
        annotations,
        documentation,
    })
}

fn extract_parameters(base: &BaseExtractor, params: Node) -> Vec<Parameter> {
    params
        .children(&mut params.walk())
        .filter(|c| c.kind() == "formal_parameter")
        .filter_map(|param| {
            let param_type = param
                .children(&mut param.walk())
                .find(|c| helpers::is_type_node(c.kind()))
                .map(|n| base.node_text(&n))?;
            let name = param
                .children(&mut param.walk())
                .find(|c| c.kind() == "identifier")
                .map(|n| base.node_text(&n))?;
            Some(Parameter { name, param_type })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_MAPPER: &str = r#"
package com.example.mapper;

public interface UserMapper {
    /**
     * Finds a user by primary key.
     *
     * @param id the primary key
     * @return the matching row
     */
    User selectById(@Param("id") Long id);

    int updateStatus(Long id, Integer status);

    List<User> selectByIds(List<Long> ids);
}
"#;

    #[test]
    fn test_extracts_interface_and_methods() {
        let interfaces = parse_interface_file(USER_MAPPER, "UserMapper.java").unwrap();
        assert_eq!(interfaces.len(), 1);

        let mapper = &interfaces[0];
        assert_eq!(mapper.name, "UserMapper");
        assert_eq!(mapper.package, "com.example.mapper");
        assert_eq!(mapper.qualified_name(), "com.example.mapper.UserMapper");

        let names: Vec<&str> = mapper.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["selectById", "updateStatus", "selectByIds"]);
    }

    #[test]
    fn test_method_parameters_keep_declaration_order() {
        let interfaces = parse_interface_file(USER_MAPPER, "UserMapper.java").unwrap();
        let update = &interfaces[0].methods[1];
        assert_eq!(update.return_type, "int");
        assert_eq!(update.parameters.len(), 2);
        assert_eq!(update.parameters[0].name, "id");
        assert_eq!(update.parameters[0].param_type, "Long");
        assert_eq!(update.parameters[1].name, "status");
        assert_eq!(update.parameters[1].param_type, "Integer");
    }

    #[test]
    fn test_generic_return_type_kept_as_written() {
        let interfaces = parse_interface_file(USER_MAPPER, "UserMapper.java").unwrap();
        let select = &interfaces[0].methods[2];
        assert_eq!(select.return_type, "List<User>");
        assert_eq!(select.parameters[0].param_type, "List<Long>");
    }

    #[test]
    fn test_parameter_annotation_value_key() {
        let interfaces = parse_interface_file(USER_MAPPER, "UserMapper.java").unwrap();
        let select = &interfaces[0].methods[0];
        // @Param sits on the parameter, not the method
        assert!(select.annotations.is_empty());
    }

    #[test]
    fn test_method_annotations_flattened() {
        let source = r#"
package com.example.mapper;

public interface OrderMapper {
    @Select("SELECT * FROM t_order WHERE id = #{id}")
    @Options(useCache = true, timeout = 20)
    Order selectById(Long id);
}
"#;
        let interfaces = parse_interface_file(source, "OrderMapper.java").unwrap();
        let method = &interfaces[0].methods[0];
        assert_eq!(method.annotations.len(), 2);

        let select = &method.annotations[0];
        assert_eq!(select.name, "Select");
        assert_eq!(
            select.elements.get("value").map(String::as_str),
            Some("SELECT * FROM t_order WHERE id = #{id}")
        );

        let options = &method.annotations[1];
        assert_eq!(options.name, "Options");
        assert_eq!(options.elements.get("useCache").map(String::as_str), Some("true"));
        assert_eq!(options.elements.get("timeout").map(String::as_str), Some("20"));
    }

    #[test]
    fn test_javadoc_attached_to_method() {
        let interfaces = parse_interface_file(USER_MAPPER, "UserMapper.java").unwrap();
        let select = &interfaces[0].methods[0];
        assert_eq!(select.documentation.description, "Finds a user by primary key.");
        assert_eq!(
            select.documentation.params.get("id").map(String::as_str),
            Some("the primary key")
        );
        assert_eq!(select.documentation.returns, "the matching row");
    }

    #[test]
    fn test_undocumented_method_has_empty_javadoc() {
        let interfaces = parse_interface_file(USER_MAPPER, "UserMapper.java").unwrap();
        assert!(interfaces[0].methods[1].documentation.is_empty());
    }

    #[test]
    fn test_file_without_package_defaults_to_empty() {
        let source = "public interface M { int count(); }";
        let interfaces = parse_interface_file(source, "M.java").unwrap();
        assert_eq!(interfaces[0].package, "");
        assert_eq!(interfaces[0].qualified_name(), "M");
    }
}
