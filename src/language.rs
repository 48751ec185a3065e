//! Language Support - Shared tree-sitter language configuration
//!
//! Single source of truth for the tree-sitter parsers this crate drives.
//! The analyzed corpus is Java source plus mapper XML; only Java goes
//! through tree-sitter (XML is handled by the streaming reader in
//! `mapping`).

use anyhow::Result;

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "java" => Ok(tree_sitter_java::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: java",
            language
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "java" => Some("java"),
        _ => None,
    }
}

/// Build a parser configured for the given language.
pub fn parser_for(language: &str) -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    let ts_language = get_tree_sitter_language(language)?;
    parser.set_language(&ts_language).map_err(|e| {
        anyhow::anyhow!("Failed to set parser language for {}: {}", language, e)
    })?;
    Ok(parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_is_supported() {
        assert!(get_tree_sitter_language("java").is_ok());
        assert_eq!(detect_language_from_extension("java"), Some("java"));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = get_tree_sitter_language("cobol").unwrap_err();
        assert!(format!("{}", err).contains("Unsupported language"));
        assert_eq!(detect_language_from_extension("xml"), None);
    }

    #[test]
    fn test_parser_for_java_parses() {
        let mut parser = parser_for("java").unwrap();
        let tree = parser.parse("class A {}", None).unwrap();
        assert!(!tree.root_node().has_error());
    }
}
