// BaseExtractor: one file's content plus the node-level utilities every
// extractor needs.

use tree_sitter::Node;

pub struct BaseExtractor {
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self { file_path, content }
    }

    /// Get text from a tree-sitter node
    pub fn node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Find the Javadoc block attached to a declaration, if any.
    ///
    /// Walks previous named siblings collecting `/**` comments; stops at the
    /// first non-comment sibling or non-doc comment.
    pub fn find_doc_comment(&self, node: &Node) -> Option<String> {
        let mut comments = Vec::new();

        let mut current = node.prev_named_sibling();
        while let Some(sibling) = current {
            if sibling.kind().contains("comment") {
                let comment_text = self.node_text(&sibling);
                if comment_text.trim_start().starts_with("/**") {
                    comments.push(comment_text);
                    current = sibling.prev_named_sibling();
                } else {
                    break;
                }
            } else {
                break;
            }
        }

        if comments.is_empty() {
            None
        } else {
            // Reverse to get original order (top to bottom)
            comments.reverse();
            Some(comments.join("\n"))
        }
    }
}
