/// Structured Javadoc parsing
use crate::model::Javadoc;

/// Parse a `/** ... */` block into description, `@param` map, and
/// `@return` text.
///
/// Text before the first tag is the description; tag continuation lines are
/// not tracked.
pub(super) fn parse_javadoc(raw: &str) -> Javadoc {
    let mut doc = Javadoc::default();
    let mut description_lines: Vec<String> = Vec::new();
    let mut seen_tag = false;

    for line in raw.lines() {
        let line = strip_decoration(line);
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("@param") {
            seen_tag = true;
            let mut parts = rest.trim().splitn(2, char::is_whitespace);
            if let Some(name) = parts.next().filter(|n| !n.is_empty()) {
                let text = parts.next().unwrap_or("").trim().to_string();
                doc.params.insert(name.to_string(), text);
            }
        } else if let Some(rest) = line.strip_prefix("@return") {
            seen_tag = true;
            doc.returns = rest.trim().to_string();
        } else if line.starts_with('@') {
            // Other tags (@throws, @see, ...) are not part of the model
            seen_tag = true;
        } else if !seen_tag {
            description_lines.push(line.to_string());
        }
    }

    doc.description = description_lines.join(" ");
    doc
}

/// Remove comment markers and leading asterisk decoration from one line.
fn strip_decoration(line: &str) -> &str {
    let line = line.trim();
    let line = line.strip_prefix("/**").unwrap_or(line);
    let line = line.strip_suffix("*/").unwrap_or(line);
    line.trim_start_matches('*').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_block() {
        let raw = "/**\n * Finds a user.\n *\n * @param id the key\n * @return the row\n */";
        let doc = parse_javadoc(raw);
        assert_eq!(doc.description, "Finds a user.");
        assert_eq!(doc.params.get("id").map(String::as_str), Some("the key"));
        assert_eq!(doc.returns, "the row");
    }

    #[test]
    fn test_single_line_block() {
        let doc = parse_javadoc("/** Counts rows. */");
        assert_eq!(doc.description, "Counts rows.");
        assert!(doc.params.is_empty());
        assert_eq!(doc.returns, "");
    }

    #[test]
    fn test_multi_line_description_joined() {
        let raw = "/**\n * Finds a user\n * by primary key.\n */";
        let doc = parse_javadoc(raw);
        assert_eq!(doc.description, "Finds a user by primary key.");
    }

    #[test]
    fn test_param_without_description() {
        let doc = parse_javadoc("/** @param id */");
        assert_eq!(doc.params.get("id").map(String::as_str), Some(""));
    }

    #[test]
    fn test_unknown_tags_ignored() {
        let raw = "/**\n * Deletes a row.\n * @throws DaoException on failure\n */";
        let doc = parse_javadoc(raw);
        assert_eq!(doc.description, "Deletes a row.");
        assert!(doc.params.is_empty());
    }
}
