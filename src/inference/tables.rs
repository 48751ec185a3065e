/// Table-name extraction from raw mapping-document text
use once_cell::sync::Lazy;
use regex::Regex;

/// SQL keywords a table name can follow, checked against the raw text.
const TABLE_KEYWORDS: [&str; 4] = ["FROM", "JOIN", "UPDATE", "INTO"];

/// Quoting and bracket characters stripped from an extracted table token.
const QUOTING: [char; 4] = ['`', '[', ']', '"'];

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("token pattern"));

/// The candidate table name of one document: the first whitespace-delimited
/// token following the keyword that occurs earliest in the text, stripped
/// of quoting characters.
///
/// `None` when no keyword occurs, or when nothing follows it. This is a
/// textual heuristic, not SQL parsing; it only feeds the prefix vote.
pub fn first_table_name(content: &str) -> Option<String> {
    let (pos, keyword) = TABLE_KEYWORDS
        .iter()
        .filter_map(|kw| content.find(kw).map(|pos| (pos, *kw)))
        .min_by_key(|(pos, _)| *pos)?;

    let rest = &content[pos + keyword.len()..];
    let token = TOKEN.find(rest)?.as_str();
    let table = token.trim_matches(|c| QUOTING.contains(&c));
    if table.is_empty() {
        None
    } else {
        Some(table.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_clause() {
        assert_eq!(
            first_table_name("SELECT * FROM t_user WHERE id = 1"),
            Some("t_user".to_string())
        );
    }

    #[test]
    fn test_update_statement() {
        assert_eq!(
            first_table_name("UPDATE t_order SET status = 1"),
            Some("t_order".to_string())
        );
    }

    #[test]
    fn test_earliest_keyword_wins() {
        // FROM appears before JOIN; the FROM table is the candidate
        let sql = "SELECT * FROM t_user u JOIN t_order o ON u.id = o.user_id";
        assert_eq!(first_table_name(sql), Some("t_user".to_string()));
    }

    #[test]
    fn test_quoting_stripped() {
        assert_eq!(
            first_table_name("SELECT * FROM `t_user`"),
            Some("t_user".to_string())
        );
        assert_eq!(
            first_table_name("INSERT INTO [t_user] (id) VALUES (1)"),
            Some("t_user".to_string())
        );
    }

    #[test]
    fn test_no_keyword() {
        assert_eq!(first_table_name("<mapper namespace=\"x\"/>"), None);
    }

    #[test]
    fn test_keyword_at_end_of_text() {
        assert_eq!(first_table_name("SELECT * FROM"), None);
    }

    #[test]
    fn test_newline_separated_token() {
        assert_eq!(
            first_table_name("SELECT *\nFROM\n    t_user\nWHERE id = 1"),
            Some("t_user".to_string())
        );
    }
}
