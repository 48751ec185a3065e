// Identifier case conversion.

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// `UserOrder` -> `user_order`, `id` -> `id`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_snake_case("UserOrder"), "user_order");
        assert_eq!(to_snake_case("User"), "user");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_snake_case("userName"), "user_name");
        assert_eq!(to_snake_case("id"), "id");
    }

    #[test]
    fn test_already_snake() {
        assert_eq!(to_snake_case("user_name"), "user_name");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_snake_case(""), "");
    }
}
