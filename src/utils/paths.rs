// Path to package conversion
//
// Entity files without a package declaration get one synthesized from their
// location under the configured entity root, with path separators replaced
// by the package separator.

use std::path::Path;

/// Derive a dotted package name from a file's directory path relative to
/// the given root.
///
/// Returns an empty string for files sitting directly in the root, or for
/// paths outside of it.
pub fn package_from_path(file_path: &Path, root: &Path) -> String {
    let Some(dir) = file_path.parent() else {
        return String::new();
    };
    let Ok(relative) = dir.strip_prefix(root) else {
        return String::new();
    };
    relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_nested_path_becomes_dotted_package() {
        let package = package_from_path(
            Path::new("/project/entity/com/example/entity/User.java"),
            Path::new("/project/entity"),
        );
        assert_eq!(package, "com.example.entity");
    }

    #[test]
    fn test_file_directly_in_root_has_empty_package() {
        let package = package_from_path(
            Path::new("/project/entity/User.java"),
            Path::new("/project/entity"),
        );
        assert_eq!(package, "");
    }

    #[test]
    fn test_file_outside_root_has_empty_package() {
        let package = package_from_path(
            Path::new("/elsewhere/User.java"),
            Path::new("/project/entity"),
        );
        assert_eq!(package, "");
    }

    #[test]
    fn test_relative_paths() {
        let package = package_from_path(Path::new("com/example/User.java"), Path::new(""));
        assert_eq!(package, "com.example");
    }
}
