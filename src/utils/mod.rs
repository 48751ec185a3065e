// Common utilities shared across the analysis pipeline.

use anyhow::Result;
use std::path::Path;

pub mod case;
pub mod paths;

/// File utilities
pub mod file_utils {
    use super::*;
    use std::fs;

    /// Check if a path is a Java source file
    pub fn is_java_file(path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some("java")
    }

    /// Check if a path is a mapping document
    pub fn is_mapping_file(path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some("xml")
    }

    /// Read file content safely
    pub fn read_file_content(path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}
