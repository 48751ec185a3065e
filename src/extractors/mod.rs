//! Source extractors
//!
//! Tree-sitter based parsers for the Java half of the corpus. Each parser
//! is a pure per-file function: full text in, records out, no shared state,
//! so a failing file never affects any other.
//!
//! # Architecture
//!
//! - `base` - shared extractor plumbing (node text, doc-comment lookup)
//! - `java` - entity-class and mapper-interface extraction

pub mod base;
pub mod java;

// Re-export the public API
pub use base::BaseExtractor;
pub use java::{parse_entity_file, parse_interface_file};
