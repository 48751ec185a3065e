// Batis Core - tree-sitter powered MyBatis project analysis
//
// Analyzes an existing data-access codebase (mapper XML documents, entity
// classes, mapper interfaces), cross-links the three into a unified model,
// and infers the project's naming conventions. The resulting training pairs
// feed a downstream mapper generator.

pub mod analyzer;
pub mod extractors;
pub mod inference;
pub mod language;
pub mod mapping;
pub mod matching;
pub mod model;
pub mod report;
pub mod utils;

// Re-export the public API
pub use analyzer::ProjectAnalyzer;
pub use inference::{MajorityVote, NamingStrategy};
pub use model::{
    Annotation, ColumnStyle, EntityClass, Field, InterfaceDefinition, Javadoc, MappingDocument,
    MethodSignature, NamingPatterns, Parameter, TrainingPair,
};
pub use report::{AnalysisReport, Diagnostic};
