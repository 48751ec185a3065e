// Core data model for project analysis
//
// Record structs built once per discovered declaration during a scan and
// immutable afterwards. Identity keys are fully-qualified names for Java
// declarations and the namespace for mapping documents; collisions within a
// run resolve by overwrite, not merge.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::case::to_snake_case;

/// A field declared on an entity class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    /// Field name as it appears in code
    pub name: String,
    /// Declared type name, without type arguments
    #[serde(rename = "type")]
    pub field_type: String,
    /// Type-argument names when the declared type is parameterized
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_types: Vec<String>,
}

/// A plain data-holding class representing a persisted record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityClass {
    pub name: String,
    pub package: String,
    /// Fields in declaration order
    pub fields: Vec<Field>,
    pub file_path: String,
}

impl EntityClass {
    /// Fully-qualified name; the identity key within a scan.
    pub fn qualified_name(&self) -> String {
        qualify(&self.package, &self.name)
    }
}

/// One parsed mapper XML document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MappingDocument {
    /// Namespace of the root element; the identity key within a scan
    pub namespace: String,
    pub file_path: String,
    /// Inferred entity-type reference; `None` when no inference succeeded
    pub entity_type: Option<String>,
    /// Raw document text, kept verbatim for heuristic inspection
    pub content: String,
}

/// A declared data-access contract (method signatures, no implementation)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterfaceDefinition {
    pub name: String,
    pub package: String,
    pub methods: Vec<MethodSignature>,
    pub file_path: String,
}

impl InterfaceDefinition {
    /// Fully-qualified name; the identity key within a scan.
    pub fn qualified_name(&self) -> String {
        qualify(&self.package, &self.name)
    }
}

/// One method parameter, in declaration order within its signature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodSignature {
    pub name: String,
    /// Return type text as written, including generic wrappers
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub annotations: Vec<Annotation>,
    /// Empty structure when the method carries no doc block
    pub documentation: Javadoc,
}

/// An annotation attached to a method, with element values flattened to text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Annotation {
    pub name: String,
    /// Element name -> value; a single unnamed value is stored under "value"
    pub elements: BTreeMap<String, String>,
}

/// Structured documentation attached to a method
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Javadoc {
    pub description: String,
    /// Parameter name -> description, from `@param` tags
    pub params: BTreeMap<String, String>,
    /// Return-value description, from the `@return` tag
    pub returns: String,
}

impl Javadoc {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.params.is_empty() && self.returns.is_empty()
    }
}

/// Column naming style used by a project's mapping documents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ColumnStyle {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
}

impl std::fmt::Display for ColumnStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnStyle::CamelCase => write!(f, "camelCase"),
            ColumnStyle::SnakeCase => write!(f, "snake_case"),
        }
    }
}

/// Project-wide naming conventions, recomputed once per analysis run
///
/// Computed after all entities and mapping documents are collected, read by
/// the matcher afterwards; never mutated in between.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamingPatterns {
    pub entity_suffix: String,
    pub table_prefix: String,
    pub column_style: ColumnStyle,
}

impl Default for NamingPatterns {
    fn default() -> Self {
        Self {
            entity_suffix: String::new(),
            table_prefix: String::new(),
            column_style: ColumnStyle::CamelCase,
        }
    }
}

impl NamingPatterns {
    /// Derive the table name for an entity simple name: strip the inferred
    /// suffix, convert the stem to snake_case, prepend the inferred prefix.
    ///
    /// `UserOrderDO` with suffix `DO` and prefix `t` -> `t_user_order`.
    pub fn table_name(&self, entity_name: &str) -> String {
        let stem = entity_name
            .strip_suffix(self.entity_suffix.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(entity_name);
        let snake = to_snake_case(stem);
        if self.table_prefix.is_empty() {
            snake
        } else {
            format!("{}_{}", self.table_prefix, snake)
        }
    }
}

/// A derived view linking one entity, one mapping document, the interface
/// behind the document's namespace, and the run's naming patterns.
///
/// Produced fresh by the matcher; lives only as long as the analysis state
/// it borrows from.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrainingPair<'a> {
    pub entity: &'a EntityClass,
    pub mapper: &'a MappingDocument,
    /// Linked interface metadata, when the namespace resolves to one
    pub interface: Option<&'a InterfaceDefinition>,
    pub patterns: &'a NamingPatterns,
}

impl TrainingPair<'_> {
    /// Table name the generator should target for this pair's entity.
    pub fn table_name(&self) -> String {
        self.patterns.table_name(&self.entity.name)
    }
}

fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}
