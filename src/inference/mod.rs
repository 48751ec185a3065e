//! Naming-convention inference
//!
//! Statistical majority-vote heuristics over the scanned corpus. Best
//! effort only: they can be wrong on small or atypically-named projects.
//! They live behind the `NamingStrategy` trait so an alternative strategy
//! can be swapped in without touching any parser.

mod tables;

pub use tables::first_table_name;

use crate::model::{ColumnStyle, EntityClass, MappingDocument, NamingPatterns};
use std::collections::HashMap;
use tracing::debug;

/// Entity-suffix candidates, in tie-break order. Counting takes the first
/// candidate a name ends with, so the catch-all empty suffix stays last.
pub const ENTITY_SUFFIXES: [&str; 4] = ["DO", "Entity", "Model", ""];

/// Marker that a mapping document declares column mappings.
const COLUMN_MARKER: &str = "column=";

/// Infers project-wide naming conventions from the scanned corpus.
///
/// Runs exactly once per analysis, after all entities and mapping documents
/// are collected and before any pair is matched.
pub trait NamingStrategy {
    fn infer(&self, entities: &[&EntityClass], mappings: &[&MappingDocument]) -> NamingPatterns;
}

/// Default strategy: majority vote with deterministic tie-breaking.
#[derive(Debug, Default, Clone, Copy)]
pub struct MajorityVote;

impl NamingStrategy for MajorityVote {
    fn infer(&self, entities: &[&EntityClass], mappings: &[&MappingDocument]) -> NamingPatterns {
        let patterns = NamingPatterns {
            entity_suffix: detect_entity_suffix(entities),
            table_prefix: detect_table_prefix(mappings),
            column_style: detect_column_style(mappings),
        };
        debug!(
            entity_suffix = %patterns.entity_suffix,
            table_prefix = %patterns.table_prefix,
            column_style = %patterns.column_style,
            "inferred naming patterns"
        );
        patterns
    }
}

/// Most common suffix across entity simple names.
///
/// Each name counts toward the first candidate it ends with; ties resolve
/// to the earlier candidate; an empty corpus yields the empty default.
fn detect_entity_suffix(entities: &[&EntityClass]) -> String {
    if entities.is_empty() {
        return String::new();
    }
    let mut counts = [0usize; ENTITY_SUFFIXES.len()];
    for entity in entities {
        if let Some(index) = ENTITY_SUFFIXES
            .iter()
            .position(|suffix| entity.name.ends_with(suffix))
        {
            counts[index] += 1;
        }
    }
    let mut best = 0;
    for i in 1..ENTITY_SUFFIXES.len() {
        if counts[i] > counts[best] {
            best = i;
        }
    }
    ENTITY_SUFFIXES[best].to_string()
}

/// Most common table-name prefix across mapping documents.
///
/// The candidate table per document is the token after the SQL keyword
/// occurring earliest in its content; the prefix is the part before the
/// first `_`, empty when there is none. Ties resolve to the prefix
/// encountered first in document order.
fn detect_table_prefix(mappings: &[&MappingDocument]) -> String {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for mapping in mappings {
        let Some(table) = first_table_name(&mapping.content) else {
            continue;
        };
        let prefix = match table.find('_') {
            Some(pos) => table[..pos].to_string(),
            None => String::new(),
        };
        if !counts.contains_key(&prefix) {
            order.push(prefix.clone());
        }
        *counts.entry(prefix).or_insert(0) += 1;
    }

    let mut best: Option<&String> = None;
    for prefix in &order {
        match best {
            None => best = Some(prefix),
            Some(current) if counts[prefix] > counts[current] => best = Some(prefix),
            _ => {}
        }
    }
    best.cloned().unwrap_or_default()
}

/// Column naming style by document majority.
///
/// A document that declares column mappings votes snake when its content
/// contains an underscore anywhere, camel otherwise. Ties resolve to camel.
fn detect_column_style(mappings: &[&MappingDocument]) -> ColumnStyle {
    let mut camel = 0usize;
    let mut snake = 0usize;
    for mapping in mappings {
        if !mapping.content.contains(COLUMN_MARKER) {
            continue;
        }
        if mapping.content.contains('_') {
            snake += 1;
        } else {
            camel += 1;
        }
    }
    if snake > camel {
        ColumnStyle::SnakeCase
    } else {
        ColumnStyle::CamelCase
    }
}
