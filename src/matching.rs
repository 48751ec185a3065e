//! Cross-reference matching
//!
//! Joins the three scanned collections into training pairs: one pair per
//! mapping document whose entity-type reference resolves to a known entity.
//! Unresolved documents contribute nothing; that is expected, not an error.

use crate::model::{
    EntityClass, InterfaceDefinition, MappingDocument, NamingPatterns, TrainingPair,
};
use std::collections::HashMap;
use tracing::debug;

/// Produce training pairs in mapping-document order.
///
/// Output order follows the `mappings` slice so repeated runs over the same
/// corpus yield identical sequences.
pub fn match_training_pairs<'a>(
    mappings: &'a [MappingDocument],
    entities: &'a HashMap<String, EntityClass>,
    interfaces: &'a HashMap<String, InterfaceDefinition>,
    patterns: &'a NamingPatterns,
) -> Vec<TrainingPair<'a>> {
    let mut pairs = Vec::new();
    for mapping in mappings {
        let Some(entity_type) = mapping.entity_type.as_deref() else {
            continue;
        };
        let Some(entity) = entities.get(entity_type) else {
            debug!(
                namespace = %mapping.namespace,
                entity_type,
                "no entity matches mapping document"
            );
            continue;
        };
        // A mapper namespace names its interface; exact-key lookup links it
        let interface = interfaces.get(&mapping.namespace);
        pairs.push(TrainingPair {
            entity,
            mapper: mapping,
            interface,
            patterns,
        });
    }
    pairs
}
