//! Mapping-document parsing
//!
//! Streams each mapper XML file once with `quick-xml`, pulling the root
//! `namespace` attribute and the attributes entity-type inference needs.
//! The document text itself is kept verbatim; the convention inferrer works
//! on it directly.

use crate::model::MappingDocument;
use anyhow::{anyhow, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Attributes collected while streaming one document.
#[derive(Default)]
struct ScanState {
    namespace: Option<String>,
    result_map_type: Option<String>,
    parameter_type: Option<String>,
    seen_result_map: bool,
    seen_insert: bool,
}

/// Parse one mapper XML file.
///
/// The entity-type reference is determined by an ordered fallback chain,
/// stopping at the first attribute actually present:
/// 1. `type` of the first `resultMap` element,
/// 2. `parameterType` of the first `insert` element,
/// 3. a namespace heuristic,
/// 4. otherwise `None`.
pub fn parse_mapping_file(content: &str, file_path: &str) -> Result<MappingDocument> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut state = ScanState::default();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                inspect_element(e, depth, &mut state)?;
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                inspect_element(e, depth, &mut state)?;
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow!("XML parse error in {}: {}", file_path, e)),
            _ => {}
        }
        buf.clear();
    }

    let namespace = state.namespace.unwrap_or_default();
    let entity_type = state
        .result_map_type
        .or(state.parameter_type)
        .or_else(|| entity_type_from_namespace(&namespace));

    Ok(MappingDocument {
        namespace,
        file_path: file_path.to_string(),
        entity_type,
        content: content.to_string(),
    })
}

fn inspect_element(element: &BytesStart, depth: usize, state: &mut ScanState) -> Result<()> {
    if depth == 0 {
        if state.namespace.is_none() {
            state.namespace = attribute(element, "namespace")?;
        }
        return Ok(());
    }
    match element.name().as_ref() {
        // Only the first element of each kind is consulted
        b"resultMap" if !state.seen_result_map => {
            state.seen_result_map = true;
            state.result_map_type = attribute(element, "type")?;
        }
        b"insert" if !state.seen_insert => {
            state.seen_insert = true;
            state.parameter_type = attribute(element, "parameterType")?;
        }
        _ => {}
    }
    Ok(())
}

fn attribute(element: &BytesStart, name: &str) -> Result<Option<String>> {
    let attr = element
        .try_get_attribute(name)
        .map_err(|e| anyhow!("malformed attribute {}: {}", name, e))?;
    match attr {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|e| anyhow!("malformed value for attribute {}: {}", name, e))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

/// Namespace heuristic: mapper namespaces mirror entity packages with a
/// `Mapper` suffix. `com.example.mapper.UserMapper` -> `com.example.entity.User`.
fn entity_type_from_namespace(namespace: &str) -> Option<String> {
    if namespace.is_empty() {
        return None;
    }
    Some(namespace.replace("mapper", "entity").replace("Mapper", ""))
}
