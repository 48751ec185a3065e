//! Project analysis orchestration
//!
//! `ProjectAnalyzer` owns the three directory roots and the identity-keyed
//! collections. One `analyze()` call walks the file trees, dispatches the
//! per-file parsers, then runs convention inference and cross-reference
//! matching, in that order. All I/O is read-only; every call rebuilds the
//! collections from scratch.

use crate::extractors::{parse_entity_file, parse_interface_file};
use crate::inference::{MajorityVote, NamingStrategy};
use crate::mapping::parse_mapping_file;
use crate::matching::match_training_pairs;
use crate::model::{
    EntityClass, InterfaceDefinition, MappingDocument, NamingPatterns, TrainingPair,
};
use crate::report::{AnalysisReport, Diagnostic};
use crate::utils::file_utils;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Insertion-ordered mapping-document store.
///
/// Namespace collisions resolve last-write-wins; an overwrite keeps the
/// original insertion position, so iteration order stays the scan order of
/// first appearance.
#[derive(Debug, Default)]
pub struct MappingStore {
    documents: Vec<MappingDocument>,
    index: HashMap<String, usize>,
}

impl MappingStore {
    fn insert(&mut self, document: MappingDocument) {
        match self.index.get(&document.namespace) {
            Some(&i) => {
                warn!(
                    namespace = %document.namespace,
                    kept = %document.file_path,
                    replaced = %self.documents[i].file_path,
                    "duplicate namespace, later document wins"
                );
                self.documents[i] = document;
            }
            None => {
                self.index
                    .insert(document.namespace.clone(), self.documents.len());
                self.documents.push(document);
            }
        }
    }

    fn clear(&mut self) {
        self.documents.clear();
        self.index.clear();
    }

    /// Documents in insertion order.
    pub fn documents(&self) -> &[MappingDocument] {
        &self.documents
    }

    pub fn get(&self, namespace: &str) -> Option<&MappingDocument> {
        self.index.get(namespace).map(|&i| &self.documents[i])
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Analyzes one project: mapper XML documents, entity classes, and mapper
/// interfaces under three configured roots.
pub struct ProjectAnalyzer {
    mapper_dir: PathBuf,
    entity_dir: PathBuf,
    interface_dir: PathBuf,
    entities: HashMap<String, EntityClass>,
    mappings: MappingStore,
    interfaces: HashMap<String, InterfaceDefinition>,
    patterns: NamingPatterns,
    strategy: Box<dyn NamingStrategy>,
}

impl ProjectAnalyzer {
    pub fn new(
        mapper_dir: impl Into<PathBuf>,
        entity_dir: impl Into<PathBuf>,
        interface_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            mapper_dir: mapper_dir.into(),
            entity_dir: entity_dir.into(),
            interface_dir: interface_dir.into(),
            entities: HashMap::new(),
            mappings: MappingStore::default(),
            interfaces: HashMap::new(),
            patterns: NamingPatterns::default(),
            strategy: Box::new(MajorityVote),
        }
    }

    /// Replace the convention-inference strategy.
    pub fn with_strategy(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Scan all three roots, rebuild the collections, infer conventions,
    /// and match pairs. Single-pass and non-reentrant; prior state is
    /// discarded, nothing carries over between runs.
    pub fn analyze(&mut self) -> AnalysisReport {
        self.entities.clear();
        self.mappings.clear();
        self.interfaces.clear();
        self.patterns = NamingPatterns::default();

        let mut report = AnalysisReport::default();
        self.scan_interfaces(&mut report);
        self.scan_mappings(&mut report);
        self.scan_entities(&mut report);
        self.infer_patterns();

        debug!(
            entities = self.entities.len(),
            mappings = self.mappings.len(),
            interfaces = self.interfaces.len(),
            pairs = self.training_pairs().len(),
            "analysis complete"
        );
        report
    }

    /// Training pairs for the last completed `analyze()` run, in mapping-
    /// document insertion order. Before any run this is empty, not an
    /// error.
    pub fn training_pairs(&self) -> Vec<TrainingPair<'_>> {
        match_training_pairs(
            self.mappings.documents(),
            &self.entities,
            &self.interfaces,
            &self.patterns,
        )
    }

    pub fn entities(&self) -> &HashMap<String, EntityClass> {
        &self.entities
    }

    pub fn mapping_documents(&self) -> &MappingStore {
        &self.mappings
    }

    pub fn interfaces(&self) -> &HashMap<String, InterfaceDefinition> {
        &self.interfaces
    }

    pub fn naming_patterns(&self) -> &NamingPatterns {
        &self.patterns
    }

    fn scan_mappings(&mut self, report: &mut AnalysisReport) {
        for path in walk_files(&self.mapper_dir, file_utils::is_mapping_file, report) {
            let Some(content) = read_file(&path, report) else {
                continue;
            };
            match parse_mapping_file(&content, &path.to_string_lossy()) {
                Ok(document) => {
                    debug!(namespace = %document.namespace, "parsed mapping document");
                    report.mapping_files += 1;
                    self.mappings.insert(document);
                }
                Err(e) => skip_file(&path, e, report),
            }
        }
    }

    fn scan_entities(&mut self, report: &mut AnalysisReport) {
        let root = self.entity_dir.clone();
        for path in walk_files(&root, file_utils::is_java_file, report) {
            let Some(content) = read_file(&path, report) else {
                continue;
            };
            match parse_entity_file(&content, &path.to_string_lossy(), &root) {
                Ok(classes) => {
                    report.entity_files += 1;
                    for class in classes {
                        let key = class.qualified_name();
                        debug!(key = %key, "registered entity class");
                        self.entities.insert(key, class);
                    }
                }
                Err(e) => skip_file(&path, e, report),
            }
        }
    }

    fn scan_interfaces(&mut self, report: &mut AnalysisReport) {
        for path in walk_files(&self.interface_dir, file_utils::is_java_file, report) {
            let Some(content) = read_file(&path, report) else {
                continue;
            };
            match parse_interface_file(&content, &path.to_string_lossy()) {
                Ok(interfaces) => {
                    report.interface_files += 1;
                    for interface in interfaces {
                        let key = interface.qualified_name();
                        debug!(key = %key, "registered mapper interface");
                        self.interfaces.insert(key, interface);
                    }
                }
                Err(e) => skip_file(&path, e, report),
            }
        }
    }

    fn infer_patterns(&mut self) {
        let entities: Vec<&EntityClass> = self.entities.values().collect();
        let mappings: Vec<&MappingDocument> = self.mappings.documents().iter().collect();
        self.patterns = self.strategy.infer(&entities, &mappings);
    }
}

/// Enumerate files matching the selector under a root, recursively.
///
/// `glob` yields paths in sorted order, which keeps namespace-collision
/// handling deterministic. A missing root is recorded as a warning and
/// yields nothing; no scan failure aborts the run.
fn walk_files(
    root: &Path,
    select: fn(&Path) -> bool,
    report: &mut AnalysisReport,
) -> Vec<PathBuf> {
    if !root.exists() {
        warn!(path = %root.display(), "configured root does not exist");
        report.record(Diagnostic::MissingDirectory {
            path: root.display().to_string(),
        });
        return Vec::new();
    }
    let pattern = format!("{}/**/*", root.display());
    match glob::glob(&pattern) {
        Ok(paths) => paths
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file() && select(p))
            .collect(),
        Err(e) => {
            warn!(pattern = %pattern, error = %e, "invalid scan pattern");
            Vec::new()
        }
    }
}

fn read_file(path: &Path, report: &mut AnalysisReport) -> Option<String> {
    match file_utils::read_file_content(path) {
        Ok(content) => Some(content),
        Err(e) => {
            skip_file(path, e, report);
            None
        }
    }
}

fn skip_file(path: &Path, error: anyhow::Error, report: &mut AnalysisReport) {
    warn!(path = %path.display(), error = %error, "skipping file");
    report.record(Diagnostic::ParseFailure {
        path: path.display().to_string(),
        reason: error.to_string(),
    });
}
