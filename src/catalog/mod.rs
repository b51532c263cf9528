//! The content catalog: authored questions and answers, resolved once at load time.

use crate::error::CatalogError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

pub mod artifact;
pub mod conversion;
pub mod definition;
pub mod topic;

pub use artifact::*;
pub use conversion::*;
pub use definition::*;
pub use topic::*;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/naturopathy.json");

const TOPIC_MENU_SOURCE: &str = "<topic menu>";

/// A follow-up (or topic menu entry) that points at a topic id with no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub source_topic_id: String,
    pub missing_topic_id: String,
}

impl From<DanglingReference> for CatalogError {
    fn from(r: DanglingReference) -> Self {
        CatalogError::DanglingReference {
            missing_topic_id: r.missing_topic_id,
            source_topic_id: r.source_topic_id,
        }
    }
}

/// An immutable, resolved set of topics.
///
/// Every follow-up label is resolved into a `NextStep` exactly once, when the catalog is
/// built. Lookups afterwards are plain reads, so the same id always yields the same topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    topic_menu: Vec<NextStep>,
    topics: AHashMap<String, Topic>,
}

impl Catalog {
    /// Resolves authored content into a catalog.
    ///
    /// Follow-ups that reference missing topics are logged but tolerated; the dialogue
    /// engine recovers from them at runtime. Use `ensure_complete` to reject them instead.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut topics = AHashMap::with_capacity(document.topics.len());
        for definition in document.topics {
            let follow_ups = match definition.next {
                Some(labels) => labels.iter().map(|l| NextStep::resolve(l)).collect(),
                None => default_follow_ups(),
            };
            let topic = Topic {
                id: definition.question.clone(),
                answer: definition.answer,
                follow_ups,
            };
            if topics.insert(definition.question.clone(), topic).is_some() {
                return Err(CatalogError::DuplicateTopic(definition.question));
            }
        }

        let topic_menu = document
            .topic_menu
            .iter()
            .map(|l| NextStep::resolve(l))
            .collect();

        let catalog = Self { topic_menu, topics };
        for dangling in catalog.dangling_references() {
            tracing::warn!(
                source = %dangling.source_topic_id,
                missing = %dangling.missing_topic_id,
                "catalog follow-up references a missing topic"
            );
        }
        tracing::debug!(topics = catalog.len(), "catalog resolved");
        Ok(catalog)
    }

    /// Converts any custom content model and resolves it.
    pub fn from_source<T: IntoCatalog>(source: T) -> Result<Self, CatalogError> {
        Self::from_document(source.into_document()?)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Loads and resolves a catalog from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The naturopathy clinic content shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    pub fn lookup(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.get(topic_id)
    }

    pub fn topic_menu(&self) -> &[NextStep] {
        &self.topic_menu
    }

    pub fn topic_menu_labels(&self) -> Vec<String> {
        self.topic_menu
            .iter()
            .map(|step| step.label().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Topic ids in sorted order.
    pub fn topic_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.topics.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Lists every topic reference that has no catalog entry, in a stable order.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        let mut check = |source: &str, step: &NextStep| {
            if let NextStep::Topic(target) = step {
                if !self.topics.contains_key(target) {
                    dangling.push(DanglingReference {
                        source_topic_id: source.to_string(),
                        missing_topic_id: target.clone(),
                    });
                }
            }
        };

        for step in &self.topic_menu {
            check(TOPIC_MENU_SOURCE, step);
        }
        for id in self.topic_ids() {
            if let Some(topic) = self.topics.get(id) {
                for step in &topic.follow_ups {
                    check(id, step);
                }
            }
        }
        dangling
    }

    /// Strict check: fails on the first dangling reference.
    pub fn ensure_complete(&self) -> Result<(), CatalogError> {
        match self.dangling_references().into_iter().next() {
            Some(dangling) => Err(dangling.into()),
            None => Ok(()),
        }
    }
}
