//! InMemoryContentStore - Vec-backed content store for testing and offline use.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};

use super::{ContentStore, ObjectQuery, StoreError};
use crate::model::Document;

/// In-memory content store that behaves like the remote one.
///
/// Documents are kept in insertion order. Queries that match nothing fail
/// with `StoreError::NotFound`, relationship ids inside metadata are expanded
/// when the query asks for depth, and a failure can be injected to exercise
/// error paths. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryContentStore {
    documents: Arc<RwLock<Vec<Value>>>,
    failure: Arc<RwLock<Option<StoreError>>>,
    requests: Arc<AtomicUsize>,
}

impl InMemoryContentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: impl IntoIterator<Item = Value>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents.into_iter().collect())),
            ..Self::default()
        }
    }

    /// Add a document. It must be a JSON object.
    pub fn insert(&self, document: Value) -> Result<(), StoreError> {
        if !document.is_object() {
            return Err(StoreError::Decode("document must be a JSON object".into()));
        }
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Transport("lock poisoned".into()))?;
        documents.push(document);
        Ok(())
    }

    /// Make every request fail with `error` until `clear_failure` is called.
    pub fn fail_with(&self, error: StoreError) {
        let mut failure = self.failure.write().unwrap_or_else(|e| e.into_inner());
        *failure = Some(error);
    }

    pub fn clear_failure(&self) {
        let mut failure = self.failure.write().unwrap_or_else(|e| e.into_inner());
        *failure = None;
    }

    /// Number of requests served (including failed ones).
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn injected_failure(&self) -> Result<(), StoreError> {
        let failure = self
            .failure
            .read()
            .map_err(|_| StoreError::Transport("lock poisoned".into()))?;
        match failure.as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn query_documents(&self, query: &ObjectQuery) -> Result<Vec<Document>, StoreError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.injected_failure()?;

        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::Transport("lock poisoned".into()))?;

        let index: HashMap<&str, &Value> = documents
            .iter()
            .filter_map(|doc| doc.get("id").and_then(Value::as_str).map(|id| (id, doc)))
            .collect();

        let limit = query.max_results().map(|l| l as usize).unwrap_or(usize::MAX);
        let matched: Vec<Document> = documents
            .iter()
            .filter(|doc| query.matches(doc))
            .take(limit)
            .map(|doc| {
                let mut doc = doc.clone();
                if query.expansion_depth() > 0 {
                    expand_references(&mut doc, &index);
                }
                Document::new(project(doc, query.requested_props()))
            })
            .collect();

        if matched.is_empty() {
            return Err(StoreError::NotFound {
                object_type: query.object_type().to_string(),
            });
        }
        Ok(matched)
    }
}

impl ContentStore for InMemoryContentStore {
    async fn find(&self, query: &ObjectQuery) -> Result<Vec<Document>, StoreError> {
        self.query_documents(query)
    }
}

/// Metadata fields the content model declares as object relationships.
const RELATIONSHIP_FIELDS: &[&str] = &["category", "applications"];

/// Replace object ids in relationship fields with the referenced documents.
/// Only one level is resolved; other metadata strings are left alone even
/// when they happen to equal an id.
fn expand_references(document: &mut Value, index: &HashMap<&str, &Value>) {
    let Some(Value::Object(metadata)) = document.get_mut("metadata") else {
        return;
    };
    for (field, value) in metadata.iter_mut() {
        if !RELATIONSHIP_FIELDS.contains(&field.as_str()) {
            continue;
        }
        if let Some(target) = value.as_str().and_then(|id| index.get(id)) {
            *value = (*target).clone();
            continue;
        }
        if let Value::Array(items) = value {
            for item in items.iter_mut() {
                if let Some(target) = item.as_str().and_then(|id| index.get(id)) {
                    *item = (*target).clone();
                }
            }
        }
    }
}

fn project(document: Value, props: &[String]) -> Value {
    if props.is_empty() {
        return document;
    }
    match document {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .filter(|(key, _)| props.iter().any(|p| p == key))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}
