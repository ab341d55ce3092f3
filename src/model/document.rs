//! Document - an undecoded object as returned by the content store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Object, RecordMetadata};

/// A raw store document. Decoding into a typed `Object<M>` is deferred so the
/// caller can tell "no metadata" apart from "malformed metadata".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Value);

impl Document {
    pub fn new(value: Value) -> Self {
        Document(value)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn slug(&self) -> Option<&str> {
        self.0.get("slug").and_then(Value::as_str)
    }

    pub fn object_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// True when the document carries a non-empty metadata object.
    pub fn has_metadata(&self) -> bool {
        match self.0.get("metadata") {
            Some(Value::Object(fields)) => !fields.is_empty(),
            _ => false,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Decode into a typed object.
    ///
    /// Returns `Ok(None)` when the metadata payload is missing, `null` or
    /// empty. Metadata that is present but does not match `M` is an error.
    pub fn decode<M: RecordMetadata>(self) -> Result<Option<Object<M>>, serde_json::Error> {
        if !self.has_metadata() {
            return Ok(None);
        }
        serde_json::from_value(self.0).map(Some)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Document(value)
    }
}
