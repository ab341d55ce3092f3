//! ObjectQuery - what to ask the content store for.

use serde_json::{json, Value};

use crate::model::RecordMetadata;

/// Properties requested for catalog records.
pub const DEFAULT_PROPS: &[&str] = &[
    "id",
    "slug",
    "title",
    "type",
    "metadata",
    "created_at",
    "modified_at",
];

/// A request for objects of one type, optionally narrowed to a slug.
///
/// Built like the content store's own client: `find(type)` or
/// `find_one(type, slug)`, then `.props(..)` and `.depth(..)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectQuery {
    object_type: String,
    slug: Option<String>,
    props: Vec<String>,
    depth: u8,
    limit: Option<u32>,
}

impl ObjectQuery {
    /// All objects of a type. No props filter, no relationship expansion.
    pub fn find(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            slug: None,
            props: Vec::new(),
            depth: 0,
            limit: None,
        }
    }

    /// The single object of a type with the given slug.
    pub fn find_one(object_type: impl Into<String>, slug: impl Into<String>) -> Self {
        let mut query = Self::find(object_type);
        query.slug = Some(slug.into());
        query.limit = Some(1);
        query
    }

    /// All objects whose metadata decodes into `M`.
    pub fn of<M: RecordMetadata>() -> Self {
        Self::find(M::OBJECT_TYPE)
    }

    /// Restrict the returned top-level properties. Empty means everything.
    pub fn props(mut self, props: &[&str]) -> Self {
        self.props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    /// How many levels of referenced objects to expand in place.
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn requested_props(&self) -> &[String] {
        &self.props
    }

    pub fn expansion_depth(&self) -> u8 {
        self.depth
    }

    pub fn max_results(&self) -> Option<u32> {
        self.limit
    }

    /// The JSON filter sent as the `query` parameter.
    pub fn filter(&self) -> Value {
        match &self.slug {
            Some(slug) => json!({ "type": self.object_type, "slug": slug }),
            None => json!({ "type": self.object_type }),
        }
    }

    /// URL query parameters, without credentials.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("query", self.filter().to_string())];
        if !self.props.is_empty() {
            params.push(("props", self.props.join(",")));
        }
        params.push(("depth", self.depth.to_string()));
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    /// True when a raw document satisfies the type and slug filter.
    pub fn matches(&self, document: &Value) -> bool {
        let field = |name: &str| document.get(name).and_then(Value::as_str);
        if field("type") != Some(self.object_type.as_str()) {
            return false;
        }
        match &self.slug {
            Some(slug) => field("slug") == Some(slug.as_str()),
            None => true,
        }
    }
}
