// Document Store - Low-level storage operations for the CMS
// This layer handles persistence of schemaless JSON documents grouped into
// collections, with equality-filtered scans used by the content services.

pub mod id_generator;
pub mod sqlite;

use crate::error::AppResult;
use async_trait::async_trait;
use serde_json::Value;

pub use id_generator::CmsIdGenerator;
pub use sqlite::SqliteStore;

/// Current time in milliseconds since Unix epoch
pub fn current_time_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

/// Document ID type for all stored records
pub type DocId = i64;

/// A stored document: an opaque id plus a JSON payload, grouped by collection
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    pub collection: String,
    pub data: Value,
}

/// Equality filter against one top-level field of the JSON payload
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub field: String,
    pub value: FilterValue,
}

#[derive(Debug, Clone)]
pub enum FilterValue {
    Str(String),
    Bool(bool),
    Int(i64),
}

impl FieldFilter {
    pub fn eq_str(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: FilterValue::Str(value.into()),
        }
    }

    pub fn eq_bool(field: &str, value: bool) -> Self {
        Self {
            field: field.to_string(),
            value: FilterValue::Bool(value),
        }
    }

    pub fn eq_int(field: &str, value: i64) -> Self {
        Self {
            field: field.to_string(),
            value: FilterValue::Int(value),
        }
    }
}

/// Scan direction over a collection. Ids are time-ordered, so `IdDesc`
/// yields most-recently-created documents first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    IdAsc,
    IdDesc,
}

/// Collection scan parameters
#[derive(Debug, Clone)]
pub struct DocQuery {
    pub collection: String,
    pub filter: Option<FieldFilter>,
    pub order: ScanOrder,
    pub limit: Option<u32>,
}

impl DocQuery {
    pub fn collection(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            filter: None,
            order: ScanOrder::IdAsc,
            limit: None,
        }
    }

    pub fn with_filter(mut self, filter: FieldFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn descending(mut self) -> Self {
        self.order = ScanOrder::IdDesc;
        self
    }

    pub fn first_only(mut self) -> Self {
        self.limit = Some(1);
        self
    }
}

/// Storage interface consumed by the content services.
/// Each call is an individually-atomic operation; multi-step workflows
/// (homepage swap, cascade delete) compose several calls without a
/// wrapping transaction.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document with a caller-supplied id
    async fn insert(&self, id: DocId, collection: &str, data: Value) -> AppResult<()>;

    /// Fetch a single document by id
    async fn get(&self, id: DocId) -> AppResult<Option<Document>>;

    /// Merge the given top-level fields into an existing document.
    /// Fails with `NotFound` when the id does not resolve.
    async fn patch(&self, id: DocId, fields: Value) -> AppResult<()>;

    /// Delete a document. Returns whether a record was removed.
    async fn delete(&self, id: DocId) -> AppResult<bool>;

    /// Scan a collection with an optional equality filter
    async fn query(&self, query: DocQuery) -> AppResult<Vec<Document>>;

    /// First matching document of a scan, if any
    async fn query_first(&self, query: DocQuery) -> AppResult<Option<Document>> {
        let docs = self.query(query.first_only()).await?;
        Ok(docs.into_iter().next())
    }
}
