use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Row};
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::store::{DocId, DocQuery, Document, DocumentStore, FilterValue, ScanOrder};

/// SQLite implementation of the document store. Documents live in a single
/// table keyed by id, with the JSON payload stored as text and equality
/// filters pushed down via `json_extract`.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to a SQLite database, creating the file when missing
    pub async fn connect(url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::DatabaseError(format!("Invalid database URL {}: {}", url, e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect to {}: {}", url, e)))?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// In-memory store for tests and local development.
    /// Pinned to a single connection: every pooled connection would
    /// otherwise see its own private in-memory database.
    pub async fn new_in_memory() -> AppResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to connect to in-memory SQLite: {}", e))
            })?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Create the documents table and collection index
    pub async fn initialize(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY,
                collection TEXT NOT NULL,
                data TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create documents table: {}", e)))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection)")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create collection index: {}", e))
            })?;

        Ok(())
    }

    fn row_to_document(row: &sqlx::sqlite::SqliteRow) -> AppResult<Document> {
        let raw: String = row.get("data");
        let data = serde_json::from_str(&raw).map_err(|e| {
            AppError::SerializationError(format!("Corrupt document payload: {}", e))
        })?;
        Ok(Document {
            id: row.get("id"),
            collection: row.get("collection"),
            data,
        })
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn insert(&self, id: DocId, collection: &str, data: Value) -> AppResult<()> {
        let payload = serde_json::to_string(&data)?;
        sqlx::query("INSERT INTO documents (id, collection, data) VALUES (?, ?, ?)")
            .bind(id)
            .bind(collection)
            .bind(payload)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!(
                    "Failed to insert document {} into {}: {}",
                    id, collection, e
                ))
            })?;
        Ok(())
    }

    async fn get(&self, id: DocId) -> AppResult<Option<Document>> {
        let row = sqlx::query("SELECT id, collection, data FROM documents WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to get document {}: {}", id, e)))?;

        match row {
            Some(row) => Ok(Some(Self::row_to_document(&row)?)),
            None => Ok(None),
        }
    }

    async fn patch(&self, id: DocId, fields: Value) -> AppResult<()> {
        let updates = match fields {
            Value::Object(map) => map,
            _ => {
                return Err(AppError::BadRequest(
                    "Patch payload must be a JSON object".to_string(),
                ))
            }
        };

        if updates.is_empty() {
            return match self.get(id).await? {
                Some(_) => Ok(()),
                None => Err(AppError::NotFound(format!("Document {} not found", id))),
            };
        }

        // Single-statement merge: concurrent patches of disjoint fields must
        // both land. json_set replaces each top-level field wholesale,
        // object values included.
        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE documents SET data = json_set(data");
        for (key, value) in &updates {
            qb.push(", ");
            qb.push_bind(format!("$.{}", key));
            qb.push(", json(");
            qb.push_bind(serde_json::to_string(value)?);
            qb.push(")");
        }
        qb.push(") WHERE id = ");
        qb.push_bind(id);

        let result = qb.build().execute(&self.pool).await.map_err(|e| {
            AppError::DatabaseError(format!("Failed to patch document {}: {}", id, e))
        })?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Document {} not found", id)));
        }
        Ok(())
    }

    async fn delete(&self, id: DocId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to delete document {}: {}", id, e))
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn query(&self, query: DocQuery) -> AppResult<Vec<Document>> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT id, collection, data FROM documents WHERE collection = ",
        );
        qb.push_bind(query.collection.clone());

        if let Some(filter) = &query.filter {
            qb.push(" AND json_extract(data, ");
            qb.push_bind(format!("$.{}", filter.field));
            qb.push(") = ");
            match &filter.value {
                FilterValue::Str(s) => qb.push_bind(s.clone()),
                FilterValue::Bool(b) => qb.push_bind(if *b { 1i64 } else { 0i64 }),
                FilterValue::Int(i) => qb.push_bind(*i),
            };
        }

        match query.order {
            ScanOrder::IdAsc => qb.push(" ORDER BY id ASC"),
            ScanOrder::IdDesc => qb.push(" ORDER BY id DESC"),
        };

        if let Some(limit) = query.limit {
            qb.push(" LIMIT ");
            qb.push_bind(limit as i64);
        }

        let rows = qb.build().fetch_all(&self.pool).await.map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to query collection {}: {}",
                query.collection, e
            ))
        })?;

        rows.iter().map(Self::row_to_document).collect()
    }
}
