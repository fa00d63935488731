use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{Collection, FieldKind, SectionTemplate};
use crate::services::catalog::SECTION_TEMPLATES;
use crate::store::{current_time_millis, CmsIdGenerator, DocQuery, DocumentStore, FieldFilter};

/// Outcome of a catalog seed/reset call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    AlreadySeeded,
    Seeded(usize),
}

impl SeedOutcome {
    pub fn message(&self) -> String {
        match self {
            SeedOutcome::AlreadySeeded => "Templates already exist".to_string(),
            SeedOutcome::Seeded(count) => format!("Seeded {} templates", count),
        }
    }
}

/// Read-mostly catalog of section templates backed by the document store
#[derive(Clone)]
pub struct TemplateCatalog {
    store: Arc<dyn DocumentStore>,
    id_generator: Arc<CmsIdGenerator>,
}

impl TemplateCatalog {
    pub fn new(store: Arc<dyn DocumentStore>, id_generator: Arc<CmsIdGenerator>) -> Self {
        Self {
            store,
            id_generator,
        }
    }

    fn decode(doc: crate::store::Document) -> AppResult<SectionTemplate> {
        serde_json::from_value(doc.data).map_err(|e| {
            AppError::SerializationError(format!("Corrupt template document {}: {}", doc.id, e))
        })
    }

    /// All templates offered to editors, in catalog display order
    pub async fn list(&self) -> AppResult<Vec<SectionTemplate>> {
        let docs = self
            .store
            .query(
                DocQuery::collection(Collection::SectionTemplates.as_str())
                    .with_filter(FieldFilter::eq_bool("isActive", true)),
            )
            .await?;

        let mut templates = docs
            .into_iter()
            .map(Self::decode)
            .collect::<AppResult<Vec<_>>>()?;
        templates.sort_by_key(|t| t.order);
        Ok(templates)
    }

    /// Active templates in one picker category
    pub async fn by_category(&self, category: &str) -> AppResult<Vec<SectionTemplate>> {
        let docs = self
            .store
            .query(
                DocQuery::collection(Collection::SectionTemplates.as_str())
                    .with_filter(FieldFilter::eq_str("category", category)),
            )
            .await?;

        let mut templates = docs
            .into_iter()
            .map(Self::decode)
            .collect::<AppResult<Vec<_>>>()?;
        templates.retain(|t| t.is_active);
        templates.sort_by_key(|t| t.order);
        Ok(templates)
    }

    /// Look up one template by its type tag
    pub async fn by_type(&self, template_type: &str) -> AppResult<Option<SectionTemplate>> {
        let doc = self
            .store
            .query_first(
                DocQuery::collection(Collection::SectionTemplates.as_str())
                    .with_filter(FieldFilter::eq_str("type", template_type)),
            )
            .await?;

        doc.map(Self::decode).transpose()
    }

    /// Populate the catalog from the static template list. Idempotent:
    /// a non-empty catalog is left untouched.
    pub async fn seed(&self) -> AppResult<SeedOutcome> {
        let existing = self
            .store
            .query_first(DocQuery::collection(Collection::SectionTemplates.as_str()))
            .await?;
        if existing.is_some() {
            info!("Section template catalog already seeded");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let count = self.insert_catalog().await?;
        info!("Seeded {} section templates", count);
        Ok(SeedOutcome::Seeded(count))
    }

    /// Delete every catalog entry and re-insert the static list.
    /// Deliberately not idempotent; intended for development refresh.
    pub async fn reset(&self) -> AppResult<SeedOutcome> {
        let existing = self
            .store
            .query(DocQuery::collection(Collection::SectionTemplates.as_str()))
            .await?;
        for doc in existing {
            self.store.delete(doc.id).await?;
        }

        let count = self.insert_catalog().await?;
        info!("Reset catalog, seeded {} section templates", count);
        Ok(SeedOutcome::Seeded(count))
    }

    async fn insert_catalog(&self) -> AppResult<usize> {
        // Uniform creation timestamp across the whole batch
        let now = current_time_millis();
        let mut count = 0;
        for def in SECTION_TEMPLATES.iter() {
            let template = def.clone().into_template(self.id_generator.next_id(), now);
            let data = serde_json::to_value(&template)?;
            self.store
                .insert(template.id, Collection::SectionTemplates.as_str(), data)
                .await?;
            count += 1;
        }
        Ok(count)
    }

    /// Check a content payload against a template's field schema.
    /// Returns one message per violation; an empty list means the payload
    /// satisfies the schema. Unknown extra fields are allowed.
    pub fn validate_content(template: &SectionTemplate, content: &Value) -> Vec<String> {
        let mut problems = Vec::new();

        let map = match content.as_object() {
            Some(map) => map,
            None => return vec!["content must be a JSON object".to_string()],
        };

        for spec in &template.field_schema {
            let value = map.get(&spec.name);
            if spec.required && value.map_or(true, Value::is_null) {
                problems.push(format!("missing required field '{}'", spec.name));
                continue;
            }

            if spec.kind == FieldKind::Select {
                if let (Some(Value::String(chosen)), Some(options)) = (value, &spec.options) {
                    if !options.contains(chosen) {
                        problems.push(format!(
                            "field '{}' has value '{}', expected one of {:?}",
                            spec.name, chosen, options
                        ));
                    }
                }
            }
        }

        problems
    }
}
