use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::config::CmsConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Collection, CreateSection, Section, UpdateSection};
use crate::services::templates::TemplateCatalog;
use crate::store::{
    current_time_millis, CmsIdGenerator, DocId, DocQuery, DocumentStore, FieldFilter,
};

/// CRUD, reorder and duplicate operations over section records.
/// Maintains the dense zero-based `order` invariant within each page.
#[derive(Clone)]
pub struct SectionService {
    store: Arc<dyn DocumentStore>,
    id_generator: Arc<CmsIdGenerator>,
    catalog: TemplateCatalog,
    config: CmsConfig,
}

impl SectionService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        id_generator: Arc<CmsIdGenerator>,
        catalog: TemplateCatalog,
        config: CmsConfig,
    ) -> Self {
        Self {
            store,
            id_generator,
            catalog,
            config,
        }
    }

    fn decode(doc: crate::store::Document) -> AppResult<Section> {
        serde_json::from_value(doc.data).map_err(|e| {
            AppError::SerializationError(format!("Corrupt section document {}: {}", doc.id, e))
        })
    }

    /// All sections belonging to a page, unsorted. Shared by the
    /// max-order computation and the compaction passes.
    async fn siblings(&self, page_id: DocId) -> AppResult<Vec<Section>> {
        let docs = self
            .store
            .query(
                DocQuery::collection(Collection::Sections.as_str())
                    .with_filter(FieldFilter::eq_int("pageId", page_id)),
            )
            .await?;
        docs.into_iter().map(Self::decode).collect()
    }

    /// All sections for a page sorted ascending by order index.
    /// Inactive sections are included; filtering is the caller's concern.
    pub async fn get_sections_for_page(&self, page_id: DocId) -> AppResult<Vec<Section>> {
        let mut sections = self.siblings(page_id).await?;
        sections.sort_by_key(|s| s.order);
        Ok(sections)
    }

    pub async fn get_section(&self, id: DocId) -> AppResult<Option<Section>> {
        let doc = self.store.get(id).await?;
        match doc {
            Some(doc) if doc.collection == Collection::Sections.as_str() => {
                Ok(Some(Self::decode(doc)?))
            }
            _ => Ok(None),
        }
    }

    /// Create a section at the end of its page's list. When
    /// `from_template` is set the content payload is seeded from the
    /// catalog entry for the requested type.
    pub async fn create_section(&self, input: CreateSection) -> AppResult<DocId> {
        let template = self.catalog.by_type(&input.section_type).await?;

        let (content, name) = if input.from_template {
            let template = template.as_ref().ok_or_else(|| {
                AppError::NotFound(format!(
                    "Section template '{}' not found",
                    input.section_type
                ))
            })?;
            let content = input
                .content
                .unwrap_or_else(|| template.default_content.clone());
            let name = input.name.unwrap_or_else(|| template.name.clone());
            (content, name)
        } else {
            (
                input.content.unwrap_or_else(|| json!({})),
                input
                    .name
                    .unwrap_or_else(|| input.section_type.clone()),
            )
        };

        if self.config.validate_content {
            if let Some(template) = &template {
                let problems = TemplateCatalog::validate_content(template, &content);
                if !problems.is_empty() {
                    return Err(AppError::Validation(format!(
                        "Content does not match '{}' schema: {}",
                        input.section_type,
                        problems.join("; ")
                    )));
                }
            }
        }

        let siblings = self.siblings(input.page_id).await?;
        let max_order = siblings.iter().map(|s| s.order).max().unwrap_or(-1);

        let now = current_time_millis();
        let section = Section {
            id: self.id_generator.next_id(),
            page_id: input.page_id,
            section_type: input.section_type,
            name,
            order: max_order + 1,
            is_active: true,
            content,
            style: input.style.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let data = serde_json::to_value(&section)?;
        self.store
            .insert(section.id, Collection::Sections.as_str(), data)
            .await?;

        info!(
            "Created section {} ({}) on page {} at order {}",
            section.id, section.section_type, section.page_id, section.order
        );
        Ok(section.id)
    }

    /// Patch name/content/style/isActive. Order and page ownership are
    /// not mutable through this path.
    pub async fn update_section(&self, id: DocId, updates: UpdateSection) -> AppResult<DocId> {
        let section = self
            .get_section(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Section {} not found", id)))?;

        if self.config.validate_content {
            if let Some(content) = &updates.content {
                if let Some(template) = self.catalog.by_type(&section.section_type).await? {
                    let problems = TemplateCatalog::validate_content(&template, content);
                    if !problems.is_empty() {
                        return Err(AppError::Validation(format!(
                            "Content does not match '{}' schema: {}",
                            section.section_type,
                            problems.join("; ")
                        )));
                    }
                }
            }
        }

        let mut fields = Map::new();
        if let Some(name) = updates.name {
            fields.insert("name".to_string(), Value::String(name));
        }
        if let Some(content) = updates.content {
            fields.insert("content".to_string(), content);
        }
        if let Some(style) = updates.style {
            fields.insert("style".to_string(), serde_json::to_value(&style)?);
        }
        if let Some(is_active) = updates.is_active {
            fields.insert("isActive".to_string(), Value::Bool(is_active));
        }
        fields.insert("updatedAt".to_string(), json!(current_time_millis()));

        self.store.patch(id, Value::Object(fields)).await?;
        Ok(id)
    }

    /// Rewrite order indexes from a caller-supplied permutation:
    /// each listed section gets `order = position in list`.
    ///
    /// A partial list leaves omitted sections' order untouched, which can
    /// break the dense invariant. The lenient default applies the list
    /// anyway with a warning; strict mode rejects it.
    pub async fn reorder_sections(
        &self,
        page_id: DocId,
        section_ids: &[DocId],
    ) -> AppResult<()> {
        let siblings = self.siblings(page_id).await?;

        let known: std::collections::HashSet<DocId> = siblings.iter().map(|s| s.id).collect();
        for id in section_ids {
            if !known.contains(id) {
                return Err(AppError::BadRequest(format!(
                    "Section {} does not belong to page {}",
                    id, page_id
                )));
            }
        }

        let unique: std::collections::HashSet<DocId> = section_ids.iter().copied().collect();
        if unique.len() != section_ids.len() {
            return Err(AppError::BadRequest(
                "Reorder list contains duplicate section ids".to_string(),
            ));
        }

        if section_ids.len() != siblings.len() {
            if self.config.strict_reorder {
                return Err(AppError::BadRequest(format!(
                    "Reorder list covers {} of {} sections on page {}",
                    section_ids.len(),
                    siblings.len(),
                    page_id
                )));
            }
            warn!(
                "Partial reorder on page {}: {} of {} sections listed, omitted orders left stale",
                page_id,
                section_ids.len(),
                siblings.len()
            );
        }

        for (index, id) in section_ids.iter().enumerate() {
            self.store
                .patch(
                    *id,
                    json!({
                        "order": index as i64,
                        "updatedAt": current_time_millis(),
                    }),
                )
                .await?;
        }
        Ok(())
    }

    /// Delete a section and renumber the remaining siblings so their
    /// order values are a dense zero-based sequence again.
    pub async fn delete_section(&self, id: DocId) -> AppResult<()> {
        let section = self
            .get_section(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Section {} not found", id)))?;

        self.store.delete(id).await?;

        let mut remaining = self.siblings(section.page_id).await?;
        remaining.sort_by_key(|s| s.order);

        for (index, sibling) in remaining.iter().enumerate() {
            if sibling.order != index as i64 {
                self.store
                    .patch(sibling.id, json!({"order": index as i64}))
                    .await?;
            }
        }

        info!("Deleted section {} from page {}", id, section.page_id);
        Ok(())
    }

    /// Clone a section onto the end of its page's list, marking the copy
    /// in its editor-facing name.
    pub async fn duplicate_section(&self, id: DocId) -> AppResult<DocId> {
        let source = self
            .get_section(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Section {} not found", id)))?;

        let siblings = self.siblings(source.page_id).await?;
        let max_order = siblings.iter().map(|s| s.order).max().unwrap_or(-1);

        let now = current_time_millis();
        let copy = Section {
            id: self.id_generator.next_id(),
            page_id: source.page_id,
            section_type: source.section_type.clone(),
            name: format!("{} (Copy)", source.name),
            order: max_order + 1,
            is_active: source.is_active,
            content: source.content.clone(),
            style: source.style.clone(),
            created_at: now,
            updated_at: now,
        };

        let data = serde_json::to_value(&copy)?;
        self.store
            .insert(copy.id, Collection::Sections.as_str(), data)
            .await?;
        Ok(copy.id)
    }

    /// Remove sections whose parent page no longer resolves. The cascade
    /// page delete is two-phase, so a crash between phases can strand
    /// sections; this sweep is the recovery path.
    pub async fn sweep_orphans(&self) -> AppResult<usize> {
        let docs = self
            .store
            .query(DocQuery::collection(Collection::Sections.as_str()))
            .await?;

        let mut removed = 0;
        for doc in docs {
            let section = Self::decode(doc)?;
            let parent = self.store.get(section.page_id).await?;
            let parent_is_page = parent
                .map(|d| d.collection == Collection::Pages.as_str())
                .unwrap_or(false);
            if !parent_is_page {
                warn!(
                    "Sweeping orphaned section {} (page {} is gone)",
                    section.id, section.page_id
                );
                self.store.delete(section.id).await?;
                removed += 1;
            }
        }

        if removed > 0 {
            info!("Orphan sweep removed {} sections", removed);
        }
        Ok(removed)
    }
}

impl CreateSection {
    /// Plain section creation payload with explicit content
    pub fn with_content(page_id: DocId, section_type: &str, name: &str, content: Value) -> Self {
        Self {
            page_id,
            section_type: section_type.to_string(),
            name: Some(name.to_string()),
            content: Some(content),
            style: None,
            from_template: false,
        }
    }

    /// Creation payload seeded from the template catalog
    pub fn from_template(page_id: DocId, section_type: &str) -> Self {
        Self {
            page_id,
            section_type: section_type.to_string(),
            name: None,
            content: None,
            style: None,
            from_template: true,
        }
    }
}
