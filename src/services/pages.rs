use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{Collection, CreatePage, Page, PageWithSections, UpdatePage};
use crate::services::sections::SectionService;
use crate::store::{
    current_time_millis, CmsIdGenerator, DocId, DocQuery, DocumentStore, FieldFilter,
};

/// CRUD over page records plus the page assembly query.
/// Owns the single-homepage invariant: setting `isHomepage` clears the flag
/// on whichever page currently holds it. The clear-then-set is two separate
/// writes, not a transaction; concurrent writers can race (documented).
#[derive(Clone)]
pub struct PageService {
    store: Arc<dyn DocumentStore>,
    id_generator: Arc<CmsIdGenerator>,
    sections: SectionService,
}

impl PageService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        id_generator: Arc<CmsIdGenerator>,
        sections: SectionService,
    ) -> Self {
        Self {
            store,
            id_generator,
            sections,
        }
    }

    fn decode(doc: crate::store::Document) -> AppResult<Page> {
        serde_json::from_value(doc.data).map_err(|e| {
            AppError::SerializationError(format!("Corrupt page document {}: {}", doc.id, e))
        })
    }

    async fn current_homepage(&self) -> AppResult<Option<Page>> {
        let doc = self
            .store
            .query_first(
                DocQuery::collection(Collection::Pages.as_str())
                    .with_filter(FieldFilter::eq_bool("isHomepage", true)),
            )
            .await?;
        doc.map(Self::decode).transpose()
    }

    /// Clear the homepage flag on the current holder, if it is a
    /// different page than `keep`
    async fn unset_other_homepage(&self, keep: Option<DocId>) -> AppResult<()> {
        if let Some(existing) = self.current_homepage().await? {
            if Some(existing.id) != keep {
                self.store
                    .patch(existing.id, json!({"isHomepage": false}))
                    .await?;
            }
        }
        Ok(())
    }

    pub async fn create_page(&self, input: CreatePage) -> AppResult<DocId> {
        let is_homepage = input.is_homepage.unwrap_or(false);
        if is_homepage {
            self.unset_other_homepage(None).await?;
        }

        let now = current_time_millis();
        let page = Page {
            id: self.id_generator.next_id(),
            slug: input.slug,
            title: input.title,
            description: input.description,
            keywords: None,
            og_image: None,
            is_active: true,
            is_homepage,
            created_at: now,
            updated_at: now,
        };

        let data = serde_json::to_value(&page)?;
        self.store
            .insert(page.id, Collection::Pages.as_str(), data)
            .await?;

        info!("Created page {} (slug '{}')", page.id, page.slug);
        Ok(page.id)
    }

    /// Apply only the provided fields; always refreshes `updatedAt`
    pub async fn update_page(&self, id: DocId, updates: UpdatePage) -> AppResult<DocId> {
        self.get_page_record(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Page {} not found", id)))?;

        if updates.is_homepage == Some(true) {
            self.unset_other_homepage(Some(id)).await?;
        }

        let mut fields = Map::new();
        if let Some(slug) = updates.slug {
            fields.insert("slug".to_string(), Value::String(slug));
        }
        if let Some(title) = updates.title {
            fields.insert("title".to_string(), Value::String(title));
        }
        if let Some(description) = updates.description {
            fields.insert("description".to_string(), Value::String(description));
        }
        if let Some(keywords) = updates.keywords {
            fields.insert("keywords".to_string(), Value::String(keywords));
        }
        if let Some(og_image) = updates.og_image {
            fields.insert("ogImage".to_string(), Value::String(og_image));
        }
        if let Some(is_active) = updates.is_active {
            fields.insert("isActive".to_string(), Value::Bool(is_active));
        }
        if let Some(is_homepage) = updates.is_homepage {
            fields.insert("isHomepage".to_string(), Value::Bool(is_homepage));
        }
        fields.insert("updatedAt".to_string(), json!(current_time_millis()));

        self.store.patch(id, Value::Object(fields)).await?;
        Ok(id)
    }

    /// Delete all of a page's sections, then the page itself.
    /// Two-phase; a crash between phases can strand sections, which the
    /// orphan sweep cleans up.
    pub async fn delete_page(&self, id: DocId) -> AppResult<()> {
        self.get_page_record(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Page {} not found", id)))?;

        let sections = self.sections.get_sections_for_page(id).await?;
        let count = sections.len();
        for section in sections {
            self.store.delete(section.id).await?;
        }

        self.store.delete(id).await?;
        info!("Deleted page {} and its {} sections", id, count);
        Ok(())
    }

    /// All pages, most recently created first, without section expansion
    pub async fn list_pages(&self) -> AppResult<Vec<Page>> {
        let docs = self
            .store
            .query(DocQuery::collection(Collection::Pages.as_str()).descending())
            .await?;
        docs.into_iter().map(Self::decode).collect()
    }

    async fn get_page_record(&self, id: DocId) -> AppResult<Option<Page>> {
        let doc = self.store.get(id).await?;
        match doc {
            Some(doc) if doc.collection == Collection::Pages.as_str() => {
                Ok(Some(Self::decode(doc)?))
            }
            _ => Ok(None),
        }
    }

    async fn assemble(&self, page: Page, active_only: bool) -> AppResult<PageWithSections> {
        let mut sections = self.sections.get_sections_for_page(page.id).await?;
        if active_only {
            sections.retain(|s| s.is_active);
        }
        Ok(PageWithSections { page, sections })
    }

    /// Page by id with ALL of its sections, for admin preview of hidden
    /// sections
    pub async fn get_page(&self, id: DocId) -> AppResult<Option<PageWithSections>> {
        match self.get_page_record(id).await? {
            Some(page) => Ok(Some(self.assemble(page, false).await?)),
            None => Ok(None),
        }
    }

    /// Page by slug with ALL of its sections
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Option<PageWithSections>> {
        let doc = self
            .store
            .query_first(
                DocQuery::collection(Collection::Pages.as_str())
                    .with_filter(FieldFilter::eq_str("slug", slug)),
            )
            .await?;

        match doc.map(Self::decode).transpose()? {
            Some(page) => Ok(Some(self.assemble(page, false).await?)),
            None => Ok(None),
        }
    }

    /// The designated homepage with only its active sections - draft
    /// sections never appear on the live homepage render
    pub async fn get_homepage(&self) -> AppResult<Option<PageWithSections>> {
        match self.current_homepage().await? {
            Some(page) => Ok(Some(self.assemble(page, true).await?)),
            None => Ok(None),
        }
    }
}
