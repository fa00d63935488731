use std::sync::Arc;

use crate::{
    config::Config,
    services::{seed::seed_demo_site, PageService, SectionService, TemplateCatalog},
    store::{CmsIdGenerator, DocumentStore, SqliteStore},
};

#[derive(Clone)]
pub struct AppState {
    pub pages: PageService,
    pub sections: SectionService,
    pub templates: TemplateCatalog,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn DocumentStore> =
            Arc::new(SqliteStore::connect(&config.database.url).await?);
        Self::with_store(store, config).await
    }

    /// Wire the services over an already-constructed store.
    /// Tests use this with an in-memory store.
    pub async fn with_store(
        store: Arc<dyn DocumentStore>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let id_generator = Arc::new(CmsIdGenerator::new(0));

        let templates = TemplateCatalog::new(store.clone(), id_generator.clone());
        let sections = SectionService::new(
            store.clone(),
            id_generator.clone(),
            templates.clone(),
            config.cms.clone(),
        );
        let pages = PageService::new(store, id_generator, sections.clone());

        if config.cms.seed_demo {
            seed_demo_site(&templates, &pages, &sections).await?;
        } else {
            templates.seed().await?;
        }

        Ok(Self {
            pages,
            sections,
            templates,
            config,
        })
    }
}
