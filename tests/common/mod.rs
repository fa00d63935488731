#![allow(dead_code)]

use std::sync::Arc;

use cms_core::config::CmsConfig;
use cms_core::services::{PageService, SectionService, TemplateCatalog};
use cms_core::store::{CmsIdGenerator, DocumentStore, SqliteStore};

pub struct TestCms {
    pub store: Arc<dyn DocumentStore>,
    pub pages: PageService,
    pub sections: SectionService,
    pub templates: TemplateCatalog,
}

pub async fn cms_with_config(config: CmsConfig) -> TestCms {
    let store: Arc<dyn DocumentStore> = Arc::new(SqliteStore::new_in_memory().await.unwrap());
    let id_generator = Arc::new(CmsIdGenerator::new(0));

    let templates = TemplateCatalog::new(store.clone(), id_generator.clone());
    let sections = SectionService::new(
        store.clone(),
        id_generator.clone(),
        templates.clone(),
        config,
    );
    let pages = PageService::new(store.clone(), id_generator, sections.clone());

    TestCms {
        store,
        pages,
        sections,
        templates,
    }
}

pub async fn cms() -> TestCms {
    cms_with_config(CmsConfig::default()).await
}
