// Demo-site seeding: builds a starter homepage from catalog templates so a
// fresh database renders something. Skipped whenever any page exists.

use tracing::info;

use crate::error::AppResult;
use crate::models::{CreatePage, CreateSection, UpdateSection};
use crate::services::pages::PageService;
use crate::services::sections::SectionService;
use crate::services::templates::TemplateCatalog;

pub async fn seed_demo_site(
    templates: &TemplateCatalog,
    pages: &PageService,
    sections: &SectionService,
) -> AppResult<()> {
    templates.seed().await?;

    if !pages.list_pages().await?.is_empty() {
        info!("Pages already exist, skipping demo seed");
        return Ok(());
    }

    let home_id = pages
        .create_page(CreatePage {
            slug: "home".to_string(),
            title: "Home".to_string(),
            description: "Demo homepage built from the section library".to_string(),
            is_homepage: Some(true),
        })
        .await?;

    for template_type in ["hero-image-right", "feature-grid-3", "cta-simple"] {
        sections
            .create_section(CreateSection::from_template(home_id, template_type))
            .await?;
    }

    // One hidden draft so the admin preview differs from the live render
    let draft_id = sections
        .create_section(CreateSection::from_template(home_id, "newsletter"))
        .await?;
    sections
        .update_section(
            draft_id,
            UpdateSection {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    info!("Seeded demo homepage {} with 4 sections", home_id);
    Ok(())
}
