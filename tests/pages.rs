mod common;

use cms_core::models::{CreatePage, CreateSection, UpdatePage, UpdateSection};
use cms_core::AppError;
use serde_json::json;

fn page_input(slug: &str, homepage: bool) -> CreatePage {
    CreatePage {
        slug: slug.to_string(),
        title: slug.to_string(),
        description: format!("{} page", slug),
        is_homepage: Some(homepage),
    }
}

#[tokio::test]
async fn test_at_most_one_homepage_across_sequential_creates() {
    let cms = common::cms().await;

    let first = cms.pages.create_page(page_input("first", true)).await.unwrap();
    let second = cms.pages.create_page(page_input("second", true)).await.unwrap();

    let pages = cms.pages.list_pages().await.unwrap();
    let holders: Vec<_> = pages.iter().filter(|p| p.is_homepage).collect();
    assert_eq!(holders.len(), 1);
    assert_eq!(holders[0].id, second);

    let first_page = cms.pages.get_page(first).await.unwrap().unwrap();
    assert!(!first_page.page.is_homepage);
}

#[tokio::test]
async fn test_update_moves_homepage_flag() {
    let cms = common::cms().await;

    let home = cms.pages.create_page(page_input("home", true)).await.unwrap();
    let about = cms.pages.create_page(page_input("about", false)).await.unwrap();

    cms.pages
        .update_page(
            about,
            UpdatePage {
                is_homepage: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let pages = cms.pages.list_pages().await.unwrap();
    let holders: Vec<_> = pages.iter().filter(|p| p.is_homepage).collect();
    assert_eq!(holders.len(), 1);
    assert_eq!(holders[0].id, about);

    // Setting the flag on the current holder keeps it
    cms.pages
        .update_page(
            about,
            UpdatePage {
                is_homepage: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let refreshed = cms.pages.get_page(about).await.unwrap().unwrap();
    assert!(refreshed.page.is_homepage);

    let old = cms.pages.get_page(home).await.unwrap().unwrap();
    assert!(!old.page.is_homepage);
}

#[tokio::test]
async fn test_partial_update_touches_only_given_fields() {
    let cms = common::cms().await;
    let id = cms.pages.create_page(page_input("services", false)).await.unwrap();

    cms.pages
        .update_page(
            id,
            UpdatePage {
                title: Some("Services".to_string()),
                keywords: Some("accounting, payroll".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let page = cms.pages.get_page(id).await.unwrap().unwrap().page;
    assert_eq!(page.title, "Services");
    assert_eq!(page.keywords.as_deref(), Some("accounting, payroll"));
    // Untouched fields keep their values
    assert_eq!(page.slug, "services");
    assert!(page.is_active);
    assert!(page.updated_at >= page.created_at);
}

#[tokio::test]
async fn test_update_missing_page_fails() {
    let cms = common::cms().await;
    let err = cms
        .pages
        .update_page(999, UpdatePage::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_list_pages_most_recent_first() {
    let cms = common::cms().await;
    let a = cms.pages.create_page(page_input("a", false)).await.unwrap();
    let b = cms.pages.create_page(page_input("b", false)).await.unwrap();
    let c = cms.pages.create_page(page_input("c", false)).await.unwrap();

    let ids: Vec<_> = cms
        .pages
        .list_pages()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![c, b, a]);
}

#[tokio::test]
async fn test_homepage_assembly_filters_inactive_sections() {
    let cms = common::cms().await;
    let home = cms.pages.create_page(page_input("home", true)).await.unwrap();

    let visible = cms
        .sections
        .create_section(CreateSection::with_content(
            home,
            "text-block",
            "Visible",
            json!({"body": "<p>shown</p>"}),
        ))
        .await
        .unwrap();
    let hidden = cms
        .sections
        .create_section(CreateSection::with_content(
            home,
            "text-block",
            "Hidden",
            json!({"body": "<p>draft</p>"}),
        ))
        .await
        .unwrap();
    cms.sections
        .update_section(
            hidden,
            UpdateSection {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Live homepage render path: active sections only
    let homepage = cms.pages.get_homepage().await.unwrap().unwrap();
    assert_eq!(homepage.sections.len(), 1);
    assert_eq!(homepage.sections[0].id, visible);

    // Admin preview paths see hidden sections too
    let by_slug = cms.pages.get_by_slug("home").await.unwrap().unwrap();
    assert_eq!(by_slug.sections.len(), 2);
    let by_id = cms.pages.get_page(home).await.unwrap().unwrap();
    assert_eq!(by_id.sections.len(), 2);
}

#[tokio::test]
async fn test_missing_lookups_return_none() {
    let cms = common::cms().await;
    assert!(cms.pages.get_page(12345).await.unwrap().is_none());
    assert!(cms.pages.get_by_slug("nope").await.unwrap().is_none());
    assert!(cms.pages.get_homepage().await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_page_cascades_to_sections() {
    let cms = common::cms().await;
    let page = cms.pages.create_page(page_input("doomed", false)).await.unwrap();

    for i in 0..3 {
        cms.sections
            .create_section(CreateSection::with_content(
                page,
                "text-block",
                &format!("s{}", i),
                json!({}),
            ))
            .await
            .unwrap();
    }
    assert_eq!(cms.sections.get_sections_for_page(page).await.unwrap().len(), 3);

    cms.pages.delete_page(page).await.unwrap();

    assert!(cms.pages.get_page(page).await.unwrap().is_none());
    assert!(cms
        .sections
        .get_sections_for_page(page)
        .await
        .unwrap()
        .is_empty());

    let err = cms.pages.delete_page(page).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
