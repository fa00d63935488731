mod common;

use cms_core::config::CmsConfig;
use cms_core::models::{CreatePage, CreateSection, SectionStyle, UpdateSection};
use cms_core::AppError;
use serde_json::json;

async fn page(cms: &common::TestCms, slug: &str) -> i64 {
    cms.pages
        .create_page(CreatePage {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: String::new(),
            is_homepage: None,
        })
        .await
        .unwrap()
}

fn orders(sections: &[cms_core::models::Section]) -> Vec<i64> {
    sections.iter().map(|s| s.order).collect()
}

#[tokio::test]
async fn test_create_appends_at_end_and_round_trips_content() {
    let cms = common::cms().await;
    let page = page(&cms, "home").await;

    let content = json!({
        "heading": "Our Services",
        "items": [{"title": "Payroll", "description": "We run it"}],
    });
    cms.sections
        .create_section(CreateSection::with_content(page, "text-block", "One", json!({})))
        .await
        .unwrap();
    let id = cms
        .sections
        .create_section(CreateSection::with_content(
            page,
            "feature-grid-3",
            "Two",
            content.clone(),
        ))
        .await
        .unwrap();

    let sections = cms.sections.get_sections_for_page(page).await.unwrap();
    assert_eq!(sections.len(), 2);
    let last = sections.last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.order, 1);
    assert_eq!(last.content, content);
    assert!(last.is_active);
    assert!(last.style.is_empty());
}

#[tokio::test]
async fn test_create_from_template_seeds_default_content() {
    let cms = common::cms().await;
    cms.templates.seed().await.unwrap();
    let page = page(&cms, "home").await;

    let id = cms
        .sections
        .create_section(CreateSection::from_template(page, "hero-image-right"))
        .await
        .unwrap();

    let section = cms.sections.get_section(id).await.unwrap().unwrap();
    let template = cms
        .templates
        .by_type("hero-image-right")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(section.content, template.default_content);
    assert_eq!(section.name, template.name);

    let err = cms
        .sections
        .create_section(CreateSection::from_template(page, "no-such-template"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_compacts_sibling_orders() {
    let cms = common::cms().await;
    let page = page(&cms, "home").await;

    let mut ids = Vec::new();
    for i in 0..4 {
        ids.push(
            cms.sections
                .create_section(CreateSection::with_content(
                    page,
                    "text-block",
                    &format!("s{}", i),
                    json!({}),
                ))
                .await
                .unwrap(),
        );
    }

    // Remove a middle section; remaining orders must be dense again
    cms.sections.delete_section(ids[1]).await.unwrap();
    let sections = cms.sections.get_sections_for_page(page).await.unwrap();
    assert_eq!(orders(&sections), vec![0, 1, 2]);
    assert_eq!(
        sections.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![ids[0], ids[2], ids[3]]
    );

    // Removing the head compacts too
    cms.sections.delete_section(ids[0]).await.unwrap();
    let sections = cms.sections.get_sections_for_page(page).await.unwrap();
    assert_eq!(orders(&sections), vec![0, 1]);
}

#[tokio::test]
async fn test_full_reorder_rewrites_positions() {
    let cms = common::cms().await;
    let home = page(&cms, "home").await;

    let a = cms
        .sections
        .create_section(CreateSection::with_content(home, "hero-image-right", "A", json!({})))
        .await
        .unwrap();
    let b = cms
        .sections
        .create_section(CreateSection::with_content(home, "text-block", "B", json!({})))
        .await
        .unwrap();

    cms.sections.reorder_sections(home, &[b, a]).await.unwrap();

    let sections = cms.sections.get_sections_for_page(home).await.unwrap();
    assert_eq!(sections.iter().map(|s| s.id).collect::<Vec<_>>(), vec![b, a]);
    assert_eq!(orders(&sections), vec![0, 1]);
}

#[tokio::test]
async fn test_partial_reorder_is_lenient_by_default() {
    let cms = common::cms().await;
    let home = page(&cms, "home").await;

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        ids.push(
            cms.sections
                .create_section(CreateSection::with_content(home, "text-block", name, json!({})))
                .await
                .unwrap(),
        );
    }

    // Only the tail section listed: it moves to position 0, the omitted
    // sections keep their old order values (documented hazard)
    cms.sections.reorder_sections(home, &[ids[2]]).await.unwrap();

    let moved = cms.sections.get_section(ids[2]).await.unwrap().unwrap();
    assert_eq!(moved.order, 0);
    let untouched = cms.sections.get_section(ids[1]).await.unwrap().unwrap();
    assert_eq!(untouched.order, 1);
}

#[tokio::test]
async fn test_strict_reorder_rejects_bad_lists() {
    let cms = common::cms_with_config(CmsConfig {
        strict_reorder: true,
        ..Default::default()
    })
    .await;
    let home = page(&cms, "home").await;
    let other = page(&cms, "other").await;

    let a = cms
        .sections
        .create_section(CreateSection::with_content(home, "text-block", "a", json!({})))
        .await
        .unwrap();
    let b = cms
        .sections
        .create_section(CreateSection::with_content(home, "text-block", "b", json!({})))
        .await
        .unwrap();
    let foreign = cms
        .sections
        .create_section(CreateSection::with_content(other, "text-block", "x", json!({})))
        .await
        .unwrap();

    let err = cms.sections.reorder_sections(home, &[a]).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = cms
        .sections
        .reorder_sections(home, &[a, foreign])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = cms
        .sections
        .reorder_sections(home, &[a, a, b])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    // A complete permutation still works in strict mode
    cms.sections.reorder_sections(home, &[b, a]).await.unwrap();
    let sections = cms.sections.get_sections_for_page(home).await.unwrap();
    assert_eq!(orders(&sections), vec![0, 1]);
}

#[tokio::test]
async fn test_duplicate_clones_and_appends() {
    let cms = common::cms().await;
    let home = page(&cms, "home").await;

    let style = SectionStyle {
        background_color: Some("#123456".to_string()),
        ..Default::default()
    };
    let source_id = cms
        .sections
        .create_section(CreateSection {
            page_id: home,
            section_type: "cta-simple".to_string(),
            name: Some("Big CTA".to_string()),
            content: Some(json!({"heading": "Go", "ctaText": "Now"})),
            style: Some(style.clone()),
            from_template: false,
        })
        .await
        .unwrap();
    cms.sections
        .create_section(CreateSection::with_content(home, "text-block", "Filler", json!({})))
        .await
        .unwrap();

    let copy_id = cms.sections.duplicate_section(source_id).await.unwrap();
    assert_ne!(copy_id, source_id);

    let source = cms.sections.get_section(source_id).await.unwrap().unwrap();
    let copy = cms.sections.get_section(copy_id).await.unwrap().unwrap();
    assert_eq!(copy.content, source.content);
    assert_eq!(copy.style, style);
    assert_eq!(copy.is_active, source.is_active);
    assert_eq!(copy.name, "Big CTA (Copy)");
    assert_eq!(copy.order, 2);
    assert_eq!(copy.page_id, home);
}

#[tokio::test]
async fn test_update_patches_only_given_fields() {
    let cms = common::cms().await;
    let home = page(&cms, "home").await;
    let id = cms
        .sections
        .create_section(CreateSection::with_content(
            home,
            "text-block",
            "Story",
            json!({"body": "<p>v1</p>"}),
        ))
        .await
        .unwrap();

    cms.sections
        .update_section(
            id,
            UpdateSection {
                content: Some(json!({"body": "<p>v2</p>"})),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let section = cms.sections.get_section(id).await.unwrap().unwrap();
    assert_eq!(section.content, json!({"body": "<p>v2</p>"}));
    assert_eq!(section.name, "Story");
    assert_eq!(section.order, 0);
    assert!(section.is_active);
}

#[tokio::test]
async fn test_concurrent_updates_keep_both_fields() {
    let cms = common::cms().await;
    let home = page(&cms, "home").await;
    let id = cms
        .sections
        .create_section(CreateSection::with_content(home, "text-block", "Original", json!({})))
        .await
        .unwrap();

    for round in 0..10 {
        let name = format!("Renamed {}", round);

        let renamer = {
            let sections = cms.sections.clone();
            let name = name.clone();
            tokio::spawn(async move {
                sections
                    .update_section(
                        id,
                        UpdateSection {
                            name: Some(name),
                            ..Default::default()
                        },
                    )
                    .await
            })
        };
        let hider = {
            let sections = cms.sections.clone();
            tokio::spawn(async move {
                sections
                    .update_section(
                        id,
                        UpdateSection {
                            is_active: Some(false),
                            ..Default::default()
                        },
                    )
                    .await
            })
        };
        renamer.await.unwrap().unwrap();
        hider.await.unwrap().unwrap();

        // Neither update may clobber the other's field
        let section = cms.sections.get_section(id).await.unwrap().unwrap();
        assert_eq!(section.name, name);
        assert!(!section.is_active);

        cms.sections
            .update_section(
                id,
                UpdateSection {
                    is_active: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_mutations_on_missing_sections_fail() {
    let cms = common::cms().await;
    assert!(matches!(
        cms.sections.delete_section(404).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        cms.sections
            .update_section(404, UpdateSection::default())
            .await
            .unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        cms.sections.duplicate_section(404).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(cms.sections.get_section(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_orphan_sweep_removes_stranded_sections() {
    let cms = common::cms().await;
    let home = page(&cms, "home").await;
    let keep = page(&cms, "keep").await;

    cms.sections
        .create_section(CreateSection::with_content(home, "text-block", "a", json!({})))
        .await
        .unwrap();
    cms.sections
        .create_section(CreateSection::with_content(home, "text-block", "b", json!({})))
        .await
        .unwrap();
    let kept = cms
        .sections
        .create_section(CreateSection::with_content(keep, "text-block", "c", json!({})))
        .await
        .unwrap();

    // Simulate a crash between the two phases of a cascade delete: the
    // page record vanishes while its sections survive
    cms.store.delete(home).await.unwrap();

    let removed = cms.sections.sweep_orphans().await.unwrap();
    assert_eq!(removed, 2);
    assert!(cms.sections.get_section(kept).await.unwrap().is_some());

    // A clean store sweeps nothing
    assert_eq!(cms.sections.sweep_orphans().await.unwrap(), 0);
}

#[tokio::test]
async fn test_content_validation_when_enabled() {
    let cms = common::cms_with_config(CmsConfig {
        validate_content: true,
        ..Default::default()
    })
    .await;
    cms.templates.seed().await.unwrap();
    let home = page(&cms, "home").await;

    // cta-simple requires heading, ctaText and ctaLink
    let err = cms
        .sections
        .create_section(CreateSection::with_content(
            home,
            "cta-simple",
            "Bad",
            json!({"heading": "Only heading"}),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let id = cms
        .sections
        .create_section(CreateSection::with_content(
            home,
            "cta-simple",
            "Good",
            json!({"heading": "Go", "ctaText": "Now", "ctaLink": "/x"}),
        ))
        .await
        .unwrap();

    let err = cms
        .sections
        .update_section(
            id,
            UpdateSection {
                content: Some(json!({"heading": "Go", "ctaText": "Now", "ctaLink": "/x", "ctaStyle": "sparkly"})),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Types with no catalog entry stay unvalidated
    cms.sections
        .create_section(CreateSection::with_content(
            home,
            "custom-widget",
            "Free-form",
            json!({"anything": "goes"}),
        ))
        .await
        .unwrap();
}
