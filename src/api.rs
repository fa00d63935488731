// HTTP surface for the CMS core - thin axum handlers over the content
// services, consumed by the admin panel and the public site renderer.

use axum::{
    extract::{Path, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    app_state::AppState,
    error::{AppError, AppResult},
    models::{CreatePage, CreateSection, UpdatePage, UpdateSection},
    render::render_page,
    store::DocId,
};

pub fn create_cms_router(state: AppState) -> Router {
    Router::new()
        .route("/pages", get(list_pages).post(create_page))
        .route("/pages/homepage", get(get_homepage))
        .route("/pages/slug/{slug}", get(get_page_by_slug))
        .route(
            "/pages/{id}",
            get(get_page).patch(update_page).delete(delete_page),
        )
        .route("/pages/{id}/sections", get(get_page_sections))
        .route("/pages/{id}/sections/reorder", post(reorder_sections))
        .route("/pages/{id}/render", get(render_page_html))
        .route("/sections", post(create_section))
        .route("/sections/sweep", post(sweep_orphans))
        .route(
            "/sections/{id}",
            get(get_section).patch(update_section).delete(delete_section),
        )
        .route("/sections/{id}/duplicate", post(duplicate_section))
        .route("/templates", get(list_templates))
        .route("/templates/category/{category}", get(templates_by_category))
        .route("/templates/type/{type}", get(template_by_type))
        .route("/templates/seed", post(seed_templates))
        .route("/templates/reset", post(reset_templates))
        .with_state(state)
}

// ===== Pages =====

async fn list_pages(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let pages = state.pages.list_pages().await?;
    Ok(Json(json!({ "pages": pages })))
}

async fn create_page(
    State(state): State<AppState>,
    Json(input): Json<CreatePage>,
) -> AppResult<Json<Value>> {
    let id = state.pages.create_page(input).await?;
    Ok(Json(json!({ "id": id })))
}

async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Json<Value>> {
    let page = state
        .pages
        .get_page(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Page {} not found", id)))?;
    Ok(Json(serde_json::to_value(page)?))
}

async fn get_page_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Value>> {
    let page = state
        .pages
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Page '{}' not found", slug)))?;
    Ok(Json(serde_json::to_value(page)?))
}

async fn get_homepage(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let page = state
        .pages
        .get_homepage()
        .await?
        .ok_or_else(|| AppError::NotFound("No homepage is configured".to_string()))?;
    Ok(Json(serde_json::to_value(page)?))
}

async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    Json(updates): Json<UpdatePage>,
) -> AppResult<Json<Value>> {
    let id = state.pages.update_page(id, updates).await?;
    Ok(Json(json!({ "id": id })))
}

async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Json<Value>> {
    state.pages.delete_page(id).await?;
    Ok(Json(json!({ "deleted": id })))
}

async fn render_page_html(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Html<String>> {
    let page = state
        .pages
        .get_page(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Page {} not found", id)))?;
    Ok(Html(render_page(&page)))
}

// ===== Sections =====

async fn get_page_sections(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Json<Value>> {
    let sections = state.sections.get_sections_for_page(id).await?;
    Ok(Json(json!({ "sections": sections })))
}

async fn create_section(
    State(state): State<AppState>,
    Json(input): Json<CreateSection>,
) -> AppResult<Json<Value>> {
    let id = state.sections.create_section(input).await?;
    Ok(Json(json!({ "id": id })))
}

async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Json<Value>> {
    let section = state
        .sections
        .get_section(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Section {} not found", id)))?;
    Ok(Json(serde_json::to_value(section)?))
}

async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    Json(updates): Json<UpdateSection>,
) -> AppResult<Json<Value>> {
    let id = state.sections.update_section(id, updates).await?;
    Ok(Json(json!({ "id": id })))
}

async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Json<Value>> {
    state.sections.delete_section(id).await?;
    Ok(Json(json!({ "deleted": id })))
}

async fn duplicate_section(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Json<Value>> {
    let new_id = state.sections.duplicate_section(id).await?;
    Ok(Json(json!({ "id": new_id })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReorderRequest {
    section_ids: Vec<DocId>,
}

async fn reorder_sections(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    Json(request): Json<ReorderRequest>,
) -> AppResult<Json<Value>> {
    state
        .sections
        .reorder_sections(id, &request.section_ids)
        .await?;
    Ok(Json(json!({ "reordered": request.section_ids.len() })))
}

async fn sweep_orphans(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let removed = state.sections.sweep_orphans().await?;
    Ok(Json(json!({ "removed": removed })))
}

// ===== Templates =====

async fn list_templates(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let templates = state.templates.list().await?;
    Ok(Json(json!({ "templates": templates })))
}

async fn templates_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Value>> {
    let templates = state.templates.by_category(&category).await?;
    Ok(Json(json!({ "templates": templates })))
}

async fn template_by_type(
    State(state): State<AppState>,
    Path(template_type): Path<String>,
) -> AppResult<Json<Value>> {
    let template = state
        .templates
        .by_type(&template_type)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Section template '{}' not found", template_type))
        })?;
    Ok(Json(serde_json::to_value(template)?))
}

async fn seed_templates(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let outcome = state.templates.seed().await?;
    Ok(Json(json!({ "message": outcome.message() })))
}

async fn reset_templates(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let outcome = state.templates.reset().await?;
    Ok(Json(json!({ "message": outcome.message() })))
}
