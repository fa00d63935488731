use serde::{Deserialize, Serialize};

use crate::models::Section;
use crate::store::DocId;

/// A routable content unit identified by a slug, composed of ordered sections.
/// Slug uniqueness is expected but not enforced at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: DocId,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    pub is_active: bool,
    pub is_homepage: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Page record expanded with its sections, sorted by order index
#[derive(Debug, Clone, Serialize)]
pub struct PageWithSections {
    #[serde(flatten)]
    pub page: Page,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePage {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_homepage: Option<bool>,
}

/// Partial page update - only provided fields are written
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePage {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_homepage: Option<bool>,
}
